//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Short-link redirector
#[derive(Parser)]
#[command(name = "redirector")]
#[command(version)]
#[command(about = "Resolve short links against a link backend and redirect", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP redirector (default)
    Serve,

    /// Run the redirect workflow once for a page path and print the outcome
    ///
    /// Example: resolve /r/docs
    Resolve {
        /// Page path; its last segment is the short name
        path: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["redirector"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_resolve_with_config() {
        let cli = Cli::parse_from(["redirector", "resolve", "/r/docs", "-c", "custom.toml"]);
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                path: "/r/docs".to_string()
            })
        );
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_config_generate() {
        let cli = Cli::parse_from(["redirector", "config", "generate", "out.toml", "--force"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Generate {
                output_path: Some("out.toml".to_string()),
                force: true,
            }))
        );
    }
}

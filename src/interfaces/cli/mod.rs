//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};

#[derive(Debug)]
pub enum CliError {
    /// 重定向失败（未找到或后端错误）
    LinkUnavailable(String),
    StartupError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::LinkUnavailable(path) => format!("Invalid or expired link: {}", path),
            CliError::StartupError(msg) => format!("Startup error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::LinkUnavailable(path) => {
                format!("{} {}", "Invalid or expired link:".yellow().bold(), path.white())
            }
            CliError::StartupError(msg) => {
                format!("{} {}", "Startup error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

/// 执行 CLI 子命令（`serve` 由 main 直接处理）
pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by server mode".to_string(),
        )),
        Commands::Resolve { path } => commands::resolve::resolve_path(&path).await,
        Commands::Config(ConfigCommands::Generate { output_path, force }) => {
            commands::config_gen::config_generate(output_path, force)
        }
    }
}

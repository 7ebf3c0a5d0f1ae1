use clap::Parser;

use shortlink_redirector::cli::{Cli, Commands};
use shortlink_redirector::config::{get_config, init_config_from};
use shortlink_redirector::errors::RedirectorError;
#[cfg(any(feature = "server", feature = "cli"))]
use shortlink_redirector::runtime::modes;
use shortlink_redirector::system::logging::init_logging;

#[cfg(feature = "server")]
fn format_error(e: &RedirectorError) -> String {
    e.format_colored()
}

#[cfg(not(feature = "server"))]
fn format_error(e: &RedirectorError) -> String {
    e.format_simple()
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(&cli.config);

    let config = get_config();
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Serve) {
        #[cfg(feature = "server")]
        Commands::Serve => modes::run_server().await,
        #[cfg(feature = "cli")]
        command => {
            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        #[cfg(not(feature = "cli"))]
        command => anyhow::bail!("{:?} is not available in this build", command),
    }
}

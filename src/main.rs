use anyhow::Context;
use clap::Parser;
use qiesi_convert::utils::{logger, validation::Validate};
use qiesi_convert::{http, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_server_logger(config.verbose, config.log_json);

    tracing::info!("Starting qiesi-convert v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    http::run(&config).await.context("server terminated")?;

    Ok(())
}

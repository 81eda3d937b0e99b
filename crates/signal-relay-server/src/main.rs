/*
[INPUT]:  CLI arguments, environment variables, OS shutdown signals
[OUTPUT]: Running webhook relay with graceful shutdown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use signal_relay_server::{server, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "signal-relay", version, about = "Trading signal webhook relay")]
struct Cli {
    /// Tracing filter directive; `RUST_LOG` takes precedence when set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit without contacting the exchange
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    install_subscriber(&args.log_level)?;

    let config = AppConfig::from_env().context("load config")?;
    let exchange_config = config.exchange_config()?;
    let bind_address = config.bind_address()?;
    info!(
        config = ?config,
        dry_run = args.dry_run,
        "signal-relay starting"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let state = server::bootstrap(&config, &exchange_config).await?;

    let shutdown = CancellationToken::new();
    server::cancel_on_signal(shutdown.clone());
    server::serve(bind_address, state, shutdown)
        .await
        .context("run webhook server")?;

    info!("shutdown complete");
    Ok(())
}

fn install_subscriber(log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level '{log_level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("install tracing subscriber")
}

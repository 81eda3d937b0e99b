/*
[INPUT]:  Relay configuration, bind address, shutdown token, OS signals
[OUTPUT]: Prepared application state; running HTTP server until cancelled
[POS]:    Transport layer - startup wiring and TCP listener
[UPDATE]: When changing startup, listener setup or shutdown behavior
*/

use std::net::SocketAddr;

use anyhow::{Context, Result};
use signal_relay_adapter::{ExchangeConfig, ExchangeRegistry};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::webhook::{router, AppState, WEBHOOK_PATH};

/// Build the exchange client and warm its market cache
///
/// A failed market load is logged and the relay keeps going; order
/// placement loads markets again on demand.
pub async fn bootstrap(config: &AppConfig, exchange_config: &ExchangeConfig) -> Result<AppState> {
    if config.uses_default_secret() {
        warn!("WEBHOOK_SECRET_KEY not set; using the default secret");
    }
    if exchange_config.credentials().is_none() {
        warn!("API_KEY or API_SECRET not set; orders will be rejected");
    }

    let exchange = ExchangeRegistry::default()
        .create(&config.exchange_id, exchange_config)
        .context("create exchange client")?;

    match exchange.load_markets().await {
        Ok(markets) => info!(exchange = exchange.id(), count = markets.len(), "markets loaded"),
        Err(err) => error!(exchange = exchange.id(), error = %err, "failed to load markets; continuing"),
    }

    Ok(AppState::new(exchange, config.webhook_secret_key.clone()))
}

/// Serve the webhook router until `shutdown` is cancelled
pub async fn serve(addr: SocketAddr, state: AppState, shutdown: CancellationToken) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local_addr = listener.local_addr().context("read local address")?;
    info!(address = %local_addr, path = WEBHOOK_PATH, "webhook server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("serve webhook")?;

    info!("webhook server stopped");
    Ok(())
}

/// Cancel `shutdown` on the first SIGINT or SIGTERM
pub fn cancel_on_signal(shutdown: CancellationToken) {
    tokio::spawn(async move {
        let received = wait_for_signal().await;
        info!(signal = received, "shutdown signal received");
        shutdown.cancel();
    });
}

async fn wait_for_signal() -> &'static str {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "SIGINT handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

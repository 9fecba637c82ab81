use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::serve;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tunebridge_api::router;
use tunebridge_application::{AppState, ConversionService};
use tunebridge_config::{load as load_config, AppConfig};
use tunebridge_spotify::SpotifyClient;
use tunebridge_yandex::YandexMusicClient;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config(None)?;
    let conversion = Arc::new(build_conversion_service(&config)?);
    let state = AppState::new(config.clone(), conversion);
    state.on_start();

    let listener = TcpListener::bind(bind_addr(&config.http)).await?;
    let addr = listener.local_addr()?;
    info!(target: "cli", "listening on {}", addr);

    serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let fmt_layer = fmt::layer().with_target(true).with_thread_names(true).with_level(true);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_conversion_service(config: &AppConfig) -> Result<ConversionService> {
    let mut spotify = SpotifyClient::builder();
    if let Some(token) = &config.spotify.access_token {
        spotify = spotify.access_token(token);
    }
    if let Some(base_url) = &config.spotify.base_url {
        spotify = spotify.base_url(base_url);
    }
    let spotify = spotify.build()?;

    let mut yandex = YandexMusicClient::builder();
    if let Some(token) = &config.yandex.access_token {
        yandex = yandex.token(token);
    }
    if let Some(base_url) = &config.yandex.base_url {
        yandex = yandex.base_url(base_url);
    }
    let yandex = yandex.build()?;

    Ok(ConversionService::new(
        Arc::new(spotify),
        Arc::new(yandex),
        config.conversion.search_limit,
    ))
}

fn bind_addr(http: &tunebridge_config::HttpConfig) -> SocketAddr {
    let addr = format!("{}:{}", http.host, http.port);
    addr.parse().expect("valid listen address")
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let mut interrupt = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
        .expect("install SIGINT handler");

    #[cfg(unix)]
    let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .expect("install SIGTERM handler");

    #[cfg(not(unix))]
    let interrupt = tokio::signal::ctrl_c();

    #[cfg(unix)]
    tokio::select! {
        _ = interrupt.recv() => {},
        _ = terminate.recv() => {},
    }

    #[cfg(not(unix))]
    {
        interrupt.await.expect("ctrl_c handler");
    }

    info!(target: "cli", "shutdown signal received");
}

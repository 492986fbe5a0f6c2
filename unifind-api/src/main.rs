use std::sync::Arc;

use elastic::ElasticClient;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod domain;
mod queries;
mod router;
mod routes;
mod search_index;

use app_state::AppState;
use search_index::ElasticCourseIndex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::read_config()?;

    let api_key = match (
        settings.elasticsearch.signed_requests,
        &settings.elasticsearch.api_key,
    ) {
        (false, _) => None,
        (true, Some(key)) => Some(key.clone()),
        (true, None) => return Err("signed requests enabled but no api key configured".into()),
    };

    let client = ElasticClient::new(&settings.elasticsearch.url, api_key);
    if let Err(error) = client.ping().await {
        tracing::error!("unable to reach the search engine on startup: {error}");
        return Err(error.into());
    }
    tracing::info!("connected to {}", settings.elasticsearch.url);

    let index = ElasticCourseIndex::new(client, settings.elasticsearch.index.clone());
    let app_state = AppState::new(Arc::new(index), &settings);
    let app = router::create(app_state);

    let address = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}

use crate::collector::server::router;
use crate::collector::store::{open_store, SharedStore};
use crate::interface::settings::Settings;
use tokio::net::TcpListener;

// start the collector server
pub async fn collector_start(
    settings: Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (listener, store) = collector_setup(&settings).await?;

    collector_serve(listener, store).await
}

/// bind the collector host and open the event store.
pub async fn collector_setup(
    settings: &Settings,
) -> Result<(TcpListener, SharedStore), Box<dyn std::error::Error + Send + Sync>> {
    let store = open_store(settings).await?;
    let listener = TcpListener::bind(&settings.collector_host).await?;

    log::info!("collector server listening on {}", listener.local_addr()?);

    Ok((listener, store))
}

/// serve the collector on a bound listener.
pub async fn collector_serve(
    listener: TcpListener,
    store: SharedStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    axum::serve(listener, router(store)).await?;

    Ok(())
}

use crate::collector::health_server::get_health;
use crate::collector::store::SharedStore;
use crate::interface::event::TrackedEvent;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use tower_http::cors::CorsLayer;

/// routes of the event collector.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/tracking/event", post(track_event))
        .route("/_internal_/healthcheck", get(get_health))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// record a page event sent by a beacon.
async fn track_event(
    State(store): State<SharedStore>,
    Json(event): Json<TrackedEvent>,
) -> StatusCode {
    info!("Received event data: {:?}", event);

    match store.save(event).await {
        Ok(record) => {
            info!("event {} stored for {}", record.id, record.url);
            StatusCode::OK
        }
        Err(e) => {
            error!("Error saving event data: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

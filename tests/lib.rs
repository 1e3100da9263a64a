mod common;

use common::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use async_trait::async_trait;
use rocketstats::collector::handlers::collector_serve;
use rocketstats::collector::store::{EventRecord, EventStore, StoreError};
use rocketstats::interface::event::TrackedEvent;
use std::sync::Arc;
use tokio::net::TcpListener;

/// store whose backend is gone.
struct BrokenStore;

#[async_trait]
impl EventStore for BrokenStore {
	async fn save(&self, _event: TrackedEvent) -> Result<EventRecord, StoreError> {
		Err(StoreError::Unavailable("database down".into()))
	}

	async fn events(&self) -> Result<Vec<EventRecord>, StoreError> {
		Err(StoreError::Unavailable("database down".into()))
	}
}

#[tokio::test]
async fn test_healthcheck() {
	let (base, _) = spawn_collector().await;
	let response = reqwest::get(format!("{}/_internal_/healthcheck", base))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body: serde_json::Value = response.json().await.unwrap();

	assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_404() {
	let (base, _) = spawn_collector().await;
	let response = reqwest::get(format!("{}/4", base)).await.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_track_inline_event() {
	let (base, store) = spawn_collector().await;
	let body = json_string!({
		"domain": "example.com",
		"url": "https://example.com/",
		"referrer": "",
		"device": { "user_agent": "Mozilla/5.0" }
	});

	let response = reqwest::Client::new()
		.post(event_endpoint(&base))
		.header(CONTENT_TYPE, "application/json")
		.body(body)
		.send()
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let events = store.events().await.unwrap();

	assert_eq!(events.len(), 1);
	assert_eq!(events[0].id, 1);
	assert_eq!(events[0].domain.as_deref(), Some("example.com"));
	assert_eq!(events[0].referrer, "");
	assert_eq!(events[0].user_agent, "Mozilla/5.0");
}

#[tokio::test]
async fn test_track_load_event() {
	let (base, store) = spawn_collector().await;
	let body = json_string!({
		"url": "https://shop.test/cart",
		"referrer": "https://shop.test/home",
		"device": { "userAgent": "Mozilla/5.0" }
	});

	let response = reqwest::Client::new()
		.post(event_endpoint(&base))
		.header(CONTENT_TYPE, "application/json;charset=UTF-8")
		.body(body)
		.send()
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let events = store.events().await.unwrap();

	assert_eq!(events.len(), 1);
	assert_eq!(events[0].domain, None);
	assert_eq!(events[0].url, "https://shop.test/cart");
	assert_eq!(events[0].user_agent, "Mozilla/5.0");
}

#[tokio::test]
async fn test_track_rejects_non_json() {
	let (base, store) = spawn_collector().await;

	let response = reqwest::Client::new()
		.post(event_endpoint(&base))
		.header(CONTENT_TYPE, "text/plain")
		.body("url=https://shop.test/")
		.send()
		.await
		.unwrap();

	assert!(response.status().is_client_error());
	assert!(store.events().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_preflight() {
	let (base, _) = spawn_collector().await;

	let response = reqwest::Client::new()
		.request(reqwest::Method::OPTIONS, event_endpoint(&base))
		.header("Origin", "https://shop.test")
		.header("Access-Control-Request-Method", "POST")
		.header("Access-Control-Request-Headers", "content-type")
		.send()
		.await
		.unwrap();

	assert!(response.status().is_success());
	assert!(response
		.headers()
		.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_track_store_failure() {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();

	tokio::spawn(collector_serve(listener, Arc::new(BrokenStore)));

	let response = reqwest::Client::new()
		.post(event_endpoint(&format!("http://{}", addr)))
		.header(CONTENT_TYPE, "application/json")
		.body(json_string!({
			"url": "https://shop.test/",
			"referrer": "",
			"device": { "user_agent": "UA" }
		}))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

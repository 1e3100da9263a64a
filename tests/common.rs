#![allow(unused)]
use rocketstats::collector::handlers::collector_serve;
use rocketstats::collector::store::MemoryStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[macro_export]
macro_rules! json_string {
	($value:tt) => {
		serde_json::to_string(&serde_json::json!($value)).expect("cannot json stringify")
	};
}

/// start a collector on a free port returning its base url and store.
pub async fn spawn_collector() -> (String, Arc<MemoryStore>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind collector");
	let addr = listener.local_addr().expect("collector addr");
	let store = Arc::new(MemoryStore::new());

	tokio::spawn(collector_serve(listener, store.clone()));

	(format!("http://{}", addr), store)
}

/// tracking endpoint of a collector.
pub fn event_endpoint(base: &str) -> String {
	format!("{}/api/tracking/event", base)
}

use crate::collector::postgres::PostgresStore;
use crate::interface::event::TrackedEvent;
use crate::interface::settings::Settings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// a tracked event as recorded by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub id: u64,
    pub domain: Option<String>,
    pub url: String,
    pub referrer: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("event store unavailable: {0}")]
    Unavailable(String),
    #[error("database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("database pool config error: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

/// Where the collector records events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// record an event returning the stored entry.
    async fn save(&self, event: TrackedEvent) -> Result<EventRecord, StoreError>;
    /// every event recorded so far in order of arrival.
    async fn events(&self) -> Result<Vec<EventRecord>, StoreError>;
}

pub type SharedStore = Arc<dyn EventStore>;

/// store picked by the settings, postgres when a database url is set.
pub async fn open_store(settings: &Settings) -> Result<SharedStore, StoreError> {
    match &settings.database_url {
        Some(url) => {
            let store = PostgresStore::connect(url).await?;
            log::info!("recording events in postgres");

            Ok(Arc::new(store))
        }
        None => {
            log::info!("recording events in memory");

            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// in process event store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<EventRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn save(&self, event: TrackedEvent) -> Result<EventRecord, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let record = EventRecord {
            id: records.len() as u64 + 1,
            domain: event.domain,
            url: event.url,
            referrer: event.referrer,
            user_agent: event.device.user_agent,
            timestamp: Utc::now(),
        };

        records.push(record.clone());

        Ok(record)
    }

    async fn events(&self) -> Result<Vec<EventRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(records.clone())
    }
}

#[tokio::test]
async fn test_memory_store_sequential_ids() {
    use crate::interface::event::TrackedDevice;

    let store = MemoryStore::new();
    let event = TrackedEvent {
        domain: None,
        url: "https://shop.test/cart".into(),
        referrer: "".into(),
        device: TrackedDevice {
            user_agent: "UA".into(),
        },
    };

    let first = store.save(event.clone()).await.unwrap();
    let second = store.save(event).await.unwrap();
    let events = store.events().await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].user_agent, "UA");
}

#[tokio::test]
async fn test_open_store_without_database() {
    let settings = Settings {
        database_url: None,
        ..Settings::new(false)
    };

    let store = open_store(&settings).await.unwrap();

    assert!(store.events().await.unwrap().is_empty());
}

use crate::beacon::configuration::DEFAULT_ENDPOINT;
use std::env::{set_var, var};

#[derive(Debug, Clone)]
pub struct Settings {
    pub beacon_endpoint: String,
    pub collector_host: String,
    /// postgres url, events are kept in memory when unset.
    pub database_url: Option<String>,
}

impl Settings {
    pub fn new(establish: bool) -> Settings {
        let beacon_endpoint = var("BEACON_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let collector_host = var("COLLECTOR_HOST").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let database_url = var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        if establish {
            set_var("BEACON_ENDPOINT", &beacon_endpoint);
            set_var("COLLECTOR_HOST", &collector_host);
        }

        Self {
            beacon_endpoint,
            collector_host,
            database_url,
        }
    }
}

#[test]
fn test_settings_establish() {
    set_var("COLLECTOR_HOST", "127.0.0.1:9090");

    let settings = Settings::new(true);

    assert_eq!(settings.collector_host, "127.0.0.1:9090");
    assert_eq!(var("BEACON_ENDPOINT").unwrap(), settings.beacon_endpoint);
}

use std::time::Duration;

/// Tracking endpoint the snippets post to.
pub const DEFAULT_ENDPOINT: &str = "https://www.rocketstats.co/api/tracking/event";

/// The page snippet a `Beacon` behaves as.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    /// Waits for the page load event. Sends `device.userAgent` and no domain.
    OnLoad,
    /// Sends as soon as the script runs. Sends `device.user_agent` and the script domain.
    #[default]
    Inline,
}

impl Snippet {
    /// Content-Type header sent with the beacon.
    pub fn content_type(&self) -> &'static str {
        match self {
            Snippet::OnLoad => "application/json;charset=UTF-8",
            Snippet::Inline => "application/json",
        }
    }

    /// Parse a snippet name, `onload` or `inline`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "onload" => Some(Snippet::OnLoad),
            "inline" => Some(Snippet::Inline),
            _ => None,
        }
    }
}

/// Structure to configure `Beacon`
/// ```rust
/// use rocketstats::beacon::configuration::{Configuration, Snippet};
/// let mut configuration = Configuration::new();
/// configuration.snippet = Snippet::OnLoad;
/// configuration.endpoint = "http://127.0.0.1:8080/api/tracking/event".into();
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Snippet variant to send as.
    pub snippet: Snippet,
    /// Url the event is posted to.
    pub endpoint: String,
    /// Request max timeout for the beacon.
    pub request_timeout: Option<Duration>,
}

impl Configuration {
    /// Represents beacon configuration for a page.
    pub fn new() -> Self {
        Self {
            snippet: Snippet::default(),
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout: Some(Duration::from_millis(15000)),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_snippet_names() {
    assert_eq!(Snippet::from_name("onload"), Some(Snippet::OnLoad));
    assert_eq!(Snippet::from_name("Inline"), Some(Snippet::Inline));
    assert_eq!(Snippet::from_name("load"), None);
    assert_eq!(Snippet::from_name("xhr"), None);
    assert_eq!(Configuration::new().snippet, Snippet::Inline);
}

use super::configuration::{Configuration, Snippet};
use super::context::PageContext;
use super::lifecycle::PageLoad;
use super::utils::log;
use crate::hooks::event::post_event;
use crate::interface::event::{Device, EventPayload, InlineEvent, LoadDevice, LoadEvent};
use log::debug;
use reqwest::Client;
use tokio::task::JoinHandle;

/// Represents the tracking snippet of one page load.
/// ```rust,no_run
/// use rocketstats::beacon::context::StaticPageContext;
/// use rocketstats::beacon::lifecycle::PageLoad;
/// use rocketstats::beacon::sender::Beacon;
///
/// # async fn run() {
/// let page = StaticPageContext::new("https://shop.test/cart", "Mozilla/5.0");
/// let load = PageLoad::new();
/// // the beacon is consumed, a page load sends at most once.
/// Beacon::default().install(page, &load);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Beacon {
    /// configuration properties for the beacon.
    pub configuration: Configuration,
    /// http client used to post the event.
    client: Client,
}

impl Beacon {
    /// Initialize a beacon with its http client.
    pub fn new(configuration: Configuration) -> Self {
        let client = configure_http_client(&configuration);

        Self {
            configuration,
            client,
        }
    }

    /// Build the event payload for the configured snippet.
    pub fn build_payload<C: PageContext + ?Sized>(&self, page: &C) -> EventPayload {
        match self.configuration.snippet {
            Snippet::OnLoad => EventPayload::Load(LoadEvent {
                url: page.url().into(),
                referrer: page.referrer().into(),
                device: LoadDevice {
                    user_agent: page.user_agent().into(),
                },
            }),
            Snippet::Inline => EventPayload::Inline(InlineEvent {
                domain: page.script_domain().map(String::from),
                url: page.url().into(),
                referrer: page.referrer().into(),
                device: Device {
                    user_agent: page.user_agent().into(),
                },
            }),
        }
    }

    /// Attach the beacon to a page. The inline snippet reads the page and
    /// dispatches right away, the load snippet waits for `load` to fire.
    /// The returned handle can be dropped, the request is never awaited by the beacon.
    pub fn install<C>(self, page: C, load: &PageLoad) -> JoinHandle<()>
    where
        C: PageContext + Send + 'static,
    {
        match self.configuration.snippet {
            Snippet::Inline => {
                let payload = self.build_payload(&page);

                tokio::spawn(async move { self.send(payload).await })
            }
            Snippet::OnLoad => {
                let listener = load.listener();

                tokio::spawn(async move {
                    if listener.wait().await {
                        let payload = self.build_payload(&page);
                        self.send(payload).await;
                    } else {
                        log("page closed before load", page.url());
                    }
                })
            }
        }
    }

    /// post the payload ignoring the outcome.
    async fn send(&self, payload: EventPayload) {
        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                debug!("beacon payload not serialized - {e}");
                return;
            }
        };

        match post_event(
            &self.client,
            &self.configuration.endpoint,
            self.configuration.snippet.content_type(),
            body,
        )
        .await
        {
            Ok(status) => debug!("beacon sent to {} - {status}", self.configuration.endpoint),
            Err(e) => debug!("beacon to {} failed - {e}", self.configuration.endpoint),
        }
    }
}

impl Default for Beacon {
    fn default() -> Self {
        Self::new(Configuration::new())
    }
}

/// configure http client
fn configure_http_client(configuration: &Configuration) -> Client {
    let mut client = Client::builder();

    if let Some(timeout) = configuration.request_timeout {
        client = client.timeout(timeout);
    }

    client.build().unwrap_or_default()
}

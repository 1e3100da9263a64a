use rocketstats::beacon::configuration::{Configuration, Snippet};
use rocketstats::beacon::context::{PageContext, StaticPageContext};
use rocketstats::beacon::lifecycle::PageLoad;
use rocketstats::beacon::sender::Beacon;
use rocketstats::beacon::utils::fetch_page_html;
use rocketstats::interface::settings::Settings;
use std::env::var;

/// load a page and fire its beacon once.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::new(false);

    let url = var("PAGE_URL").unwrap_or_else(|_| "https://www.rocketstats.co/".into());
    let referrer = var("PAGE_REFERRER").unwrap_or_default();
    let user_agent = var("PAGE_USER_AGENT")
        .unwrap_or_else(|_| concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into());
    let snippet = var("BEACON_SNIPPET")
        .ok()
        .and_then(|name| Snippet::from_name(&name))
        .unwrap_or_default();

    let client = reqwest::Client::builder()
        .user_agent(user_agent.as_str())
        .build()?;
    let html = fetch_page_html(&url, &client).await.unwrap_or_default();
    let page = StaticPageContext::from_document(&url, &referrer, &user_agent, &html);

    println!(
        "page {} domain={:?} snippet={:?}",
        page.url(),
        page.script_domain(),
        snippet
    );

    let mut configuration = Configuration::new();
    configuration.snippet = snippet;
    configuration.endpoint = settings.beacon_endpoint;

    let load = PageLoad::new();
    let beacon = Beacon::new(configuration).install(page, &load);

    load.fire();

    // the process exits with the runtime, wait for the request to leave.
    beacon.await?;

    Ok(())
}

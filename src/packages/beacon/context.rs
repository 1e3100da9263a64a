use scraper::{Html, Selector};

lazy_static! {
    /// the script tag carrying the site domain.
    static ref SCRIPT_DOMAIN: Selector =
        Selector::parse("script[data-domain]").expect("valid script selector");
}

/// Ambient page state a beacon reads when it fires.
pub trait PageContext {
    /// Current page address.
    fn url(&self) -> &str;
    /// Referring page address, empty when there is none.
    fn referrer(&self) -> &str;
    /// The browser user-agent string.
    fn user_agent(&self) -> &str;
    /// `data-domain` of the hosting script tag if present.
    fn script_domain(&self) -> Option<&str>;
}

/// Page context with fixed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPageContext {
    /// page address.
    pub url: String,
    /// referring page address.
    pub referrer: String,
    /// browser user agent.
    pub user_agent: String,
    /// `data-domain` of the tracking script.
    pub domain: Option<String>,
}

impl StaticPageContext {
    /// page context without a referrer or script domain.
    pub fn new(url: &str, user_agent: &str) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// page context for a loaded document, reading the domain from its script tags.
    pub fn from_document(url: &str, referrer: &str, user_agent: &str, html: &str) -> Self {
        Self {
            url: url.into(),
            referrer: referrer.into(),
            user_agent: user_agent.into(),
            domain: script_domain(html),
        }
    }
}

impl PageContext for StaticPageContext {
    fn url(&self) -> &str {
        &self.url
    }

    fn referrer(&self) -> &str {
        &self.referrer
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn script_domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

/// `data-domain` of the first `script[data-domain]` in the document.
pub fn script_domain(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    document
        .select(&SCRIPT_DOMAIN)
        .next()
        .and_then(|element| element.value().attr("data-domain"))
        .map(String::from)
}

#[test]
fn test_script_domain() {
    let html = r#"<html><head>
        <script src="/app.js"></script>
        <script defer data-domain="example.com" src="https://www.rocketstats.co/script.js"></script>
        <script data-domain="second.com"></script>
        </head><body></body></html>"#;

    assert_eq!(script_domain(html), Some("example.com".into()));
    assert_eq!(script_domain("<html><script src=\"/app.js\"></script></html>"), None);
    assert_eq!(script_domain("<script data-domain></script>"), Some("".into()));
}

#[test]
fn test_from_document() {
    let page = StaticPageContext::from_document(
        "https://shop.test/cart",
        "",
        "Mozilla/5.0",
        "<html><body><p>cart</p></body></html>",
    );

    assert_eq!(page.url(), "https://shop.test/cart");
    assert_eq!(page.referrer(), "");
    assert_eq!(page.script_domain(), None);
}

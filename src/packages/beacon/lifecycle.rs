use tokio::sync::watch;

/// Load signal for a single page.
#[derive(Debug)]
pub struct PageLoad {
    loaded: watch::Sender<bool>,
}

/// Waits on the load signal of a page.
#[derive(Debug, Clone)]
pub struct LoadListener {
    loaded: watch::Receiver<bool>,
}

impl PageLoad {
    /// A page that has not finished loading.
    pub fn new() -> Self {
        let (loaded, _) = watch::channel(false);

        Self { loaded }
    }

    /// Mark all page resources as loaded.
    pub fn fire(&self) {
        self.loaded.send_replace(true);
    }

    /// the page finished loading.
    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    /// listen for the load event.
    pub fn listener(&self) -> LoadListener {
        LoadListener {
            loaded: self.loaded.subscribe(),
        }
    }
}

impl Default for PageLoad {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadListener {
    /// Resolves `true` once the page loads or `false` if the page goes away first.
    pub async fn wait(mut self) -> bool {
        self.loaded.wait_for(|loaded| *loaded).await.is_ok()
    }
}

#[tokio::test]
async fn test_listener_before_and_after_load() {
    let page = PageLoad::new();
    let early = page.listener();

    assert!(!page.is_loaded());

    page.fire();

    assert!(page.is_loaded());
    assert!(early.wait().await);
    assert!(page.listener().wait().await);
}

#[tokio::test]
async fn test_page_dropped_before_load() {
    let page = PageLoad::new();
    let listener = page.listener();

    drop(page);

    assert!(!listener.wait().await);
}

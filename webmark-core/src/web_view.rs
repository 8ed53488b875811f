use crate::{
    WebViewConfig,
    browser::{EmbeddedBrowser, ZoomLock},
    embed,
};

/// The outcome of the most recent load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded,
    Failed(String),
}

/// What the web view is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// The URL as it was stored for the song.
    pub requested: String,
    /// The URL that was handed to the browser.
    pub resolved: String,
    /// The zoom applied after loading; `None` if the load failed.
    pub zoom: Option<ZoomLock>,
    pub status: LoadStatus,
}
impl LoadedPage {
    pub fn was_rewritten(&self) -> bool {
        self.requested != self.resolved
    }
}

/// Hosts an [`EmbeddedBrowser`]: rewrites song URLs for embedded playback, loads
/// them, and locks the zoom once a page is up.
pub struct WebView<B = Box<dyn EmbeddedBrowser>> {
    browser: B,
    config: WebViewConfig,
    page: Option<LoadedPage>,
}
impl<B: EmbeddedBrowser> WebView<B> {
    pub fn new(browser: B, config: WebViewConfig) -> Self {
        Self {
            browser,
            config,
            page: None,
        }
    }

    pub fn load(&mut self, url: &str) -> &LoadedPage {
        let resolved = embed::resolve(url, self.config.embed_style);

        let (status, zoom) = match self.browser.load(&resolved) {
            Ok(()) => {
                let zoom = ZoomLock::fixed(self.config.scale);
                self.browser.lock_zoom(zoom);
                (LoadStatus::Loaded, Some(zoom))
            }
            Err(e) => {
                tracing::error!("failed to load {resolved}: {e}");
                (LoadStatus::Failed(e.to_string()), None)
            }
        };

        self.page.insert(LoadedPage {
            requested: url.to_string(),
            resolved,
            zoom,
            status,
        })
    }

    /// Loads the current page's stored URL again.
    pub fn reload(&mut self) -> Option<&LoadedPage> {
        let requested = self.page.as_ref()?.requested.clone();
        Some(self.load(&requested))
    }

    pub fn clear(&mut self) {
        self.page = None;
    }

    pub fn page(&self) -> Option<&LoadedPage> {
        self.page.as_ref()
    }

    pub fn config(&self) -> &WebViewConfig {
        &self.config
    }
}

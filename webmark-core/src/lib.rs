pub mod embed;
pub use embed::EmbedStyle;

mod browser;
pub use browser::{BrowserError, EmbeddedBrowser, SystemBrowser, ZoomLock};

mod catalog;
pub use catalog::{BUNDLED_SONGS_CSV, Catalog, SongSource};

mod config;
pub use config::WebViewConfig;

mod navigator;
pub use navigator::{Navigator, Route};

mod web_view;
pub use web_view::{LoadStatus, LoadedPage, WebView};

pub use webmark_state;

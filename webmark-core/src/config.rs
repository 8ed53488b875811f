use serde::{Deserialize, Serialize};

use crate::embed::EmbedStyle;

/// Settings for the web view that hosts a song's page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebViewConfig {
    /// The zoom scale the browser is locked to.
    pub scale: f32,
    /// How YouTube links are rewritten before loading.
    pub embed_style: EmbedStyle,
    /// Program and arguments used to open URLs; the URL is appended last.
    /// Unset uses the platform's default opener.
    pub browser_command: Option<Vec<String>>,
}
impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            embed_style: EmbedStyle::default(),
            browser_command: None,
        }
    }
}

use crate::Catalog;

/// A screen in the app, identified by positions in the [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The artist list.
    Artists,
    /// An artist's song list.
    Songs { artist: usize },
    /// The web view for one song.
    WebView { artist: usize, song: usize },
}

/// The stack of screens the user has drilled into. The artist list is always at
/// the bottom.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}
impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Artists],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Artists)
    }

    /// Opens an artist's song list. Only valid from the artist list.
    pub fn open_artist(&mut self, catalog: &Catalog, artist: usize) -> Option<Route> {
        if self.current() != Route::Artists || catalog.artist(artist).is_none() {
            return None;
        }
        self.push(Route::Songs { artist })
    }

    /// Opens the web view for a song. Only valid from a song list.
    pub fn open_song(&mut self, catalog: &Catalog, song: usize) -> Option<Route> {
        let Route::Songs { artist } = self.current() else {
            return None;
        };
        catalog.song(artist, song)?;
        self.push(Route::WebView { artist, song })
    }

    /// Returns to the previous screen, and returns the screen now shown.
    /// Does nothing at the artist list.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    /// Titles for each screen on the stack, from the bottom up.
    pub fn breadcrumbs(&self, catalog: &Catalog) -> Vec<String> {
        self.stack
            .iter()
            .map(|route| match *route {
                Route::Artists => "Artists".to_string(),
                Route::Songs { artist } => catalog
                    .artist(artist)
                    .map(|a| a.name.to_string())
                    .unwrap_or_default(),
                Route::WebView { artist, song } => catalog
                    .song(artist, song)
                    .map(|s| s.title.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    fn push(&mut self, route: Route) -> Option<Route> {
        tracing::debug!("navigating to {route:?}");
        self.stack.push(route);
        Some(route)
    }
}

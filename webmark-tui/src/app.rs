use webmark_core::{Catalog, EmbeddedBrowser, Navigator, Route, WebView};

use crate::{
    artwork::ArtworkCache,
    config::Config,
    keys::Action,
    log_buffer::LogBuffer,
    ui::{list::ListSelection, logs::LogsState},
};

/// Which panel/mode the UI is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Browse,
    Logs,
}

pub struct App<B = Box<dyn EmbeddedBrowser>> {
    // Core infrastructure (shared across views)
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub web_view: WebView<B>,
    pub config: Config,
    pub artwork: ArtworkCache,

    // Global UI orchestration
    pub focused_panel: FocusedPanel,
    pub quit_confirming: bool,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub mouse_position: Option<(u16, u16)>,
    /// Help bar click targets from the last draw: `(x_start, x_end, action)`.
    pub help_bar_items: Vec<(u16, u16, Action)>,

    // Per-view state
    pub artists: ListSelection,
    pub songs: ListSelection,
    pub logs: LogsState,
}

impl<B: EmbeddedBrowser> App<B> {
    pub fn new(config: Config, catalog: Catalog, browser: B, log_buffer: LogBuffer) -> Self {
        let web_view = WebView::new(browser, config.web_view.clone());
        let artwork = ArtworkCache::new(config.data.assets_dir.clone());
        Self {
            catalog,
            navigator: Navigator::new(),
            web_view,
            config,
            artwork,

            focused_panel: FocusedPanel::Browse,
            quit_confirming: false,
            should_quit: false,
            needs_redraw: true,
            mouse_position: None,
            help_bar_items: Vec::new(),

            artists: ListSelection::default(),
            songs: ListSelection::default(),
            logs: LogsState::new(log_buffer),
        }
    }

    /// Redraws the log panel every tick so new entries show up.
    pub fn tick(&mut self) {
        if self.focused_panel == FocusedPanel::Logs {
            self.needs_redraw = true;
        }
    }

    /// Number of rows in the list currently on screen.
    pub fn list_len(&self) -> usize {
        match self.navigator.current() {
            Route::Artists => self.catalog.artists().len(),
            Route::Songs { artist } => self.catalog.songs(artist).len(),
            Route::WebView { .. } => 0,
        }
    }

    /// The selection of the list currently on screen, if a list is on screen.
    pub fn list_selection(&mut self) -> Option<&mut ListSelection> {
        match self.navigator.current() {
            Route::Artists => Some(&mut self.artists),
            Route::Songs { .. } => Some(&mut self.songs),
            Route::WebView { .. } => None,
        }
    }

    /// Opens the selected row: an artist's songs, or a song's web view.
    pub fn activate(&mut self) {
        match self.navigator.current() {
            Route::Artists => {
                if self
                    .navigator
                    .open_artist(&self.catalog, self.artists.selected)
                    .is_some()
                {
                    self.songs.reset();
                }
            }
            Route::Songs { artist } => {
                let Some(song) = self.catalog.song(artist, self.songs.selected) else {
                    return;
                };
                let url = song.url.clone();
                if self
                    .navigator
                    .open_song(&self.catalog, self.songs.selected)
                    .is_some()
                {
                    self.web_view.load(&url);
                }
            }
            Route::WebView { .. } => self.reload(),
        }
    }

    /// Returns to the previous screen. Leaving the web view unloads its page.
    pub fn back(&mut self) {
        let leaving = self.navigator.current();
        if self.navigator.back().is_some() && matches!(leaving, Route::WebView { .. }) {
            self.web_view.clear();
        }
    }

    pub fn reload(&mut self) {
        if let Route::WebView { .. } = self.navigator.current() {
            self.web_view.reload();
        }
    }

    pub fn toggle_logs(&mut self) {
        if self.focused_panel == FocusedPanel::Logs {
            self.focused_panel = FocusedPanel::Browse;
        } else {
            self.focused_panel = FocusedPanel::Logs;
            self.logs.scroll_to_end();
        }
    }

    /// Applies a browse-context action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit_confirming = true,
            Action::Logs => self.toggle_logs(),
            Action::Select => self.activate(),
            Action::Back => self.back(),
            Action::Reload => self.reload(),
            _ => {
                let len = self.list_len();
                if let Some(selection) = self.list_selection() {
                    selection.apply(action, len);
                }
            }
        }
    }
}

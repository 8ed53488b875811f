mod app;
mod artwork;
mod config;
mod keys;
mod log_buffer;
mod style;
mod ui;

use std::time::{Duration, Instant};

use app::{App, FocusedPanel};
use config::Config;
use keys::Action;
use log_buffer::{LogBuffer, LogBufferLayer};
use webmark_core::{Catalog, EmbeddedBrowser, Route, SystemBrowser};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // Create log buffer for TUI display instead of stdout.
    let log_buffer = LogBuffer::new();

    let log_file = std::fs::File::create("webmark.log")?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(LogBufferLayer::new(log_buffer.clone()))
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("webmark=info")),
        )
        .init();

    let config = Config::load()?;
    let catalog = Catalog::load(&config.data.song_source());
    let browser: Box<dyn EmbeddedBrowser> =
        Box::new(SystemBrowser::new(config.web_view.browser_command.clone()));

    let mut app = App::new(config, catalog, browser, log_buffer);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.general.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.needs_redraw = false;
        }
        let term_size = terminal.size()?;
        let size = Rect::new(0, 0, term_size.width, term_size.height);

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let mut scroll_delta: i32 = 0;

            // Process the first event, then drain all remaining queued events.
            let mut process_event = |evt: Event, app: &mut App| match evt {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    handle_key_event(app, &key);
                    app.needs_redraw = true;
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        scroll_delta -= 1;
                        app.needs_redraw = true;
                    }
                    MouseEventKind::ScrollDown => {
                        scroll_delta += 1;
                        app.needs_redraw = true;
                    }
                    _ => {
                        handle_mouse_event(app, &mouse, size);
                        app.needs_redraw = true;
                    }
                },
                Event::Resize(_, _) => {
                    app.needs_redraw = true;
                }
                _ => {}
            };

            process_event(event::read()?, app);
            while event::poll(Duration::ZERO)? {
                process_event(event::read()?, app);
            }

            // Apply coalesced scroll as a single operation.
            if scroll_delta != 0 {
                apply_scroll(app, scroll_delta);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: &event::KeyEvent) {
    // Handle quit confirmation dialog
    if app.quit_confirming {
        match keys::quit_confirm_action(key) {
            Action::Select => app.should_quit = true,
            _ => app.quit_confirming = false,
        }
        return;
    }

    match app.focused_panel {
        FocusedPanel::Browse => {
            let action = match app.navigator.current() {
                Route::WebView { .. } => keys::web_view_action(key),
                Route::Artists | Route::Songs { .. } => keys::browse_action(key),
            };
            if let Some(action) = action {
                app.apply(action);
            }
        }
        FocusedPanel::Logs => {
            if let Some(action) = keys::logs_action(key)
                && let Some(la) = ui::logs::handle_key(&mut app.logs, action)
            {
                match la {
                    ui::logs::LogsAction::Close => app.toggle_logs(),
                }
            }
        }
    }
}

fn handle_mouse_event(app: &mut App, mouse: &MouseEvent, size: Rect) {
    // Compute layout areas matching ui::draw
    let main = ui::layout::split_main(size);
    let list_area = ui::layout::panel_inner(main.content);

    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Moved => {
            app.mouse_position = Some((x, y));
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.mouse_position = Some((x, y));

            // --- Quit popup: any click cancels ---
            if app.quit_confirming {
                app.quit_confirming = false;
                return;
            }

            // --- List area ---
            if ui::layout::contains(list_area, x, y) {
                handle_list_click(app, list_area, y);
                return;
            }

            // --- Help bar area ---
            if ui::layout::contains(main.help_bar, x, y) {
                handle_help_bar_click(app, x);
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if app.focused_panel == FocusedPanel::Browse {
                app.back();
            }
        }
        _ => {}
    }
}

/// Clicking a row selects it; clicking the selected row opens it.
fn handle_list_click(app: &mut App, list_area: Rect, y: u16) {
    if app.focused_panel == FocusedPanel::Logs {
        let len = app.logs.log_buffer.len();
        if let Some(row) = app.logs.selection.row_at(list_area, y, len) {
            app.logs.selection.selected = row;
        }
        return;
    }

    let len = app.list_len();
    let Some(selection) = app.list_selection() else {
        return;
    };
    let Some(row) = selection.row_at(list_area, y, len) else {
        return;
    };

    if selection.selected == row {
        app.activate();
    } else {
        selection.selected = row;
    }
}

fn handle_help_bar_click(app: &mut App, x: u16) {
    let Some(&(_, _, action)) = app
        .help_bar_items
        .iter()
        .find(|(x_start, x_end, _)| x >= *x_start && x < *x_end)
    else {
        return;
    };

    match app.focused_panel {
        FocusedPanel::Browse => app.apply(action),
        FocusedPanel::Logs => {
            if action == Action::Back {
                app.toggle_logs();
            }
        }
    }
}

/// Applies a coalesced scroll delta to the currently focused panel.
fn apply_scroll(app: &mut App, scroll_delta: i32) {
    let steps = scroll_delta * ui::layout::SCROLL_WHEEL_STEPS as i32;

    match app.focused_panel {
        FocusedPanel::Browse => {
            let len = app.list_len();
            if let Some(selection) = app.list_selection() {
                selection.scroll(steps, len);
            }
        }
        FocusedPanel::Logs => {
            let len = app.logs.log_buffer.len();
            app.logs.selection.scroll(steps, len);
        }
    }
}

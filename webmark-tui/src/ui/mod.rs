pub(crate) mod artists;
pub(crate) mod layout;
pub(crate) mod list;
pub(crate) mod logs;
pub(crate) mod songs;
pub(crate) mod web_view;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use smol_str::ToSmolStr as _;
use unicode_width::UnicodeWidthStr as _;
use webmark_core::Route;

use crate::{
    app::{App, FocusedPanel},
    keys,
};

pub const BANNER_TITLE: &str = "WEB BookMark";
pub const BANNER_WELCOME: &str = "Welcome to the Web BookMark App!";

/// Separator between breadcrumbs in panel titles.
const BREADCRUMB_SEPARATOR: &str = " \u{203A} ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Fill entire terminal with background color.
    let bg = Block::default().style(Style::default().bg(app.config.style.background_color()));
    frame.render_widget(bg, size);

    let main = layout::split_main(size);

    draw_banner(frame, app, main.banner);

    match app.focused_panel {
        FocusedPanel::Browse => {
            let title = panel_title(app);
            match app.navigator.current() {
                Route::Artists => artists::draw(frame, app, &title, main.content),
                Route::Songs { artist } => songs::draw(frame, app, artist, &title, main.content),
                Route::WebView { artist, song } => {
                    web_view::draw(frame, app, artist, song, &title, main.content)
                }
            }
        }
        FocusedPanel::Logs => logs::draw(frame, &mut app.logs, &app.config.style, main.content),
    }

    draw_help_bar(frame, app, main.help_bar);

    // Draw quit confirmation dialog on top of everything.
    if app.quit_confirming {
        let yes = keys::KEY_CONFIRM_YES.to_smolstr();
        let no = keys::KEY_CONFIRM_NO.to_smolstr();
        let prompt = format!("Quit? {yes}/{no}");
        let popup_width = prompt.width() as u16 + layout::POPUP_CHROME_WIDTH;
        let popup_area = layout::centered_rect(size, popup_width, layout::POPUP_HEIGHT);

        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(format!(" {prompt}"))
            .block(Block::bordered().style(Style::default().fg(app.config.style.text_color())))
            .style(
                Style::default()
                    .fg(app.config.style.text_color())
                    .bg(app.config.style.background_color()),
            );
        frame.render_widget(popup, popup_area);
    }
}

fn draw_banner(frame: &mut Frame, app: &App, area: Rect) {
    let style = &app.config.style;
    let lines = vec![
        Line::from(Span::styled(
            BANNER_TITLE,
            Style::default()
                .fg(style.banner_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            BANNER_WELCOME,
            Style::default().fg(style.muted_color()),
        )),
    ];
    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style.border_color())),
    );
    frame.render_widget(banner, area);
}

/// The breadcrumb trail for the screen on display, e.g. ` Artists › ITZY `.
fn panel_title(app: &App) -> String {
    let crumbs = app.navigator.breadcrumbs(&app.catalog);
    format!(" {} ", crumbs.join(BREADCRUMB_SEPARATOR))
}

fn draw_help_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let style = &app.config.style;

    let help_actions: &[keys::Action] = match (app.focused_panel, app.navigator.current()) {
        (FocusedPanel::Logs, _) => keys::LOGS_HELP,
        (FocusedPanel::Browse, Route::Artists) => keys::ARTISTS_HELP,
        (FocusedPanel::Browse, Route::Songs { .. }) => keys::SONGS_HELP,
        (FocusedPanel::Browse, Route::WebView { .. }) => keys::WEB_VIEW_HELP,
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    app.help_bar_items.clear();

    for action in help_actions {
        if let Some((key, label)) = action.help_label() {
            let text = format!(":{label} ");
            let x_start = x;
            x += (key.width() + text.width()) as u16;
            app.help_bar_items.push((x_start, x, *action));

            spans.push(Span::styled(
                String::from(key),
                Style::default().fg(style.accent_color()),
            ));
            spans.push(Span::styled(text, Style::default().fg(style.muted_color())));
        }
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(style.background_color()));
    frame.render_widget(help, area);
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{app::App, artwork::ArtColors};

use super::layout;

/// Builds the half-block avatar for one terminal row: the photo's top row of
/// colours as foreground over its bottom row as background.
fn avatar_spans(colors: &ArtColors) -> Vec<Span<'static>> {
    (0..layout::AVATAR_COLS)
        .map(|col| {
            Span::styled(
                "\u{2580}",
                Style::default()
                    .fg(colors.colors[0][col])
                    .bg(colors.colors[1][col]),
            )
        })
        .collect()
}

pub fn draw(frame: &mut Frame, app: &mut App, title: &str, area: Rect) {
    let style = &app.config.style;

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let artists = app.catalog.artists();
    if artists.is_empty() {
        let empty = Paragraph::new("No artists").style(Style::default().fg(style.muted_color()));
        frame.render_widget(empty, inner);
        return;
    }

    let hovered = app
        .mouse_position
        .filter(|(x, y)| layout::contains(inner, *x, *y))
        .and_then(|(_, y)| app.artists.row_at(inner, y, artists.len()));

    let items: Vec<ListItem> = artists
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            let song_count = app.catalog.index().songs(&artist.name).len();
            let songs_label = match song_count {
                1 => "1 song".to_string(),
                n => format!("{n} songs"),
            };

            let mut name_style = Style::default().fg(style.text_color());
            if hovered == Some(i) {
                name_style = name_style
                    .fg(style.hovered_color())
                    .add_modifier(Modifier::UNDERLINED);
            }

            let mut spans = avatar_spans(&app.artwork.get(artist));
            spans.extend([
                Span::raw(" "),
                Span::styled(artist.name.to_string(), name_style),
                Span::raw("  "),
                Span::styled(songs_label, Style::default().fg(style.muted_color())),
            ]);
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(style.selected_color())
            .add_modifier(Modifier::BOLD),
    );

    app.artists.selected = app.artists.selected.min(artists.len() - 1);
    let mut state = app.artists.list_state();
    frame.render_stateful_widget(list, inner, &mut state);
    app.artists.store(&state);
}

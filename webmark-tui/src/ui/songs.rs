use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};
use webmark_core::embed;

use crate::app::App;

use super::layout;

const YOUTUBE_TAG: &str = "[YouTube]";
const WEB_TAG: &str = "[web]";

fn link_tag(url: &str) -> &'static str {
    if embed::is_youtube(url) {
        YOUTUBE_TAG
    } else {
        WEB_TAG
    }
}

/// Cuts `text` down to at most `max_width` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

pub fn draw(frame: &mut Frame, app: &mut App, artist: usize, title: &str, area: Rect) {
    let style = &app.config.style;

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let songs = app.catalog.songs(artist);
    if songs.is_empty() {
        let empty = Paragraph::new("No songs").style(Style::default().fg(style.muted_color()));
        frame.render_widget(empty, inner);
        return;
    }

    let hovered = app
        .mouse_position
        .filter(|(x, y)| layout::contains(inner, *x, *y))
        .and_then(|(_, y)| app.songs.row_at(inner, y, songs.len()));

    let row_width = inner.width as usize;
    let items: Vec<ListItem> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let tag = link_tag(&song.url);
            let title_room = row_width.saturating_sub(tag.width() + layout::SONG_TAG_GAP);
            let title = truncate_to_width(&song.title, title_room);
            let padding = row_width.saturating_sub(title.width() + tag.width());

            let mut title_style = Style::default().fg(style.song_title_color());
            if hovered == Some(i) {
                title_style = title_style
                    .fg(style.hovered_color())
                    .add_modifier(Modifier::UNDERLINED);
            }

            ListItem::new(Line::from(vec![
                Span::styled(title, title_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(tag, Style::default().fg(style.url_color())),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(style.selected_color())
            .add_modifier(Modifier::BOLD),
    );

    app.songs.selected = app.songs.selected.min(songs.len() - 1);
    let mut state = app.songs.list_state();
    frame.render_stateful_widget(list, inner, &mut state);
    app.songs.store(&state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_tag() {
        assert_eq!(link_tag("https://youtu.be/4TWR90KJl84"), YOUTUBE_TAG);
        assert_eq!(link_tag("https://example.com/song"), WEB_TAG);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("WANNABE", 10), "WANNABE");
        assert_eq!(truncate_to_width("WANNABE", 5), "WANN\u{2026}");
        assert_eq!(truncate_to_width("WANNABE", 0), "");
        // Wide characters take two columns each.
        assert_eq!(truncate_to_width("소리꾼소리꾼", 6), "소리\u{2026}");
    }
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use webmark_core::{EmbedStyle, LoadStatus, embed};

use crate::app::App;

const LABEL_WIDTH: usize = 8;

fn field<'a>(label: &'a str, value: Span<'a>, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        value,
    ])
}

pub fn draw(frame: &mut Frame, app: &mut App, artist: usize, song: usize, title: &str, area: Rect) {
    let style = &app.config.style;

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (Some(artist), Some(song)) = (app.catalog.artist(artist), app.catalog.song(artist, song))
    else {
        return;
    };

    let label_style = Style::default().fg(style.muted_color());
    let text_style = Style::default().fg(style.text_color());
    let url_style = Style::default().fg(style.url_color());
    let error_style = Style::default().fg(style.error_color());

    let mut lines = vec![
        Line::from(Span::styled(
            song.title.clone(),
            Style::default()
                .fg(style.song_title_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(artist.name.to_string(), label_style)),
        Line::default(),
        field("Stored", Span::styled(song.url.clone(), url_style), label_style),
    ];

    let embed_style = app.web_view.config().embed_style;
    match app.web_view.page() {
        Some(page) => {
            lines.push(field(
                "Loaded",
                Span::styled(page.resolved.clone(), url_style),
                label_style,
            ));
            match &page.status {
                LoadStatus::Loaded => {
                    let zoom = page.zoom.map(|z| z.to_string()).unwrap_or_default();
                    lines.push(field("Zoom", Span::styled(zoom, text_style), label_style));
                    lines.push(field(
                        "Status",
                        Span::styled("opened in browser", text_style),
                        label_style,
                    ));
                }
                LoadStatus::Failed(reason) => {
                    lines.push(field(
                        "Status",
                        Span::styled(format!("failed: {reason}"), error_style),
                        label_style,
                    ));
                }
            }
            lines.push(field(
                "Embed",
                Span::styled(embed_style.to_string(), text_style),
                label_style,
            ));

            if page.was_rewritten() && !embed::query_is_well_formed(&page.resolved) {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!(
                        "This link has its parameters in the path; set web_view.embed_style = \"{}\" to fix it.",
                        EmbedStyle::Corrected
                    ),
                    error_style,
                )));
            }
        }
        None => lines.push(field(
            "Status",
            Span::styled("not loaded", label_style),
            label_style,
        )),
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

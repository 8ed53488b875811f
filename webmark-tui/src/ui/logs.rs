use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style as RStyle},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{keys::Action, log_buffer::LogBuffer, style::Style};

use super::{layout, list::ListSelection};

pub struct LogsState {
    pub log_buffer: LogBuffer,
    pub selection: ListSelection,
}

impl LogsState {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            log_buffer,
            selection: ListSelection::default(),
        }
    }

    pub fn scroll_to_end(&mut self) {
        self.selection.selected = self.log_buffer.len().saturating_sub(1);
    }
}

pub enum LogsAction {
    Close,
}

pub fn draw(frame: &mut Frame, logs: &mut LogsState, style: &Style, area: Rect) {
    let entries = logs.log_buffer.get_entries();

    let block = Block::default()
        .title(format!(" Logs ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(RStyle::default().fg(style.border_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        let empty = Paragraph::new("No log entries").style(RStyle::default().fg(style.muted_color()));
        frame.render_widget(empty, inner);
        return;
    }

    let text_color = style.text_color();
    let muted_color = style.muted_color();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            // Keep semantic colors for log levels.
            let (level_str, level_color) = match entry.level {
                tracing::Level::ERROR => ("ERR", Color::Red),
                tracing::Level::WARN => ("WRN", Color::Yellow),
                tracing::Level::INFO => ("INF", Color::Cyan),
                tracing::Level::DEBUG => ("DBG", Color::Green),
                tracing::Level::TRACE => ("TRC", muted_color),
            };

            let line = Line::from(vec![
                Span::styled(
                    level_str,
                    RStyle::default()
                        .fg(level_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{:width$}",
                        truncate_target(&entry.target),
                        width = layout::LOG_TARGET_WIDTH
                    ),
                    RStyle::default().fg(muted_color),
                ),
                Span::raw(" "),
                Span::styled(entry.message.clone(), RStyle::default().fg(text_color)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(
        RStyle::default()
            .bg(style.selected_color())
            .add_modifier(Modifier::BOLD),
    );

    logs.selection.selected = logs.selection.selected.min(entries.len() - 1);
    let mut state = logs.selection.list_state();
    frame.render_stateful_widget(list, inner, &mut state);
    logs.selection.store(&state);
}

/// Shortens long targets to their last few characters.
fn truncate_target(target: &str) -> String {
    if target.chars().count() <= layout::LOG_TARGET_WIDTH {
        return target.to_string();
    }
    let tail: String = target
        .chars()
        .rev()
        .take(layout::LOG_TARGET_SUFFIX_LEN)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{tail}")
}

pub fn handle_key(logs: &mut LogsState, action: Action) -> Option<LogsAction> {
    if action == Action::Back {
        return Some(LogsAction::Close);
    }
    logs.selection.apply(action, logs.log_buffer.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_target() {
        assert_eq!(truncate_target("webmark_core"), "webmark_core");
        let long = "webmark_core::web_view::some_module";
        let truncated = truncate_target(long);
        assert_eq!(truncated.chars().count(), layout::LOG_TARGET_WIDTH);
        assert!(truncated.starts_with("..."));
        assert!(long.ends_with(&truncated[3..]));
    }

    #[test]
    fn test_back_closes() {
        let mut logs = LogsState::new(LogBuffer::new());
        assert!(matches!(
            handle_key(&mut logs, Action::Back),
            Some(LogsAction::Close)
        ));
        assert!(handle_key(&mut logs, Action::MoveDown).is_none());
        assert_eq!(logs.selection.selected, 0);
    }
}

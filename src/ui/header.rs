use crate::ui::theme::{ACCENT_LIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    revision: &'static str,
    greetings: usize,
}

impl Header {
    pub fn new(revision: &'static str, greetings: usize) -> Self {
        Self {
            revision,
            greetings,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Greeter", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.revision, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} greetings", self.greetings), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

//! Onboarding screen widgets.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use crate::ui::view::{button_text, OnboardingView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Message row and button rect for the onboarding screen.
///
/// Shared by rendering and mouse hit-testing.
pub fn onboarding_areas(view: &OnboardingView, area: Rect) -> (Rect, Rect) {
    let button_width = button_text(&view.control).chars().count() as u16;
    let message_width = view.message.chars().count() as u16;
    let content = centered_rect_by_size(area, message_width.max(button_width), 3);

    let message = Rect {
        height: content.height.min(1),
        ..content
    };
    let below = Rect {
        y: content.y.saturating_add(2),
        height: content.height.saturating_sub(2),
        ..content
    };
    let button = centered_rect_by_size(below, button_width, 1);
    (message, button)
}

pub fn render_onboarding(frame: &mut Frame<'_>, view: &OnboardingView, area: Rect) {
    let (message, button) = onboarding_areas(view, area);

    let message_widget = Paragraph::new(Line::styled(
        view.message,
        Style::default().fg(HEADER_TEXT),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message_widget, message);

    let button_style = Style::default()
        .fg(Color::White)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    let button_widget = Paragraph::new(Span::styled(button_text(&view.control), button_style));
    frame.render_widget(button_widget, button);
}

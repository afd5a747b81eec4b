//! Greeting list widgets.

use crate::ui::theme::{ACCENT_LIGHT, DETAIL_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::view::{ItemView, ListView, DETAIL_BODY};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Rows inside an item's border taken by the label and the subject.
const TEXT_ROWS: u16 = 2;

/// Items laid out top to bottom from `first_visible`, clipped to `area`.
///
/// Shared by rendering and mouse hit-testing.
pub fn item_areas<'v, 'a>(view: &'v ListView<'a>, area: Rect) -> Vec<(&'v ItemView<'a>, Rect)> {
    let mut areas = Vec::new();
    let mut y = area.y;
    let bottom = area.bottom();
    for item in view.items.iter().filter(|item| item.index >= view.first_visible) {
        if y >= bottom {
            break;
        }
        let height = item.height.min(bottom - y);
        areas.push((
            item,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            },
        ));
        y += height;
    }
    areas
}

/// Inside of an item's border.
fn inner_area(rect: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(rect)
}

/// Where the toggle control of an item is drawn, right-aligned on the
/// label and subject rows.
pub fn toggle_area(item: &ItemView<'_>, rect: Rect) -> Rect {
    let inner = inner_area(rect);
    let text = item.toggle_style.text(&item.toggle, item.expanded);
    let width = (text.chars().count() as u16).min(inner.width);
    Rect {
        x: inner.right().saturating_sub(width),
        y: inner.y,
        width,
        height: inner.height.min(TEXT_ROWS),
    }
}

pub fn render_list(frame: &mut Frame<'_>, view: &ListView<'_>, area: Rect) {
    if view.total == 0 {
        let empty = Paragraph::new(Line::styled(
            "No greetings.",
            Style::default().fg(DETAIL_TEXT),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    for (item, rect) in item_areas(view, area) {
        render_item(frame, item, rect);
    }
}

fn render_item(frame: &mut Frame<'_>, item: &ItemView<'_>, rect: Rect) {
    let border_color = if item.selected {
        ACCENT_LIGHT
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let toggle = toggle_area(item, rect);
    let text_area = Rect {
        width: inner.width.saturating_sub(toggle.width),
        height: inner.height.min(TEXT_ROWS),
        ..inner
    };
    let lines = vec![
        Line::styled(item.label, Style::default().fg(HEADER_TEXT)),
        Line::styled(
            item.subject,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    let toggle_style = Style::default()
        .fg(ACCENT_LIGHT)
        .add_modifier(Modifier::BOLD);
    let toggle_widget = Paragraph::new(Line::styled(
        item.toggle_style.text(&item.toggle, item.expanded),
        toggle_style,
    ))
    .alignment(Alignment::Right);
    frame.render_widget(toggle_widget, toggle);

    let detail_area = Rect {
        y: inner.y + text_area.height,
        height: inner
            .height
            .saturating_sub(text_area.height)
            .min(item.extra_rows),
        ..inner
    };
    if detail_area.height > 0 {
        let detail = Paragraph::new(DETAIL_BODY)
            .style(Style::default().fg(DETAIL_TEXT))
            .wrap(Wrap { trim: true });
        frame.render_widget(detail, detail_area);
    }
}

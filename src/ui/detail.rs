//! Gauge detail overlay rendering.
//!
//! Displays a modal overlay with the selected gauge's value, threshold,
//! and severity. This is the terminal counterpart of a chart tooltip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format_value;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 36;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 9;

/// Render the gauge detail as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(metric) = app.selected_metric() else {
        return;
    };

    let severity = metric.severity();
    let severity_style = app.theme.severity_style(severity);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", metric.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Value: "),
            Span::styled(
                metric.value_label(),
                severity_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Expected Max: "),
            Span::raw(format!("{}{}", format_value(metric.max), metric.unit)),
        ]),
        Line::from(vec![
            Span::raw(" Severity: "),
            Span::styled(severity.label(), severity_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let overlay_width = 40u16.min(area.width.saturating_sub(4));
    let overlay_height = MIN_OVERLAY_HEIGHT;
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    let block = Block::default()
        .title(" Gauge Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

//! Common UI components shared across the dashboard.
//!
//! This module contains the header line, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header line with the node's overall state.
///
/// Displays: status indicator, uptime text, service up/down counts.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " HYDROPI STATUS ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("| Uptime: {}", app.uptime_line)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let up = data.services.iter().filter(|s| s.is_healthy()).count();
    let down = data.services.len() - up;

    let worst = data.worst_severity();

    let line = Line::from(vec![
        Span::styled(" ● ", app.theme.severity_style(worst)),
        Span::styled("HYDROPI ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(format!("Uptime: {} ", app.uptime_line)),
        Span::raw("│ "),
        Span::styled(format!("{}", up), Style::default().fg(app.theme.safe)),
        Span::raw(" up "),
        if down > 0 {
            Span::styled(
                format!("{}", down),
                Style::default().fg(app.theme.alert).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" down"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the data source, time since the fetch settled, and available
/// controls. A failed fetch shows its specific error message here.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit", err)
    } else if let Some(ref data) = app.data {
        let elapsed = data.fetched_at.elapsed();
        format!(
            " {} | fetched {:.1}s ago | ↑↓:select Enter:detail ?:help q:quit",
            app.source_description(),
            elapsed.as_secs_f64(),
        )
    } else {
        format!(" {} | Loading... | q:quit", app.source_description())
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Navigate rows"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Gauge detail"),
        Line::from("  Esc         Close overlay"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 16u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

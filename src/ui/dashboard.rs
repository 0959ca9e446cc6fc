//! Dashboard view rendering.
//!
//! Draws the three gauge bars, the service list, and (when the agent
//! reports them) the top-processes panel. Until the fetch settles the
//! whole content area shows a "Loading..." placeholder; after a failed
//! fetch it stays that way, with the error surfaced in the status bar.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::StatusData;

/// Width reserved for the gauge name column.
const NAME_WIDTH: usize = 14;
/// Width reserved for the value label column.
const LABEL_WIDTH: usize = 12;

/// Render the dashboard content area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        render_loading(frame, area);
        return;
    };

    let mut constraints = vec![
        Constraint::Length(data.metrics.len() as u16 + 2),
        Constraint::Min(4),
    ];
    if !data.processes.is_empty() {
        constraints.push(Constraint::Length(data.processes.len().min(5) as u16 + 3));
    }
    let chunks = Layout::vertical(constraints).split(area);

    render_gauges(frame, app, data, chunks[0]);
    render_services(frame, app, data, chunks[1]);
    if !data.processes.is_empty() {
        render_processes(frame, app, data, chunks[2]);
    }
}

/// Placeholder shown before the first successful fetch.
fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));

    let y = area.y + area.height.saturating_sub(1) / 2;
    let centered = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(paragraph, centered);
}

/// Render the three gauge bars.
///
/// Bar length is proportional to the value on a fixed 0-100 scale,
/// regardless of each gauge's own threshold; the color comes from the
/// threshold classification.
fn render_gauges(frame: &mut Frame, app: &App, data: &StatusData, area: Rect) {
    let block = Block::default()
        .title(" Gauges ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = (inner.width as usize)
        .saturating_sub(NAME_WIDTH + LABEL_WIDTH + 3)
        .max(10);

    let lines: Vec<Line> = data
        .metrics
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let severity_style = app.theme.severity_style(metric.severity());
            let marker = if i == app.selected { "▶ " } else { "  " };
            let filled = filled_cells(metric.value, bar_width);
            let bar: String =
                "█".repeat(filled) + &"░".repeat(bar_width - filled);

            Line::from(vec![
                Span::styled(marker, Style::default().fg(app.theme.highlight)),
                Span::raw(format!("{:<width$}", metric.name, width = NAME_WIDTH)),
                Span::styled(bar, severity_style),
                Span::raw(" "),
                Span::styled(
                    metric.value_label(),
                    severity_style.add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the service list, one `name: status` line per service.
fn render_services(frame: &mut Frame, app: &App, data: &StatusData, area: Rect) {
    let block = Block::default()
        .title(format!(" Services ({}) ", data.services.len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.services.is_empty() {
        let paragraph = Paragraph::new("No services reported")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, inner);
        return;
    }

    let offset = data.metrics.len();
    let lines: Vec<Line> = data
        .services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let marker = if app.selected == offset + i { "▶ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(app.theme.highlight)),
                Span::styled(
                    format!("{}: {}", service.name, service.status),
                    app.theme.service_style(service.is_healthy()),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the top-processes panel.
fn render_processes(frame: &mut Frame, app: &App, data: &StatusData, area: Rect) {
    let header = Row::new(vec![Cell::from("Process"), Cell::from("CPU")])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = data
        .processes
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(format!("{:.1}%", p.cpu)),
            ])
        })
        .collect();

    let widths = [Constraint::Fill(3), Constraint::Length(8)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Top Processes ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

/// Number of filled cells for a value on the fixed 0-100 bar scale.
///
/// Values over 100 clip at full width; non-finite and negative values
/// render an empty bar.
fn filled_cells(value: f64, width: usize) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let ratio = (value / 100.0).min(1.0);
    (ratio * width as f64).round() as usize
}

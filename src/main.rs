// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod config;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use crate::config::Settings;
use data::StatusData;
use source::{FileSource, HttpSource, StatusSource};

#[derive(Parser, Debug)]
#[command(name = "hydropi-doctor")]
#[command(about = "Status dashboard TUI for monitoring a HydroPi node")]
struct Args {
    /// Status endpoint URL (overrides config file and environment)
    #[arg(short, long, conflicts_with = "file")]
    url: Option<String>,

    /// Read a saved status report from a JSON file instead of the network
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fetch once, write the derived state to a JSON file, and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr, filtered by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        settings.url = url;
    }
    if let Some(secs) = args.timeout {
        settings.timeout = Duration::from_secs(secs.max(1));
    }

    // The one-shot fetch runs on a tokio runtime in the background while
    // the TUI loop stays synchronous on the main thread.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let source: Box<dyn StatusSource> = match args.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::spawn(&settings.url, settings.timeout)),
    };

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return rt.block_on(export_once(source, &export_path));
    }

    run_tui(source)
}

/// Fetch once, write the derived state to a file, and exit.
async fn export_once(mut source: Box<dyn StatusSource>, export_path: &Path) -> Result<()> {
    let outcome = loop {
        if let Some(outcome) = source.poll() {
            break outcome;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    };

    let report = outcome?;
    let data = StatusData::from_report(&report);
    write_export(&data, export_path)?;

    println!("Exported status to: {}", export_path.display());
    Ok(())
}

/// Write derived state to a JSON file.
fn write_export(data: &StatusData, path: &Path) -> Result<()> {
    use std::io::Write;

    let mut export = serde_json::Map::new();

    export.insert("uptime".to_string(), serde_json::json!(data.uptime));

    let metrics: Vec<serde_json::Value> = data
        .metrics
        .iter()
        .map(|m| {
            serde_json::json!({
                "name": m.name,
                "value": m.value,
                "unit": m.unit,
                "max": m.max,
                "severity": m.severity().label(),
                "over_max": m.over_max(),
            })
        })
        .collect();
    export.insert("metrics".to_string(), serde_json::Value::Array(metrics));

    let services: Vec<serde_json::Value> = data
        .services
        .iter()
        .map(|s| {
            serde_json::json!({
                "name": s.name,
                "status": s.status,
                "healthy": s.is_healthy(),
            })
        })
        .collect();
    export.insert("services".to_string(), serde_json::Value::Array(services));

    if !data.processes.is_empty() {
        export.insert(
            "top_processes".to_string(),
            serde_json::json!(data.processes),
        );
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn StatusSource>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 44;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header line
                Constraint::Min(8),    // Dashboard content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::dashboard::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render detail overlay if active
            if app.show_detail {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Apply the fetch outcome once it lands
        app.poll_source();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::{MemoryInfo, ServiceEntry, StatusReport};

    #[test]
    fn export_writes_the_three_metrics_with_severity() {
        let report = StatusReport {
            temperature: 80.0,
            cpu_usage: 50.0,
            memory: MemoryInfo {
                used: 40.0,
                total: 100.0,
            },
            uptime: Some("3d".to_string()),
            services: Some(vec![ServiceEntry {
                name: "pump".to_string(),
                status: "failed".to_string(),
            }]),
            top_processes: None,
        };
        let data = StatusData::from_report(&report);

        let file = tempfile::NamedTempFile::new().unwrap();
        write_export(&data, file.path()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();

        assert_eq!(written["uptime"], "3d");

        let metrics = written["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0]["name"], "Temperature");
        assert_eq!(metrics[0]["severity"], "alert");
        assert_eq!(metrics[0]["over_max"], true);
        assert_eq!(metrics[1]["name"], "CPU Usage");
        assert_eq!(metrics[1]["severity"], "safe");
        assert_eq!(metrics[2]["name"], "Memory Usage");

        let services = written["services"].as_array().unwrap();
        assert_eq!(services[0]["healthy"], false);

        // No processes were reported, so the panel key is omitted.
        assert!(written.get("top_processes").is_none());
    }
}

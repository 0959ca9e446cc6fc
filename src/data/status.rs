//! Derived display state and threshold classification.
//!
//! This module transforms a raw status report into the fixed three-gauge
//! metric list, with severity computed against baked-in thresholds.

use std::time::Instant;

use super::report::{ProcessEntry, StatusReport};

/// Alert threshold for the temperature gauge (°C).
const TEMPERATURE_MAX: f64 = 75.0;
/// Alert threshold for the CPU gauge (%).
const CPU_MAX: f64 = 80.0;
/// Alert threshold for the memory gauge (%).
const MEMORY_MAX: f64 = 85.0;

/// Display classification of a gauge value against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Safe,
    Nominal,
    Alert,
}

impl Severity {
    /// Short lowercase label for logs and export.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Safe => "safe",
            Severity::Nominal => "nominal",
            Severity::Alert => "alert",
        }
    }
}

/// Classify a gauge value against its threshold.
///
/// Check order matters: exceeding the threshold wins, then the inclusive
/// "at or below 80% of max" check. Only the band strictly between 80% and
/// 100% of max is nominal, so a value exactly at 80% of max is safe.
pub fn classify(value: f64, max: f64) -> Severity {
    if value > max {
        Severity::Alert
    } else if value <= max * 0.8 {
        Severity::Safe
    } else {
        Severity::Nominal
    }
}

/// One derived gauge with its unit and alert threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub max: f64,
}

impl Metric {
    pub fn severity(&self) -> Severity {
        classify(self.value, self.max)
    }

    /// Whether the value exceeds the alert threshold.
    pub fn over_max(&self) -> bool {
        self.value > self.max
    }

    /// Bar label: value and unit, with a fire marker when over threshold.
    pub fn value_label(&self) -> String {
        if self.over_max() {
            format!("{}{} 🔥", format_value(self.value), self.unit)
        } else {
            format!("{}{}", format_value(self.value), self.unit)
        }
    }
}

/// Format a gauge value: whole numbers without a decimal point, everything
/// else to one decimal. Non-finite values show a dash.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        "-".to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// A monitored service with the health state derived from its status text.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
}

impl ServiceStatus {
    /// "active" is the sole status treated as healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "active"
    }
}

/// The complete derived state for one fetch.
///
/// Built in one pass from a report and swapped into the app state as a
/// single assignment, so a render never observes a partial update.
#[derive(Debug, Clone)]
pub struct StatusData {
    /// Exactly three gauges, in fixed order.
    pub metrics: Vec<Metric>,
    /// Uptime text, verbatim from the report ("unknown" when absent).
    pub uptime: String,
    /// Service list, replaced wholesale on every fetch.
    pub services: Vec<ServiceStatus>,
    /// Top processes by CPU, empty when the agent omits them.
    pub processes: Vec<ProcessEntry>,
    pub fetched_at: Instant,
}

impl StatusData {
    /// Derive display state from a raw report.
    ///
    /// Thresholds are constants, never taken from the report. The memory
    /// percentage is not clamped; a zero total yields a non-finite value
    /// that the render path tolerates.
    pub fn from_report(report: &StatusReport) -> Self {
        let memory_percent = round1(report.memory.used / report.memory.total * 100.0);

        let metrics = vec![
            Metric {
                name: "Temperature",
                value: report.temperature,
                unit: "°C",
                max: TEMPERATURE_MAX,
            },
            Metric {
                name: "CPU Usage",
                value: report.cpu_usage,
                unit: "%",
                max: CPU_MAX,
            },
            Metric {
                name: "Memory Usage",
                value: memory_percent,
                unit: "%",
                max: MEMORY_MAX,
            },
        ];

        let services = report
            .services
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| ServiceStatus {
                name: s.name.clone(),
                status: s.status.clone(),
            })
            .collect();

        Self {
            metrics,
            uptime: report.uptime.clone().unwrap_or_else(|| "unknown".to_string()),
            services,
            processes: report.top_processes.clone().unwrap_or_default(),
            fetched_at: Instant::now(),
        }
    }

    /// The worst severity across all gauges and services.
    ///
    /// An inactive service counts as an alert.
    pub fn worst_severity(&self) -> Severity {
        let metric_worst = self
            .metrics
            .iter()
            .map(|m| m.severity())
            .max()
            .unwrap_or(Severity::Safe);

        if self.services.iter().any(|s| !s.is_healthy()) {
            Severity::Alert
        } else {
            metric_worst
        }
    }
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::report::{MemoryInfo, ServiceEntry};

    fn sample_report() -> StatusReport {
        StatusReport {
            temperature: 70.0,
            cpu_usage: 50.0,
            memory: MemoryInfo {
                used: 40.0,
                total: 100.0,
            },
            uptime: Some("3d".to_string()),
            services: Some(vec![ServiceEntry {
                name: "pump".to_string(),
                status: "active".to_string(),
            }]),
            top_processes: None,
        }
    }

    #[test]
    fn classify_exceeding_max_is_alert() {
        assert_eq!(classify(75.1, 75.0), Severity::Alert);
        assert_eq!(classify(200.0, 80.0), Severity::Alert);
    }

    #[test]
    fn classify_at_max_is_nominal_not_alert() {
        assert_eq!(classify(75.0, 75.0), Severity::Nominal);
        assert_eq!(classify(80.0, 80.0), Severity::Nominal);
    }

    #[test]
    fn classify_boundary_at_eighty_percent_is_safe() {
        // The inclusive check runs before the nominal fallthrough, so a
        // value exactly at 80% of max lands in the safe band.
        assert_eq!(classify(60.0, 75.0), Severity::Safe);
        assert_eq!(classify(64.0, 80.0), Severity::Safe);
        assert_eq!(classify(68.0, 85.0), Severity::Safe);
    }

    #[test]
    fn classify_between_eighty_percent_and_max_is_nominal() {
        assert_eq!(classify(60.1, 75.0), Severity::Nominal);
        assert_eq!(classify(70.0, 75.0), Severity::Nominal);
        assert_eq!(classify(74.9, 75.0), Severity::Nominal);
    }

    #[test]
    fn classify_below_eighty_percent_is_safe() {
        assert_eq!(classify(0.0, 75.0), Severity::Safe);
        assert_eq!(classify(-5.0, 75.0), Severity::Safe);
        assert_eq!(classify(12.5, 80.0), Severity::Safe);
    }

    #[test]
    fn classify_is_total_over_nan() {
        // NaN fails both comparisons and falls through without panicking.
        assert_eq!(classify(f64::NAN, 85.0), Severity::Nominal);
    }

    #[test]
    fn derives_the_three_fixed_metrics() {
        let data = StatusData::from_report(&sample_report());

        assert_eq!(
            data.metrics,
            vec![
                Metric {
                    name: "Temperature",
                    value: 70.0,
                    unit: "°C",
                    max: 75.0
                },
                Metric {
                    name: "CPU Usage",
                    value: 50.0,
                    unit: "%",
                    max: 80.0
                },
                Metric {
                    name: "Memory Usage",
                    value: 40.0,
                    unit: "%",
                    max: 85.0
                },
            ]
        );
        assert_eq!(data.uptime, "3d");
        assert_eq!(data.services.len(), 1);
        assert!(data.services[0].is_healthy());
    }

    #[test]
    fn derives_from_the_wire_payload_end_to_end() {
        let json = r#"{
            "temperature": 70,
            "cpu_usage": 50,
            "memory": { "used": 40, "total": 100 },
            "uptime": "3d",
            "services": [ { "name": "pump", "status": "active" } ]
        }"#;
        let report: StatusReport = serde_json::from_str(json).unwrap();
        let data = StatusData::from_report(&report);

        assert_eq!(data.metrics[0].value, 70.0);
        assert_eq!(data.metrics[1].value, 50.0);
        assert_eq!(data.metrics[2].value, 40.0);
        assert_eq!(data.uptime, "3d");
        assert_eq!(data.services[0].name, "pump");
        assert!(data.services[0].is_healthy());
    }

    #[test]
    fn memory_percentage_rounds_to_one_decimal() {
        let mut report = sample_report();
        report.memory = MemoryInfo {
            used: 33.0,
            total: 99.0,
        };
        let data = StatusData::from_report(&report);
        assert_eq!(data.metrics[2].value, 33.3);
    }

    #[test]
    fn zero_total_memory_yields_non_finite_value_without_panicking() {
        let mut report = sample_report();
        report.memory = MemoryInfo {
            used: 40.0,
            total: 0.0,
        };
        let data = StatusData::from_report(&report);

        let memory = &data.metrics[2];
        assert!(!memory.value.is_finite());
        // The label and severity paths must tolerate the value.
        let _ = memory.value_label();
        let _ = memory.severity();
    }

    #[test]
    fn missing_services_yield_empty_list() {
        let mut report = sample_report();
        report.services = None;
        let data = StatusData::from_report(&report);
        assert!(data.services.is_empty());
    }

    #[test]
    fn missing_uptime_displays_unknown() {
        let mut report = sample_report();
        report.uptime = None;
        let data = StatusData::from_report(&report);
        assert_eq!(data.uptime, "unknown");
    }

    #[test]
    fn deriving_twice_is_idempotent() {
        let report = sample_report();
        let a = StatusData::from_report(&report);
        let b = StatusData::from_report(&report);
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.uptime, b.uptime);
        assert_eq!(a.services, b.services);
    }

    #[test]
    fn value_label_appends_fire_marker_over_max() {
        let metric = Metric {
            name: "Temperature",
            value: 80.0,
            unit: "°C",
            max: 75.0,
        };
        assert_eq!(metric.value_label(), "80°C 🔥");

        let metric = Metric {
            name: "CPU Usage",
            value: 42.5,
            unit: "%",
            max: 80.0,
        };
        assert_eq!(metric.value_label(), "42.5%");
    }

    #[test]
    fn worst_severity_prefers_alerts() {
        let mut report = sample_report();
        let data = StatusData::from_report(&report);
        // 70/75 is nominal, 50/80 and 40/85 are safe.
        assert_eq!(data.worst_severity(), Severity::Nominal);

        report.services = Some(vec![ServiceEntry {
            name: "pump".to_string(),
            status: "failed".to_string(),
        }]);
        let data = StatusData::from_report(&report);
        assert_eq!(data.worst_severity(), Severity::Alert);
    }
}

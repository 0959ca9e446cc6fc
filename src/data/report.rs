//! Wire types for the node status endpoint.
//!
//! These types match the JSON payload served by the HydroPi status agent.
//! Deserialization is tolerant: unknown fields are ignored and the optional
//! sections default to absent, since older agents omit them.

use serde::{Deserialize, Serialize};

/// A complete status report as served by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    /// CPU temperature in degrees Celsius.
    pub temperature: f64,

    /// CPU utilisation percentage over the agent's sampling interval.
    pub cpu_usage: f64,

    /// Memory counters in bytes.
    pub memory: MemoryInfo,

    /// Human-readable uptime string (e.g. "up 3 days, 2 hours").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,

    /// Monitored systemd services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceEntry>>,

    /// Top processes by CPU share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_processes: Option<Vec<ProcessEntry>>,
}

/// Memory counters. The agent reports the full psutil breakdown;
/// only `used` and `total` feed the derived gauges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Bytes in use.
    pub used: f64,
    /// Total physical memory in bytes.
    pub total: f64,
}

/// A named service with its textual health status.
///
/// The status text comes straight from `systemctl is-active`; "active"
/// is the sole value treated as healthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub status: String,
}

/// A process name with its CPU share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub name: String,
    pub cpu: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_report() {
        let json = r#"{
            "temperature": 48.2,
            "cpu_usage": 12.5,
            "memory": {
                "active": 210000000,
                "available": 610000000,
                "buffers": 42000000,
                "cached": 150000000,
                "free": 460000000,
                "percent": 36.3,
                "total": 945000000,
                "used": 343000000
            },
            "uptime": "up 3 days, 2 hours",
            "services": [
                { "name": "tilt-scanner", "status": "active" },
                { "name": "cloudflared", "status": "failed" }
            ],
            "top_processes": [
                { "name": "python3", "cpu": 4.2 },
                { "name": "node", "cpu": 1.1 }
            ]
        }"#;

        let report: StatusReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.temperature, 48.2);
        assert_eq!(report.cpu_usage, 12.5);
        assert_eq!(report.memory.used, 343000000.0);
        assert_eq!(report.memory.total, 945000000.0);
        assert_eq!(report.uptime.as_deref(), Some("up 3 days, 2 hours"));

        let services = report.services.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "tilt-scanner");
        assert_eq!(services[1].status, "failed");

        let processes = report.top_processes.unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].name, "python3");
    }

    #[test]
    fn missing_optional_sections_default_to_none() {
        let json = r#"{
            "temperature": 70,
            "cpu_usage": 50,
            "memory": { "used": 40, "total": 100 }
        }"#;

        let report: StatusReport = serde_json::from_str(json).unwrap();
        assert!(report.uptime.is_none());
        assert!(report.services.is_none());
        assert!(report.top_processes.is_none());
    }

    #[test]
    fn missing_memory_is_an_error() {
        let json = r#"{ "temperature": 70, "cpu_usage": 50 }"#;
        assert!(serde_json::from_str::<StatusReport>(json).is_err());
    }

    #[test]
    fn integer_values_parse_as_floats() {
        let json = r#"{
            "temperature": 70,
            "cpu_usage": 50,
            "memory": { "used": 40, "total": 100 },
            "uptime": "3d"
        }"#;

        let report: StatusReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.temperature, 70.0);
        assert_eq!(report.cpu_usage, 50.0);
    }
}

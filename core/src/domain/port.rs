//! Port and process records.

use serde::{Deserialize, Serialize};

use super::ServiceRegistry;

// ============================================================================
// ProcessRecord
// ============================================================================

/// One row of an open-files listing, mapped positionally.
///
/// Every column is kept as the listing tool printed it, so the JSON output
/// mirrors the tool rather than a reinterpretation of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub command: String,
    pub pid: String,
    pub user: String,
    pub fd: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub device: String,
    pub size: String,
    pub node: String,
    pub name: String,
}

impl ProcessRecord {
    /// Build a record from the first nine columns of a listing row.
    ///
    /// Returns `None` when fewer than nine columns are present. Everything
    /// from the ninth column on is the NAME column, rejoined with single
    /// spaces (lsof prints the socket state there, e.g. `*:3000 (LISTEN)`).
    pub fn from_columns(columns: &[&str]) -> Option<Self> {
        let [command, pid, user, fd, kind, device, size, node, name @ ..] = columns else {
            return None;
        };
        if name.is_empty() {
            return None;
        }

        Some(Self {
            command: command.to_string(),
            pid: pid.to_string(),
            user: user.to_string(),
            fd: fd.to_string(),
            kind: kind.to_string(),
            device: device.to_string(),
            size: size.to_string(),
            node: node.to_string(),
            name: name.join(" "),
        })
    }

    /// The PID column as a number, if it is one.
    pub fn pid_number(&self) -> Option<u32> {
        self.pid.parse().ok()
    }
}

impl std::fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (PID {}, {})", self.command, self.pid, self.user)
    }
}

// ============================================================================
// PortDetails
// ============================================================================

/// Everything known about one port after a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDetails {
    pub port: u16,
    pub service: String,
    pub in_use: bool,
    pub processes: Vec<ProcessRecord>,
}

impl PortDetails {
    /// Build details for `port` from the parsed processes.
    ///
    /// `in_use` is derived from `processes`, so the two can never disagree.
    pub fn new(port: u16, processes: Vec<ProcessRecord>) -> Self {
        Self {
            port,
            service: ServiceRegistry::name_or_unknown(port).to_string(),
            in_use: !processes.is_empty(),
            processes,
        }
    }

    /// Details for a port nobody is bound to.
    pub fn available(port: u16) -> Self {
        Self::new(port, Vec::new())
    }

    /// The first matched process, used by the `process` report.
    pub fn primary_process(&self) -> Option<&ProcessRecord> {
        self.processes.first()
    }
}

// ============================================================================
// PortSummaryEntry
// ============================================================================

/// One listening socket from a system-wide scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortSummaryEntry {
    pub port: u16,
    pub command: String,
    pub pid: String,
    pub user: String,
    pub name: String,
}

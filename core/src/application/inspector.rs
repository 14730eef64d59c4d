//! Process lineage and connection lookups.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::parser::listing_rows;
use crate::domain::{PortDetails, ProcessRecord};
use crate::ports::PortQuerySource;

/// Follow-up details for the process holding a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    #[serde(flatten)]
    pub details: PortDetails,
    pub tree: Option<String>,
    pub connections: Vec<String>,
}

impl ProcessReport {
    /// The process the tree and connections belong to.
    pub fn process(&self) -> Option<&ProcessRecord> {
        self.details.primary_process()
    }
}

/// Looks up process lineage and connections by PID.
pub struct ProcessInspector<'a, S: PortQuerySource> {
    source: &'a S,
}

impl<'a, S: PortQuerySource> ProcessInspector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Textual PID/PPID/command lineage, or `None` if the process is gone.
    pub async fn tree(&self, pid: u32) -> Option<String> {
        self.source.query_process_tree(pid).await
    }

    /// Raw connection lines for `pid`, header excluded.
    ///
    /// Returns every line; display truncation is up to the caller.
    pub async fn connections(&self, pid: u32) -> Vec<String> {
        let raw = self.source.query_process_connections(pid).await;
        listing_rows(&raw)
    }

    /// Tree and connections for the first process in `details`.
    ///
    /// Queries run one after another: tree first, then connections. If no
    /// process holds the port, or its PID column isn't numeric, nothing is
    /// queried.
    pub async fn inspect(&self, details: PortDetails) -> ProcessReport {
        let Some(pid) = details.primary_process().and_then(ProcessRecord::pid_number) else {
            return ProcessReport {
                details,
                tree: None,
                connections: Vec::new(),
            };
        };

        let tree = self.tree(pid).await;
        let connections = self.connections(pid).await;
        debug!(
            pid,
            has_tree = tree.is_some(),
            connections = connections.len(),
            "Process inspected"
        );

        ProcessReport {
            details,
            tree,
            connections,
        }
    }
}

//! Fixed-text query source for tests and offline rendering.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::ports::PortQuerySource;

/// A query made against a [`CannedSource`], in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCall {
    Port(u16),
    Connections(u32),
    Tree(u32),
    AllListening,
}

/// Query source that answers from text registered up front.
///
/// Anything not registered answers like a probe that found nothing.
#[derive(Debug, Default)]
pub struct CannedSource {
    ports: HashMap<u16, String>,
    connections: HashMap<u32, String>,
    trees: HashMap<u32, String>,
    listening: String,
    calls: Mutex<Vec<QueryCall>>,
}

impl CannedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: u16, output: impl Into<String>) -> Self {
        self.ports.insert(port, output.into());
        self
    }

    pub fn with_connections(mut self, pid: u32, output: impl Into<String>) -> Self {
        self.connections.insert(pid, output.into());
        self
    }

    pub fn with_tree(mut self, pid: u32, output: impl Into<String>) -> Self {
        self.trees.insert(pid, output.into());
        self
    }

    pub fn with_listening(mut self, output: impl Into<String>) -> Self {
        self.listening = output.into();
        self
    }

    /// Queries answered so far.
    pub fn calls(&self) -> Vec<QueryCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: QueryCall) {
        self.calls.lock().push(call);
    }
}

impl PortQuerySource for CannedSource {
    async fn query_port(&self, port: u16) -> String {
        self.record(QueryCall::Port(port));
        self.ports.get(&port).cloned().unwrap_or_default()
    }

    async fn query_process_connections(&self, pid: u32) -> String {
        self.record(QueryCall::Connections(pid));
        self.connections.get(&pid).cloned().unwrap_or_default()
    }

    async fn query_process_tree(&self, pid: u32) -> Option<String> {
        self.record(QueryCall::Tree(pid));
        self.trees.get(&pid).cloned()
    }

    async fn query_all_listening(&self) -> String {
        self.record(QueryCall::AllListening);
        self.listening.clone()
    }
}

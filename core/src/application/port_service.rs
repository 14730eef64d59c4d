//! Port lookup application service.

use tracing::debug;

use crate::domain::parser::{parse_listening_summary, parse_process_listing};
use crate::domain::{PortDetails, PortSummaryEntry};
use crate::ports::PortQuerySource;

/// Application service for port lookups.
///
/// Generic over the query source so tests can inject canned output.
pub struct PortService<S: PortQuerySource> {
    source: S,
}

impl<S: PortQuerySource> PortService<S> {
    /// Create a new port service with the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Probe `port` and describe who holds it.
    ///
    /// An empty probe (idle port, missing tool, failed command) yields
    /// details with `in_use == false`.
    pub async fn port_details(&self, port: u16) -> PortDetails {
        let raw = self.source.query_port(port).await;
        let processes = parse_process_listing(&raw);
        debug!(port, processes = processes.len(), "Port probed");
        PortDetails::new(port, processes)
    }

    /// Every listening socket on the system, in probe output order.
    pub async fn listening_ports(&self) -> Vec<PortSummaryEntry> {
        let raw = self.source.query_all_listening().await;
        let entries = parse_listening_summary(&raw);
        debug!(entries = entries.len(), "Listening ports scanned");
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CannedSource, QueryCall};

    const PORT_3000: &str = "COMMAND   PID  USER  FD   TYPE DEVICE SIZE NODE NAME
node      1234 alice 23u  IPv4 0x1     0t0  TCP  *:3000 (LISTEN)
";

    #[tokio::test]
    async fn test_port_in_use() {
        let service = PortService::new(CannedSource::new().with_port(3000, PORT_3000));

        let details = service.port_details(3000).await;
        assert!(details.in_use);
        assert_eq!(details.service, "Dev Server");
        assert_eq!(details.processes.len(), 1);

        let process = &details.processes[0];
        assert_eq!(process.command, "node");
        assert_eq!(process.pid, "1234");
        assert_eq!(process.user, "alice");
        assert_eq!(process.fd, "23u");
        assert_eq!(process.name, "*:3000 (LISTEN)");
    }

    #[tokio::test]
    async fn test_port_available() {
        let service = PortService::new(CannedSource::new());

        let details = service.port_details(3000).await;
        assert!(!details.in_use);
        assert!(details.processes.is_empty());
        assert_eq!(details.service, "Dev Server");
    }

    #[tokio::test]
    async fn test_unknown_service() {
        let service = PortService::new(CannedSource::new());
        assert_eq!(service.port_details(12345).await.service, "Unknown");
    }

    #[tokio::test]
    async fn test_listening_ports() {
        let listing = "COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
postgres 501 pg 7u IPv4 0xa 0t0 TCP 127.0.0.1:5432 (LISTEN)
broken line without a port
redis 502 redis 6u IPv6 0xb 0t0 TCP [::1]:6379 (LISTEN)
";
        let service = PortService::new(CannedSource::new().with_listening(listing));

        let entries = service.listening_ports().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].port, 5432);
        assert_eq!(entries[0].name, "127.0.0.1:5432");
        assert_eq!(entries[1].port, 6379);
        assert_eq!(entries[1].command, "redis");

        assert_eq!(service.source().calls(), vec![QueryCall::AllListening]);
    }

    #[tokio::test]
    async fn test_every_call_probes_again() {
        let service = PortService::new(CannedSource::new().with_port(3000, PORT_3000));

        service.port_details(3000).await;
        service.port_details(3000).await;
        assert_eq!(
            service.source().calls(),
            vec![QueryCall::Port(3000), QueryCall::Port(3000)]
        );
    }
}

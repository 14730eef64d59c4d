//! Well-known service names and IANA port ranges.

use serde::{Deserialize, Serialize};

/// Service name shown when a port is not in the registry.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Ports conventionally associated with a service.
const SERVICES: &[(u16, &str)] = &[
    (20, "FTP Data"),
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (465, "SMTPS"),
    (587, "SMTP Submission"),
    (993, "IMAPS"),
    (995, "POP3S"),
    (1433, "Microsoft SQL Server"),
    (1521, "Oracle Database"),
    (2375, "Docker"),
    (3000, "Dev Server"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (4200, "Angular Dev Server"),
    (5000, "Flask / Dev Server"),
    (5173, "Vite"),
    (5432, "PostgreSQL"),
    (5672, "RabbitMQ"),
    (6379, "Redis"),
    (8000, "HTTP Alt"),
    (8080, "HTTP Proxy"),
    (8443, "HTTPS Alt"),
    (8888, "Jupyter"),
    (9000, "PHP-FPM"),
    (9090, "Prometheus"),
    (9200, "Elasticsearch"),
    (11211, "Memcached"),
    (27017, "MongoDB"),
];

/// First port of the IANA registered range.
const REGISTERED_START: u16 = 1024;

/// First port of the IANA dynamic (ephemeral) range.
const DYNAMIC_START: u16 = 49152;

/// Static port → service name lookup.
pub struct ServiceRegistry;

impl ServiceRegistry {
    /// Look up the conventional service for a port.
    pub fn lookup(port: u16) -> Option<&'static str> {
        SERVICES
            .iter()
            .find(|(p, _)| *p == port)
            .map(|(_, name)| *name)
    }

    /// Like [`lookup`](Self::lookup) but falls back to [`UNKNOWN_SERVICE`].
    pub fn name_or_unknown(port: u16) -> &'static str {
        Self::lookup(port).unwrap_or(UNKNOWN_SERVICE)
    }

    /// Classify a port into its IANA range.
    pub fn classify(port: u16) -> PortRange {
        PortRange::of(port)
    }

    /// Lookup result and range classification for `port`.
    pub fn describe(port: u16) -> ServiceInfo {
        let service = Self::lookup(port);
        ServiceInfo {
            port,
            service: service.unwrap_or(UNKNOWN_SERVICE).to_string(),
            known: service.is_some(),
            range: Self::classify(port),
        }
    }

    /// Every registered `(port, service)` pair, in ascending port order.
    pub fn entries() -> &'static [(u16, &'static str)] {
        SERVICES
    }
}

/// What the registry knows about a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub port: u16,
    pub service: String,
    /// Whether `service` came from the registry rather than the default.
    pub known: bool,
    pub range: PortRange,
}

/// IANA port range a port falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortRange {
    /// 0-1023. Binding usually needs elevated privileges.
    WellKnown,
    /// 1024-49151.
    Registered,
    /// 49152-65535, handed out by the OS for outbound connections.
    Dynamic,
}

impl PortRange {
    pub fn of(port: u16) -> Self {
        if port < REGISTERED_START {
            PortRange::WellKnown
        } else if port < DYNAMIC_START {
            PortRange::Registered
        } else {
            PortRange::Dynamic
        }
    }

    /// Get the display name for this range.
    pub fn label(&self) -> &'static str {
        match self {
            PortRange::WellKnown => "Well-known",
            PortRange::Registered => "Registered",
            PortRange::Dynamic => "Dynamic/Private",
        }
    }

    /// One-line explanation shown next to the label.
    pub fn note(&self) -> &'static str {
        match self {
            PortRange::WellKnown => "ports below 1024 usually require root to bind",
            PortRange::Registered => "IANA registered range (1024-49151)",
            PortRange::Dynamic => "ephemeral range (49152-65535), assigned by the OS",
        }
    }
}

impl std::fmt::Display for PortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        assert_eq!(ServiceRegistry::lookup(22), Some("SSH"));
        assert_eq!(ServiceRegistry::lookup(443), Some("HTTPS"));
        assert_eq!(ServiceRegistry::lookup(5432), Some("PostgreSQL"));
        assert_eq!(ServiceRegistry::lookup(3000), Some("Dev Server"));
    }

    #[test]
    fn test_lookup_every_entry() {
        for (port, name) in ServiceRegistry::entries() {
            assert_eq!(ServiceRegistry::lookup(*port), Some(*name));
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(ServiceRegistry::lookup(12345), None);
        assert_eq!(ServiceRegistry::name_or_unknown(12345), UNKNOWN_SERVICE);
        assert_eq!(ServiceRegistry::name_or_unknown(0), "Unknown");
    }

    #[test]
    fn test_entries_sorted_and_unique() {
        let entries = ServiceRegistry::entries();
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ServiceRegistry::classify(0), PortRange::WellKnown);
        assert_eq!(ServiceRegistry::classify(1023), PortRange::WellKnown);
        assert_eq!(ServiceRegistry::classify(1024), PortRange::Registered);
        assert_eq!(ServiceRegistry::classify(49151), PortRange::Registered);
        assert_eq!(ServiceRegistry::classify(49152), PortRange::Dynamic);
        assert_eq!(ServiceRegistry::classify(u16::MAX), PortRange::Dynamic);
    }

    #[test]
    fn test_describe() {
        let info = ServiceRegistry::describe(5432);
        assert_eq!(info.service, "PostgreSQL");
        assert!(info.known);
        assert_eq!(info.range, PortRange::Registered);

        let info = ServiceRegistry::describe(60000);
        assert_eq!(info.service, UNKNOWN_SERVICE);
        assert!(!info.known);
        assert_eq!(info.range, PortRange::Dynamic);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(PortRange::WellKnown.to_string(), "Well-known");
        assert_eq!(PortRange::Dynamic.label(), "Dynamic/Private");
        assert!(PortRange::WellKnown.note().contains("root"));
    }

    #[test]
    fn test_range_serializes_camel_case() {
        let json = serde_json::to_string(&PortRange::WellKnown).unwrap();
        assert_eq!(json, "\"wellKnown\"");
    }
}

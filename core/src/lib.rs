//! whoport Core Library
//!
//! Answers "who is on this port?" by asking the system listing tools and
//! turning their text output into typed records:
//! - Look up the conventional service and IANA range of a port
//! - Parse `lsof` output into per-process records for a port
//! - Scan every listening socket on the system
//! - Follow up on a PID with its process tree and open connections
//! - Render any of the above as JSON or as a human report
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Records, the service registry and the pure parsers
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: `lsof`/`ps` probe and a canned source for tests
//! - `application`: Use case services
//!
//! # Platform Support
//! Anything with `lsof` and a POSIX `ps` (macOS, Linux, the BSDs).

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;
pub mod report;

// Re-export domain types (primary API)
pub use domain::{
    PortDetails, PortRange, PortSummaryEntry, ProcessRecord, ServiceInfo, ServiceRegistry,
};

// Re-export other commonly used types
pub use adapters::{CannedSource, SystemProbe};
pub use application::{PortService, ProcessInspector, ProcessReport};
pub use config::{Config, ConfigStore};
pub use error::{Error, Result};
pub use ports::PortQuerySource;
pub use report::{OutputFormat, ReportFormatter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

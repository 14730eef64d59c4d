//! Domain layer - value types and pure logic.
//!
//! Nothing in here touches the operating system. Raw probe text goes in,
//! typed records come out.

pub mod parser;
mod port;
mod service;

pub use port::{PortDetails, PortSummaryEntry, ProcessRecord};
pub use service::{PortRange, ServiceInfo, ServiceRegistry, UNKNOWN_SERVICE};

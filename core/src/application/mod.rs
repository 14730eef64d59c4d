//! Application layer - Use case services.
//!
//! Services are thin orchestrators: they ask a `PortQuerySource` for raw
//! text, hand it to the domain parsers and return domain types. Each call
//! probes the system afresh; nothing is cached between calls.

mod inspector;
mod port_service;

pub use inspector::{ProcessInspector, ProcessReport};
pub use port_service::PortService;

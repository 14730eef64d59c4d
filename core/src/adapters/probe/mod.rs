//! Port query source adapters.
//!
//! `SystemProbe` shells out to `lsof` and `ps`; `CannedSource` replays
//! fixed text so parsers and services can be tested without either tool.

mod canned;
mod system;

pub use canned::{CannedSource, QueryCall};
pub use system::SystemProbe;

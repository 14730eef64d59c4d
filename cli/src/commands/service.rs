//! Service command - registry lookup and port range.

use anyhow::Result;
use whoport_core::{PortQuerySource, ServiceRegistry};

use super::{Context, Outcome};

pub fn run<S: PortQuerySource>(ctx: &Context<S>, port: u16) -> Result<Outcome> {
    let info = ServiceRegistry::describe(port);
    Ok(Outcome {
        output: ctx.formatter.service(&info)?,
        found: info.known,
    })
}

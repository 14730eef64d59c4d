//! Whatis command - who owns a port, in brief.

use anyhow::Result;
use whoport_core::PortQuerySource;

use super::{Context, Outcome};

pub async fn run<S: PortQuerySource>(ctx: &Context<S>, port: u16) -> Result<Outcome> {
    let details = ctx.service.port_details(port).await;
    Ok(Outcome {
        output: ctx.formatter.whatis(&details)?,
        found: details.in_use,
    })
}

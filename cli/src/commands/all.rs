//! All command - every listening port on the system.

use anyhow::Result;
use whoport_core::PortQuerySource;

use super::{Context, Outcome};

pub async fn run<S: PortQuerySource>(ctx: &Context<S>) -> Result<Outcome> {
    let entries = ctx.service.listening_ports().await;
    Ok(Outcome {
        output: ctx.formatter.all(&entries)?,
        found: !entries.is_empty(),
    })
}

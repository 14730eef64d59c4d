//! Process command - first process on a port, its tree and connections.

use anyhow::Result;
use whoport_core::{PortQuerySource, ProcessInspector};

use super::{Context, Outcome};

pub async fn run<S: PortQuerySource>(ctx: &Context<S>, port: u16) -> Result<Outcome> {
    let details = ctx.service.port_details(port).await;
    let report = ProcessInspector::new(ctx.service.source())
        .inspect(details)
        .await;

    Ok(Outcome {
        output: ctx
            .formatter
            .process(&report, ctx.config.connection_limit)?,
        found: report.process().is_some(),
    })
}

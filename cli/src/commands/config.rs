//! Config command - show or initialize the configuration file.
//!
//! Unlike the lookups, these fail loudly on an unreadable file.

use anyhow::{bail, Result};
use serde::Serialize;
use whoport_core::{Config, OutputFormat, PortQuerySource};

use super::{Context, Outcome};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigView<'a> {
    path: String,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

pub async fn show<S: PortQuerySource>(ctx: &Context<S>) -> Result<Outcome> {
    let store = ctx.store()?;
    let config = store.load().await?;

    let view = ConfigView {
        path: store.path().display().to_string(),
        exists: store.path().exists(),
        config: &config,
    };

    let output = if ctx.formatter.format() == OutputFormat::Json {
        serde_json::to_string_pretty(&view)?
    } else {
        let source = if view.exists { "" } else { " (not found, using defaults)" };
        [
            format!("Config file:      {}{}", view.path, source),
            format!("lsof:             {}", config.lsof_path),
            format!("ps:               {}", config.ps_path),
            format!("Connection limit: {}", config.connection_limit),
        ]
        .join("\n")
    };

    Ok(Outcome {
        output,
        found: true,
    })
}

pub async fn init<S: PortQuerySource>(ctx: &Context<S>, force: bool) -> Result<Outcome> {
    let store = ctx.store()?;
    let path = store.path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    store.save(&Config::default()).await?;
    Ok(Outcome {
        output: format!("Wrote default configuration to {}", path.display()),
        found: true,
    })
}

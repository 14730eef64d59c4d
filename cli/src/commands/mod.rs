//! Subcommand handlers.
//!
//! Every handler renders its report and says whether it found anything,
//! which `--strict` turns into the exit status. Handlers are generic over
//! the query source so they run the same against canned text.

pub mod all;
pub mod config;
pub mod info;
pub mod process;
pub mod service;
pub mod whatis;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::warn;
use whoport_core::{
    Config, ConfigStore, OutputFormat, PortQuerySource, PortService, ReportFormatter, SystemProbe,
};

/// What a handler produced.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub found: bool,
}

/// Everything a handler needs, built once from the command line.
pub struct Context<S: PortQuerySource = SystemProbe> {
    store: Option<ConfigStore>,
    pub config: Config,
    pub formatter: ReportFormatter,
    pub service: PortService<S>,
}

impl Context<SystemProbe> {
    /// Build the context for a real run.
    ///
    /// Never fails: an unreadable config file or a missing home directory
    /// is logged and the defaults are used, so lookups still work. Only the
    /// `config` subcommand reports those problems as errors.
    pub async fn load(config_path: Option<PathBuf>, json: bool) -> Self {
        let store = match config_path {
            Some(path) => Some(ConfigStore::with_path(path)),
            None => match ConfigStore::new() {
                Ok(store) => Some(store),
                Err(e) => {
                    warn!(error = %e, "No config location, using defaults");
                    None
                }
            },
        };

        let config = match &store {
            Some(store) => store.load().await.unwrap_or_else(|e| {
                warn!(path = %store.path().display(), error = %e, "Ignoring config file");
                Config::default()
            }),
            None => Config::default(),
        };

        let probe = SystemProbe::from_config(&config);
        Self::with_source(probe, store, config, OutputFormat::from_json_flag(json))
    }
}

impl<S: PortQuerySource> Context<S> {
    pub fn with_source(
        source: S,
        store: Option<ConfigStore>,
        config: Config,
        format: OutputFormat,
    ) -> Self {
        Self {
            store,
            config,
            formatter: ReportFormatter::new(format),
            service: PortService::new(source),
        }
    }

    /// The config file location, required by the `config` subcommand.
    pub fn store(&self) -> Result<&ConfigStore> {
        self.store
            .as_ref()
            .ok_or_else(|| anyhow!("Could not determine home directory; pass --config <PATH>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use whoport_core::CannedSource;

    const PORT_3000: &str = "COMMAND   PID  USER  FD   TYPE DEVICE SIZE NODE NAME
node      1234 alice 23u  IPv4 0x1     0t0  TCP  *:3000 (LISTEN)
";

    fn canned(source: CannedSource) -> Context<CannedSource> {
        colored::control::set_override(false);
        Context::with_source(source, None, Config::default(), OutputFormat::Human)
    }

    fn busy() -> CannedSource {
        CannedSource::new()
            .with_port(3000, PORT_3000)
            .with_tree(1234, "  PID  PPID COMMAND\n 1234     1 node server.js")
            .with_listening(PORT_3000)
    }

    #[tokio::test]
    async fn test_info_found_flag() {
        let outcome = info::run(&canned(CannedSource::new()), 3000).await.unwrap();
        assert!(!outcome.found);
        assert!(outcome.output.contains("Available"));

        let outcome = info::run(&canned(busy()), 3000).await.unwrap();
        assert!(outcome.found);
        assert!(outcome.output.contains("alice"));
    }

    #[tokio::test]
    async fn test_whatis_found_flag() {
        let outcome = whatis::run(&canned(CannedSource::new()), 3000).await.unwrap();
        assert!(!outcome.found);
        assert!(outcome.output.contains("available"));

        let outcome = whatis::run(&canned(busy()), 3000).await.unwrap();
        assert!(outcome.found);
        assert!(outcome.output.contains("node (PID 1234)"));
    }

    #[tokio::test]
    async fn test_process_found_flag() {
        let outcome = process::run(&canned(CannedSource::new()), 3000).await.unwrap();
        assert!(!outcome.found);
        assert_eq!(outcome.output, "No process found on port 3000");

        let outcome = process::run(&canned(busy()), 3000).await.unwrap();
        assert!(outcome.found);
        assert!(outcome.output.contains("node server.js"));
    }

    #[test]
    fn test_service_found_flag() {
        let ctx = canned(CannedSource::new());
        assert!(service::run(&ctx, 22).unwrap().found);
        assert!(!service::run(&ctx, 12345).unwrap().found);
    }

    #[tokio::test]
    async fn test_all_found_flag() {
        let outcome = all::run(&canned(CannedSource::new())).await.unwrap();
        assert!(!outcome.found);
        assert_eq!(outcome.output, "No listening ports found.");

        let outcome = all::run(&canned(busy())).await.unwrap();
        assert!(outcome.found);
        assert!(outcome.output.contains("Total: 1 ports"));
    }

    #[tokio::test]
    async fn test_load_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let ctx = Context::load(Some(dir.path().join("config.json")), true).await;

        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.formatter.format(), OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"connectionLimit": 2}"#).unwrap();

        let ctx = Context::load(Some(path), false).await;
        assert_eq!(ctx.config.connection_limit, 2);
        assert_eq!(ctx.formatter.format(), OutputFormat::Human);
    }

    #[tokio::test]
    async fn test_malformed_config_still_runs_lookups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let ctx = Context::load(Some(path), false).await;
        assert_eq!(ctx.config, Config::default());

        assert!(service::run(&ctx, 22).unwrap().found);
        assert!(info::run(&ctx, 1).await.is_ok());

        // The config command itself still reports the broken file.
        assert!(config::show(&ctx).await.is_err());
    }

    #[tokio::test]
    async fn test_config_commands_need_a_location() {
        let ctx = canned(CannedSource::new());
        assert!(config::show(&ctx).await.is_err());
        assert!(config::init(&ctx, false).await.is_err());
    }

    #[tokio::test]
    async fn test_config_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let ctx = Context::load(Some(path.clone()), false).await;

        assert!(config::init(&ctx, false).await.unwrap().found);
        assert!(path.exists());
        assert!(config::init(&ctx, false).await.is_err());
        assert!(config::init(&ctx, true).await.unwrap().found);

        let shown = config::show(&ctx).await.unwrap();
        assert!(shown.output.contains("Connection limit: 5"));
    }
}

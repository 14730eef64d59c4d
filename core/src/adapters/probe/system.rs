//! `lsof`/`ps` backed query source.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ports::PortQuerySource;

/// Query source that runs the system listing tools.
///
/// Every query uses numeric output (`-P -n`) so lsof never blocks on DNS or
/// service-name resolution. There is no timeout: a hung tool hangs the query.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    lsof: String,
    ps: String,
}

impl SystemProbe {
    /// Create a probe using `lsof` and `ps` from `PATH`.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a probe using the tool paths from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            lsof: config.lsof_path.clone(),
            ps: config.ps_path.clone(),
        }
    }

    /// Run `program` and return its stdout.
    ///
    /// A non-zero exit is an error, including lsof's exit 1 for "no matches".
    pub async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, "Running probe");

        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "{} exited with status: {}",
                program, output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in {} output: {}", program, e)))
    }

    /// Like [`run`](Self::run), but any failure becomes empty output.
    async fn run_or_empty(&self, program: &str, args: &[&str]) -> String {
        match self.run(program, args).await {
            Ok(stdout) => stdout,
            Err(e) => {
                debug!(program, error = %e, "Probe returned no data");
                String::new()
            }
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PortQuerySource for SystemProbe {
    /// Executes: `lsof -i :<port> -P -n`
    async fn query_port(&self, port: u16) -> String {
        let filter = format!(":{}", port);
        self.run_or_empty(&self.lsof, &["-i", &filter, "-P", "-n"])
            .await
    }

    /// Executes: `lsof -a -p <pid> -i -P -n`
    ///
    /// `-a` ANDs the PID and network filters together.
    async fn query_process_connections(&self, pid: u32) -> String {
        let pid = pid.to_string();
        self.run_or_empty(&self.lsof, &["-a", "-p", &pid, "-i", "-P", "-n"])
            .await
    }

    /// Executes: `ps -o pid,ppid,command -p <pid>`
    async fn query_process_tree(&self, pid: u32) -> Option<String> {
        let pid = pid.to_string();
        let stdout = self
            .run_or_empty(&self.ps, &["-o", "pid,ppid,command", "-p", &pid])
            .await;

        let tree = stdout.trim_end();
        if tree.is_empty() {
            None
        } else {
            Some(tree.to_string())
        }
    }

    /// Executes: `lsof -iTCP -sTCP:LISTEN -P -n`
    async fn query_all_listening(&self) -> String {
        self.run_or_empty(&self.lsof, &["-iTCP", "-sTCP:LISTEN", "-P", "-n"])
            .await
    }
}

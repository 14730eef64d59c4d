//! Report rendering for every command, as JSON or as a human layout.
//!
//! JSON output is the record serialized as-is. Human output is decorative;
//! only the set of fields shown per command is stable.

use colored::Colorize;
use serde::Serialize;

use crate::application::ProcessReport;
use crate::domain::{PortDetails, PortSummaryEntry, ProcessRecord, ServiceInfo};
use crate::error::Result;

/// Max characters of the USER column in the `all` table.
const USER_WIDTH: usize = 10;

/// Max characters of the COMMAND column in the `all` table.
const COMMAND_WIDTH: usize = 14;

const RULE_WIDTH: usize = 60;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Human,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Renders records for one output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Full per-process detail for a port.
    pub fn info(&self, details: &PortDetails) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(details),
            OutputFormat::Human => Ok(human_info(details)),
        }
    }

    /// One line per process holding a port.
    pub fn whatis(&self, details: &PortDetails) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(details),
            OutputFormat::Human => Ok(human_whatis(details)),
        }
    }

    /// First process plus its tree and up to `connection_limit` connections.
    pub fn process(&self, report: &ProcessReport, connection_limit: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(report),
            OutputFormat::Human => Ok(human_process(report, connection_limit)),
        }
    }

    /// Registry lookup and range classification.
    pub fn service(&self, info: &ServiceInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(info),
            OutputFormat::Human => Ok(human_service(info)),
        }
    }

    /// Table of every listening socket.
    pub fn all(&self, entries: &[PortSummaryEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&entries),
            OutputFormat::Human => Ok(human_all(entries)),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH).dimmed().to_string()
}

fn heading(details: &PortDetails) -> String {
    format!(
        "🔍 Port {} {}",
        details.port.to_string().bold().cyan(),
        format!("({})", details.service).dimmed()
    )
}

fn status(details: &PortDetails) -> String {
    if details.in_use {
        "● IN USE".red().bold().to_string()
    } else {
        "○ Available".green().bold().to_string()
    }
}

fn detail_block(record: &ProcessRecord) -> Vec<String> {
    let fields = [
        ("Command", &record.command),
        ("PID", &record.pid),
        ("User", &record.user),
        ("FD", &record.fd),
        ("Type", &record.kind),
        ("Device", &record.device),
        ("Size/Off", &record.size),
        ("Node", &record.node),
        ("Name", &record.name),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("  {:<10}{}", format!("{}:", label).dimmed(), value))
        .collect()
}

fn human_info(details: &PortDetails) -> String {
    let mut lines = vec![
        heading(details),
        rule(),
        format!("Service:  {}", details.service),
        format!("Status:   {}", status(details)),
    ];

    for (i, record) in details.processes.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Process #{}", i + 1).bold().to_string());
        lines.extend(detail_block(record));
    }

    if !details.in_use {
        lines.push(String::new());
        lines.push(format!("Port {} is available.", details.port));
    }

    lines.join("\n")
}

fn human_whatis(details: &PortDetails) -> String {
    if !details.in_use {
        return format!(
            "{} Port {} is available",
            "✅".green(),
            details.port.to_string().bold()
        );
    }

    let mut lines = vec![format!(
        "Port {} ({}) is used by:",
        details.port.to_string().bold().cyan(),
        details.service
    )];

    for record in &details.processes {
        lines.push(format!(
            "  {} (PID {}) by {} → {}",
            record.command.green().bold(),
            record.pid,
            record.user.yellow(),
            record.name
        ));
    }

    lines.join("\n")
}

fn human_process(report: &ProcessReport, connection_limit: usize) -> String {
    let details = &report.details;
    let Some(record) = report.process() else {
        return format!("No process found on port {}", details.port);
    };

    let mut lines = vec![heading(details), rule()];
    lines.extend(detail_block(record));

    lines.push(String::new());
    lines.push("Process tree:".bold().to_string());
    match &report.tree {
        Some(tree) => lines.extend(tree.lines().map(|l| format!("  {}", l))),
        None => lines.push("  (process no longer exists)".dimmed().to_string()),
    }

    lines.push(String::new());
    lines.push("Connections:".bold().to_string());
    if report.connections.is_empty() {
        lines.push("  (none)".dimmed().to_string());
    } else {
        lines.extend(
            report
                .connections
                .iter()
                .take(connection_limit)
                .map(|c| format!("  {}", c)),
        );
        let hidden = report.connections.len().saturating_sub(connection_limit);
        if hidden > 0 {
            lines.push(format!("  ... and {} more", hidden).dimmed().to_string());
        }
    }

    lines.join("\n")
}

fn human_service(info: &ServiceInfo) -> String {
    let service = if info.known {
        info.service.green().bold().to_string()
    } else {
        format!("{} {}", info.service, "(not in registry)".dimmed())
    };

    [
        format!("Port {}", info.port.to_string().bold().cyan()),
        rule(),
        format!("Service:  {}", service),
        format!("Range:    {} {}", info.range.label(), format!("({})", info.range.note()).dimmed()),
    ]
    .join("\n")
}

fn human_all(entries: &[PortSummaryEntry]) -> String {
    if entries.is_empty() {
        return "No listening ports found.".to_string();
    }

    let mut lines = vec![
        format!(
            "{:<7} {:<10} {:<8} {:<14} {}",
            "PORT", "USER", "PID", "COMMAND", "ADDRESS"
        )
        .bold()
        .to_string(),
        rule(),
    ];

    for entry in entries {
        lines.push(format!(
            "{} {:<10} {:<8} {} {}",
            format!("{:<7}", entry.port).cyan(),
            truncate(&entry.user, USER_WIDTH),
            entry.pid,
            format!("{:<14}", truncate(&entry.command, COMMAND_WIDTH)).green(),
            entry.name
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total: {} ports", entries.len()));
    lines.join("\n")
}

/// Keep at most `max` characters of `s`.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

//! Parsers for `lsof` text output.
//!
//! Both parsers are pure: the same input text always yields the same
//! records. Lines that don't fit the expected shape are dropped.
//!
//! Expected listing format:
//! ```text
//! COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
//! node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{PortSummaryEntry, ProcessRecord};

/// `:<digits>` ending a token, or ending the local side of `local->remote`.
///
/// Requiring the digits to end the token keeps the `:1` inside `[::1]:3000`
/// from being read as the port.
static PORT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\d+)(?:->|\s|$)").expect("port pattern is valid"));

/// Marker lsof appends to the NAME column of listening sockets.
const LISTEN_MARKER: &str = "(LISTEN)";

/// Parse a per-port listing into process records.
///
/// The first line is the column header and is skipped. Each remaining line
/// needs at least nine whitespace-separated columns.
pub fn parse_process_listing(raw: &str) -> Vec<ProcessRecord> {
    let (records, dropped) = listing_with_drops(raw);
    if dropped > 0 {
        debug!(dropped, "Skipped short lsof lines");
    }
    records
}

/// Parse a system-wide listening scan into one entry per matching line.
///
/// The port is the first `:<digits>` that ends a token or precedes `->`,
/// not merely the first colon followed by digits: in `[::1]:3000` the port
/// is 3000, not 1. Lines without such a token, or with a port above 65535,
/// are skipped.
pub fn parse_listening_summary(raw: &str) -> Vec<PortSummaryEntry> {
    let (entries, dropped) = summary_with_drops(raw);
    if dropped > 0 {
        debug!(dropped, "Skipped lsof lines without a port");
    }
    entries
}

/// Records plus the number of non-blank rows that didn't fit.
fn listing_with_drops(raw: &str) -> (Vec<ProcessRecord>, usize) {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split_whitespace().collect();
        match ProcessRecord::from_columns(&columns) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    (records, dropped)
}

/// Entries plus the number of non-blank lines without a usable port.
///
/// The header line has no port, so it counts as dropped.
fn summary_with_drops(raw: &str) -> (Vec<PortSummaryEntry>, usize) {
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines().filter(|l| !l.trim().is_empty()) {
        match parse_summary_line(line) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    (entries, dropped)
}

fn parse_summary_line(line: &str) -> Option<PortSummaryEntry> {
    let caps = PORT_TOKEN.captures(line)?;
    let port: u16 = caps[1].parse().ok()?;

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let field = |i: usize| tokens.get(i).map(|s| s.to_string()).unwrap_or_default();

    let name = tokens
        .iter()
        .position(|t| *t == LISTEN_MARKER)
        .and_then(|i| i.checked_sub(1))
        .map(|i| tokens[i].to_string())
        .unwrap_or_default();

    Some(PortSummaryEntry {
        port,
        command: field(0),
        pid: field(1),
        user: field(2),
        name,
    })
}

/// Drop the header line of a listing and return the rest verbatim.
pub fn listing_rows(raw: &str) -> Vec<String> {
    raw.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

//! Block-aware CSV scanner for launch monitor exports.
//!
//! Exports may carry preamble lines, several header/data blocks and
//! "Average" summary rows. Header rows are recognized by content, not
//! position, and each block runs until a blank row or a summary row.

use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::error::{Result, ShotError};
use crate::monitors::LaunchMonitor;
use crate::shot::ProcessedShot;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(club type|total distance|side carry)").expect("valid header pattern")
});

/// Counters collected while scanning one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub rows: usize,
    pub header_rows: usize,
    pub blocks_closed: usize,
    pub shots: usize,
    pub rows_skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    OutsideBlock,
    InsideBlock,
}

/// Row-at-a-time state machine behind [`scan_records`].
pub struct BlockScanner<'a> {
    monitor: &'a dyn LaunchMonitor,
    headers: Vec<String>,
    state: BlockState,
    shots: Vec<ProcessedShot>,
    stats: ScanStats,
}

impl<'a> BlockScanner<'a> {
    pub fn new(monitor: &'a dyn LaunchMonitor) -> Self {
        Self {
            monitor,
            headers: Vec::new(),
            state: BlockState::OutsideBlock,
            shots: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    /// Feeds one row through the scanner.
    pub fn push_row(&mut self, row: &[&str]) {
        self.stats.rows += 1;

        if row.is_empty() {
            return;
        }

        if is_header(row) {
            self.headers = normalize_headers(row);
            self.state = BlockState::InsideBlock;
            self.stats.header_rows += 1;
            debug!(headers = ?self.headers, "Found headers");
            return;
        }

        if self.state == BlockState::OutsideBlock {
            return;
        }

        if is_terminator(row) {
            self.state = BlockState::OutsideBlock;
            self.stats.blocks_closed += 1;
            return;
        }

        match self.monitor.parse_row(row, &self.headers) {
            Ok(raw) => {
                self.shots.push(self.monitor.process_raw(&raw));
                self.stats.shots += 1;
            }
            Err(e) => {
                self.stats.rows_skipped += 1;
                warn!(row = self.stats.rows, error = %e, "Skipping row");
            }
        }
    }

    /// Shots collected so far, with the scan counters.
    pub fn finish(self) -> (Vec<ProcessedShot>, ScanStats) {
        (self.shots, self.stats)
    }
}

/// Scans CSV records into shots using `monitor`.
///
/// # Errors
///
/// Returns [`ShotError::MalformedRow`] if the reader fails and
/// [`ShotError::NoValidData`] if no shot was produced.
pub fn scan_records<I>(records: I, monitor: &dyn LaunchMonitor) -> Result<Vec<ProcessedShot>>
where
    I: IntoIterator<Item = std::result::Result<StringRecord, csv::Error>>,
{
    let mut scanner = BlockScanner::new(monitor);
    for record in records {
        let record = record?;
        let row: Vec<&str> = record.iter().collect();
        scanner.push_row(&row);
    }

    let (shots, stats) = scanner.finish();
    info!(
        monitor = monitor.name(),
        rows = stats.rows,
        header_rows = stats.header_rows,
        blocks_closed = stats.blocks_closed,
        shots = stats.shots,
        rows_skipped = stats.rows_skipped,
        "Scan complete"
    );

    if shots.is_empty() {
        return Err(ShotError::NoValidData);
    }
    Ok(shots)
}

/// Scans CSV text from any reader.
pub fn parse_shots<R: Read>(
    reader: R,
    monitor: &dyn LaunchMonitor,
) -> Result<Vec<ProcessedShot>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    scan_records(csv_reader.records(), monitor)
}

/// Opens `path` and scans it into shots.
#[tracing::instrument(
    skip(path, monitor),
    fields(path = %path.display(), monitor = monitor.name())
)]
pub fn parse_shot_file(path: &Path, monitor: &dyn LaunchMonitor) -> Result<Vec<ProcessedShot>> {
    let file = File::open(path).map_err(|e| ShotError::io("open", path, e))?;
    parse_shots(file, monitor)
}

fn is_header(row: &[&str]) -> bool {
    row.iter().any(|cell| HEADER_PATTERN.is_match(cell))
}

fn normalize_headers(row: &[&str]) -> Vec<String> {
    row.iter().map(|h| h.trim().to_lowercase()).collect()
}

/// A blank row or an "Average" summary row ends the current block.
fn is_terminator(row: &[&str]) -> bool {
    let blank = row.iter().all(|cell| cell.trim().is_empty());
    let summary = row
        .first()
        .is_some_and(|first| first.to_lowercase().starts_with("average"));
    blank || summary
}

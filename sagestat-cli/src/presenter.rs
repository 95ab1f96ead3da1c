//! Report presenter
//!
//! Turns pipeline records into a bordered console table:
//!
//! ```text
//! +-------------+--------+----------------------------+----------------------------+------------------+
//! | Name        | Status | Last Modified Time         | Last Execution Time        | Execution Status |
//! +-------------+--------+----------------------------+----------------------------+------------------+
//! | train-model | Active | 2024-05-01 10:00:00 +02:00 | 2024-05-01 11:00:00 +02:00 | Succeeded        |
//! +-------------+--------+----------------------------+----------------------------+------------------+
//! ```
//!
//! Column widths are measured on the plain text and cells are padded before
//! they are highlighted, so escape sequences never break the alignment.

use chrono::{DateTime, Local};
use colored::*;
use sagestat_core::domain::execution::ExecutionStatus;
use sagestat_core::domain::pipeline::PipelineRecord;
use std::io::{self, Write};

/// Column titles, in display order
pub const HEADERS: [&str; 5] = [
    "Name",
    "Status",
    "Last Modified Time",
    "Last Execution Time",
    "Execution Status",
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Background highlight applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Success,
    Progress,
    Failure,
    /// Pipeline definition status
    Info,
    None,
}

impl Highlight {
    /// Highlight for an execution status cell
    pub fn for_execution(status: &ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Succeeded => Highlight::Success,
            ExecutionStatus::Executing => Highlight::Progress,
            ExecutionStatus::Failed => Highlight::Failure,
            ExecutionStatus::Other(_) => Highlight::None,
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Highlight::Success => text.on_green(),
            Highlight::Progress | Highlight::Info => text.on_blue(),
            Highlight::Failure => text.on_red(),
            Highlight::None => text.normal(),
        }
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub highlight: Highlight,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: Highlight::None,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Map a record to its display row
pub fn row(record: &PipelineRecord) -> [Cell; 5] {
    let execution_status = ExecutionStatus::parse(record.last_execution_status());

    [
        Cell::plain(record.name.as_str()),
        Cell {
            text: record.status.clone(),
            highlight: Highlight::Info,
        },
        Cell::plain(format_time(Some(record.last_modified_time))),
        Cell::plain(format_time(record.last_execution_time())),
        Cell {
            highlight: Highlight::for_execution(&execution_status),
            text: execution_status.to_string(),
        },
    ]
}

/// Blank for a missing timestamp, never a zero value
fn format_time(time: Option<DateTime<Local>>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Render the report table
///
/// # Arguments
/// * `records` - Pipeline records in display order
/// * `color` - Whether highlights are applied
/// * `out` - Destination of the table
pub fn render<W: Write>(records: &[PipelineRecord], color: bool, out: &mut W) -> io::Result<()> {
    let header = HEADERS.map(|title| Cell::plain(title));
    let rows: Vec<[Cell; 5]> = records.iter().map(row).collect();

    let mut widths = header.each_ref().map(Cell::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = rule(&widths);
    writeln!(out, "{}", border)?;
    write_row(out, &header, &widths, false)?;
    writeln!(out, "{}", border)?;
    for row in &rows {
        write_row(out, row, &widths, color)?;
    }
    writeln!(out, "{}", border)?;

    out.flush()
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_row<W: Write>(out: &mut W, cells: &[Cell], widths: &[usize], color: bool) -> io::Result<()> {
    write!(out, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        let padded = format!("{:<width$}", cell.text, width = width);
        if color && cell.highlight != Highlight::None {
            // Only the text is painted, not the trailing padding
            let (text, padding) = padded.split_at(cell.text.len());
            write!(out, " {}{} |", cell.highlight.paint(text), padding)?;
        } else {
            write!(out, " {} |", padded)?;
        }
    }
    writeln!(out)
}

//! Pass reporting
//!
//! A fold pass never fails over an empty result set, so its outcome is a
//! set of counters rather than a diagnostic list: how many rows were
//! examined, how many changed, and how much was removed. The CLI prints
//! these to stderr; batch mode sums them across files.

use std::fmt;

/// Counters for one fold pass (or a sum of passes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldReport {
    /// Rows examined inside the configured scope
    pub rows_scanned: usize,
    /// Rows in which at least one cell was removed
    pub rows_folded: usize,
    /// Empty cells removed from the document
    pub cells_removed: usize,
    /// Surviving cells whose span count grew
    pub spans_widened: usize,
}

impl FoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the pass left the document untouched
    pub fn is_noop(&self) -> bool {
        self.cells_removed == 0 && self.spans_widened == 0
    }

    /// Fold another report's counters into this one (batch totals)
    pub fn absorb(&mut self, other: &FoldReport) {
        self.rows_scanned += other.rows_scanned;
        self.rows_folded += other.rows_folded;
        self.cells_removed += other.cells_removed;
        self.spans_widened += other.spans_widened;
    }
}

impl fmt::Display for FoldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} row(s) folded, {} cell(s) removed ({} row(s) scanned)",
            self.rows_folded, self.cells_removed, self.rows_scanned
        )
    }
}

/// Format a report for terminal output with optional color coding
pub fn format_report(report: &FoldReport, use_color: bool) -> String {
    let (green, yellow, reset) = if use_color {
        ("\x1b[32m", "\x1b[33m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    if report.is_noop() {
        format!(
            "{}✓ no empty-cell runs to fold{} ({} row(s) scanned)",
            green, reset, report.rows_scanned
        )
    } else {
        format!(
            "{}⚠ folded {} row(s){}: {} cell(s) removed, {} span(s) widened ({} row(s) scanned)",
            yellow,
            report.rows_folded,
            reset,
            report.cells_removed,
            report.spans_widened,
            report.rows_scanned
        )
    }
}

//! Table-cell collapsing pass
//!
//! Post-processes rendered documentation HTML: within content-marked
//! regions, horizontal runs of empty table cells are folded into the
//! preceding cell by widening its column span.
//!
//! # Architecture
//!
//! ```text
//! HTML -> parse -> row selection (scope) -> fold plan -> tree mutation -> serialize
//! ```
//!
//! The pass mutates the parsed tree in place and is idempotent: folded
//! cells are removed outright, so a second run finds nothing left to do.
//!
//! # Example
//!
//! ```rust
//! use cellfold::{fold_html, FoldOptions};
//!
//! let html = r#"<div class="document"><table><tr>
//!   <td>EMAIL_BACKEND</td><td></td><td>required</td>
//! </tr></table></div>"#;
//!
//! let folded = fold_html(html, &FoldOptions::default()).unwrap();
//! assert!(folded.contains(r#"<td colspan="2">EMAIL_BACKEND</td>"#));
//! ```

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use crate::core::scope;
use crate::utils::error::{FoldError, FoldResult};
use crate::utils::report::FoldReport;

mod plan;

#[cfg(test)]
mod tests;

// Re-export public API
pub use plan::{fold_row, FoldedCell};

/// Options controlling a fold pass
#[derive(Debug, Clone)]
pub struct FoldOptions {
    /// Content marker classes; rows outside them are never touched
    pub scope_classes: Vec<String>,
    /// Process every table, ignoring content markers
    pub all_tables: bool,
}

impl Default for FoldOptions {
    fn default() -> Self {
        FoldOptions {
            scope_classes: scope::DEFAULT_SCOPE_CLASSES.clone(),
            all_tables: false,
        }
    }
}

impl FoldOptions {
    /// Options that fold every table on the page
    pub fn unscoped() -> Self {
        FoldOptions {
            scope_classes: Vec::new(),
            all_tables: true,
        }
    }

    /// Options scoped to the given marker classes only
    pub fn scoped_to(classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        FoldOptions {
            scope_classes: classes.into_iter().map(Into::into).collect(),
            all_tables: false,
        }
    }
}

/// Fold a parsed document in place
///
/// The document is externally owned; this pass only detaches empty cells
/// and widens the spans of their survivors. Rows without an empty data
/// cell are left untouched, as is everything outside the scope markers.
pub fn fold_document(document: &NodeRef, options: &FoldOptions) -> FoldResult<FoldReport> {
    let mut report = FoldReport::new();

    let selector = match scope::row_selector(&options.scope_classes, options.all_tables)? {
        Some(selector) => selector,
        None => return Ok(report),
    };

    // Collect before mutating; detaching cells must not race the
    // selector's descendant walk.
    let rows: Vec<NodeRef> = document
        .select(&selector)
        .map_err(|()| FoldError::selector(&selector))?
        .map(|row| row.as_node().clone())
        .collect();

    for row in &rows {
        fold_row_node(row, &mut report);
    }

    Ok(report)
}

/// Parse, fold, and serialize an HTML string
pub fn fold_html(html: &str, options: &FoldOptions) -> FoldResult<String> {
    fold_html_with_report(html, options).map(|(folded, _)| folded)
}

/// Parse, fold, and serialize an HTML string, returning the pass report
pub fn fold_html_with_report(
    html: &str,
    options: &FoldOptions,
) -> FoldResult<(String, FoldReport)> {
    let document = kuchiki::parse_html().one(html);
    let report = fold_document(&document, options)?;
    let folded = serialize_document(&document)?;
    Ok((folded, report))
}

/// Check whether a fold pass would change the document
///
/// Runs the pass against a throwaway parse of the input; the input itself
/// is not touched.
pub fn needs_fold(html: &str, options: &FoldOptions) -> FoldResult<bool> {
    let document = kuchiki::parse_html().one(html);
    let report = fold_document(&document, options)?;
    Ok(!report.is_noop())
}

/// Serialize a document tree back to HTML
pub fn serialize_document(document: &NodeRef) -> FoldResult<String> {
    let mut bytes = Vec::new();
    document
        .serialize(&mut bytes)
        .map_err(|e| FoldError::serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FoldError::serialize(e.to_string()))
}

/// Fold one row in place, updating the pass counters
fn fold_row_node(row: &NodeRef, report: &mut FoldReport) {
    report.rows_scanned += 1;

    let cells = data_cells(row);
    let empties: Vec<bool> = cells.iter().map(is_empty_cell).collect();

    // Selection predicate: the row must contain at least one empty cell
    if !empties.iter().any(|&empty| empty) {
        return;
    }

    let mut removed_in_row = 0;
    for folded in fold_row(&empties) {
        if folded.span == 1 {
            continue;
        }

        let keeper = &cells[folded.index];
        let absorbed = folded.span - 1;
        set_cell_span(keeper, cell_span(keeper) + absorbed);
        for cell in &cells[folded.index + 1..folded.index + folded.span] {
            cell.detach();
        }

        report.spans_widened += 1;
        removed_in_row += absorbed;
    }

    if removed_in_row > 0 {
        report.rows_folded += 1;
        report.cells_removed += removed_in_row;
    }
}

/// The row's data cells, in order
///
/// Walks the row's children and keeps only `td` elements; header cells,
/// comments, and whitespace text between cells are neither barriers nor
/// fold candidates.
fn data_cells(row: &NodeRef) -> Vec<NodeRef> {
    row.children()
        .filter(|child| {
            child
                .as_element()
                .map_or(false, |el| &*el.name.local == "td")
        })
        .collect()
}

/// Content state of a cell
///
/// Empty means no element children and whitespace-only text. A cell whose
/// only content is an image or other markup still counts as content.
fn is_empty_cell(cell: &NodeRef) -> bool {
    let has_element_child = cell.children().any(|child| child.as_element().is_some());
    !has_element_child && cell.text_contents().trim().is_empty()
}

/// Current span count of a cell (absent or unparsable attribute is 1)
fn cell_span(cell: &NodeRef) -> usize {
    cell.as_element()
        .and_then(|el| {
            let attributes = el.attributes.borrow();
            attributes
                .get("colspan")
                .and_then(|value| value.trim().parse::<usize>().ok())
        })
        .filter(|&span| span >= 1)
        .unwrap_or(1)
}

fn set_cell_span(cell: &NodeRef, span: usize) {
    if let Some(el) = cell.as_element() {
        el.attributes
            .borrow_mut()
            .insert("colspan", span.to_string());
    }
}

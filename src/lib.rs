//! # cellfold
//!
//! Post-processor for rendered documentation HTML that collapses
//! horizontal runs of empty table cells into the preceding cell's column
//! span.
//!
//! Settings-reference tables rendered from reStructuredText often carry
//! rows where only the first column has content; the remaining cells are
//! emitted empty. Folding those runs into one spanned cell lets the
//! filled cell use the whole row width instead of leaving a ragged grid.
//!
//! ## Features
//!
//! - **In-place tree mutation**: cells are detached and spans widened on
//!   the parsed document, never rebuilt
//! - **Scoped**: only tables inside documentation content markers are
//!   touched; unrelated tables survive untouched
//! - **Idempotent**: folded cells are gone, so re-running is a no-op
//! - **Reported**: every pass returns counters for rows scanned/folded
//!   and cells removed
//! - **CLI**: single files, stdin/stdout pipelines, and batch directories
//! - **WASM Support**: compiles to WebAssembly for in-browser use
//!
//! ## Usage Examples
//!
//! ### Folding a rendered page
//!
//! ```rust
//! let html = r#"<div class="rst-content"><table>
//!   <tr><td>MAILGUN_API_KEY</td><td></td><td></td><td>required</td></tr>
//! </table></div>"#;
//!
//! let folded = cellfold::collapse_html(html);
//! assert!(folded.contains(r#"<td colspan="3">MAILGUN_API_KEY</td>"#));
//! ```
//!
//! ### Scope isolation
//!
//! ```rust
//! // No content marker, no mutation
//! let plain = "<table><tr><td>A</td><td></td></tr></table>";
//! let output = cellfold::collapse_html(plain);
//! assert!(!output.contains("colspan"));
//! ```

/// Core folding modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core folding functions
pub use crate::core::collapse;
pub use crate::core::collapse::{
    fold_document, fold_html, fold_html_with_report, fold_row, needs_fold, serialize_document,
    FoldOptions, FoldedCell,
};
pub use crate::core::scope::{is_valid_class, row_selector, DEFAULT_SCOPE_CLASSES};
pub use crate::core::trigger::{DocumentReadiness, FoldTrigger, TriggerState};

// Re-export utilities
pub use crate::utils::error::{FoldError, FoldResult};
pub use crate::utils::report::{format_report, FoldReport};

/// Collapse empty table cells in a rendered HTML page
///
/// Best-effort with the default scope: on the (unreachable with default
/// options) error paths the input is returned unchanged, matching the
/// cosmetic, no-failure-path nature of the pass.
pub fn collapse_html(html: &str) -> String {
    collapse_html_with_options(html, &FoldOptions::default())
        .unwrap_or_else(|_| html.to_string())
}

/// Collapse empty table cells with custom options
pub fn collapse_html_with_options(html: &str, options: &FoldOptions) -> FoldResult<String> {
    fold_html(html, options)
}

/// Collapse empty table cells and return the pass report alongside
pub fn collapse_html_with_report(
    html: &str,
    options: &FoldOptions,
) -> FoldResult<(String, FoldReport)> {
    fold_html_with_report(html, options)
}

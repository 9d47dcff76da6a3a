//! Core folding modules
//!
//! This module contains the folding pass and its supporting pieces:
//! - `collapse`: the table-cell collapsing pass over a parsed document
//! - `scope`: content-area markers and row-selector construction
//! - `trigger`: readiness-gated single-shot execution

pub mod collapse;
pub mod scope;
pub mod trigger;

// Re-export main types and functions from collapse
pub use collapse::{
    fold_document, fold_html, fold_html_with_report, fold_row, needs_fold, serialize_document,
    FoldOptions, FoldedCell,
};

// Re-export scoping and trigger types
pub use scope::{is_valid_class, row_selector, DEFAULT_SCOPE_CLASSES};
pub use trigger::{DocumentReadiness, FoldTrigger, TriggerState};

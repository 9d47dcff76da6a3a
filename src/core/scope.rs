//! Content-area scoping
//!
//! Folding is restricted to rows inside elements that carry a
//! documentation content marker class, so unrelated tables on the same
//! page are never mutated. This module owns the default marker set and
//! turns a marker list into the row selector the pass walks.

use lazy_static::lazy_static;

use crate::utils::error::{FoldError, FoldResult};

lazy_static! {
    /// Content-area marker classes recognized by default: the docutils
    /// writer (`document`), the Sphinx basic theme (`body`), and the
    /// Read the Docs theme (`rst-content`).
    pub static ref DEFAULT_SCOPE_CLASSES: Vec<String> = vec![
        "rst-content".to_string(),
        "document".to_string(),
        "body".to_string(),
    ];
}

/// Check that a marker class can be interpolated into a CSS selector
///
/// Accepts the usual class-name charset (ASCII letters, digits, `-`, `_`)
/// with a non-digit first character. Anything else is rejected before it
/// reaches the selector engine, so the caller gets an error naming the
/// offending class instead of a silent match failure.
pub fn is_valid_class(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Build the row selector for a fold pass
///
/// Returns `Ok(None)` when scoping is on but the marker list is empty:
/// nothing is in scope, and the pass is a no-op rather than an error.
pub fn row_selector(scope_classes: &[String], all_tables: bool) -> FoldResult<Option<String>> {
    if all_tables {
        return Ok(Some("tr".to_string()));
    }
    if scope_classes.is_empty() {
        return Ok(None);
    }

    for class in scope_classes {
        if !is_valid_class(class) {
            return Err(FoldError::selector(class));
        }
    }

    let parts: Vec<String> = scope_classes
        .iter()
        .map(|class| format!(".{} tr", class))
        .collect();
    Ok(Some(parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_class_names() {
        assert!(is_valid_class("rst-content"));
        assert!(is_valid_class("document"));
        assert!(is_valid_class("_private"));
        assert!(is_valid_class("-theme"));
        assert!(is_valid_class("col2"));
    }

    #[test]
    fn test_invalid_class_names() {
        assert!(!is_valid_class(""));
        assert!(!is_valid_class("2col"));
        assert!(!is_valid_class("a b"));
        assert!(!is_valid_class("a.b"));
        assert!(!is_valid_class("a>tr"));
    }

    #[test]
    fn test_default_selector() {
        let selector = row_selector(&DEFAULT_SCOPE_CLASSES, false).unwrap();
        assert_eq!(
            selector.as_deref(),
            Some(".rst-content tr, .document tr, .body tr")
        );
    }

    #[test]
    fn test_all_tables_ignores_markers() {
        let selector = row_selector(&DEFAULT_SCOPE_CLASSES, true).unwrap();
        assert_eq!(selector.as_deref(), Some("tr"));
    }

    #[test]
    fn test_empty_scope_is_no_scope() {
        let selector = row_selector(&[], false).unwrap();
        assert_eq!(selector, None);
    }

    #[test]
    fn test_bad_class_is_reported() {
        let classes = vec!["ok".to_string(), "not ok".to_string()];
        let err = row_selector(&classes, false).unwrap_err();
        assert!(err.to_string().contains("not ok"));
    }
}

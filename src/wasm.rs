//! WASM bindings for cellfold
//!
//! This module exposes the folding pass to JavaScript so it can run in
//! the environment the behavior originally lived in: the browser.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Fold options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct WasmFoldOptions {
    /// Content marker classes; empty means the built-in defaults
    #[serde(default)]
    pub scope_classes: Vec<String>,
    /// Process every table, ignoring content markers
    #[serde(default)]
    pub all_tables: bool,
}

/// Fold result with pass metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmFoldResult {
    /// The folded document
    pub output: String,
    /// Whether the pass ran
    pub success: bool,
    /// Error message if the pass could not run
    pub error: Option<String>,
    /// Rows in which at least one cell was removed
    pub rows_folded: usize,
    /// Empty cells removed
    pub cells_removed: usize,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Collapse empty table cells with the default documentation scope
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn collapse_html(html: &str) -> String {
    crate::collapse_html(html)
}

/// Collapse empty table cells with options, returning a result object
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn collapse_html_with_options(html: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let wasm_options: WasmFoldOptions = if options.is_undefined() || options.is_null() {
        WasmFoldOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let mut fold_options = crate::FoldOptions::default();
    if !wasm_options.scope_classes.is_empty() {
        fold_options.scope_classes = wasm_options.scope_classes;
    }
    fold_options.all_tables = wasm_options.all_tables;

    let result = match crate::collapse_html_with_report(html, &fold_options) {
        Ok((output, report)) => WasmFoldResult {
            output,
            success: true,
            error: None,
            rows_folded: report.rows_folded,
            cells_removed: report.cells_removed,
        },
        Err(e) => WasmFoldResult {
            output: html.to_string(),
            success: false,
            error: Some(e.to_string()),
            rows_folded: 0,
            cells_removed: 0,
        },
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

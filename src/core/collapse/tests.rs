//! Regression tests for the document folding pass

use super::*;

fn fold_default(html: &str) -> String {
    fold_html(html, &FoldOptions::default()).unwrap()
}

fn in_document(rows: &str) -> String {
    format!(
        r#"<div class="document"><table>{}</table></div>"#,
        rows
    )
}

fn td_count(html: &str) -> usize {
    html.matches("<td").count()
}

#[test]
fn test_run_folds_into_preceding_cell() {
    // [A, "", "", B] -> [A(span 3), B]
    let output = fold_default(&in_document(
        "<tr><td>A</td><td></td><td></td><td>B</td></tr>",
    ));

    assert!(output.contains(r#"<td colspan="3">A</td>"#));
    assert!(output.contains("<td>B</td>"));
    assert_eq!(td_count(&output), 2);
}

#[test]
fn test_row_without_empty_cells_is_untouched() {
    let output = fold_default(&in_document("<tr><td>X</td><td>Y</td><td>Z</td></tr>"));

    assert!(!output.contains("colspan"));
    assert_eq!(td_count(&output), 3);
}

#[test]
fn test_all_empty_row_folds_into_first_cell() {
    let output = fold_default(&in_document(
        "<tr><td></td><td></td><td></td><td></td></tr>",
    ));

    assert!(output.contains(r#"<td colspan="4"></td>"#));
    assert_eq!(td_count(&output), 1);
}

#[test]
fn test_leading_empty_cell_survives_as_span_start() {
    // ["", "", C]: the first cell is never removed; it absorbs the empty
    // cell following it, and C is unaffected
    let output = fold_default(&in_document("<tr><td></td><td></td><td>C</td></tr>"));

    assert!(output.contains(r#"<td colspan="2"></td>"#));
    assert!(output.contains("<td>C</td>"));
    assert_eq!(td_count(&output), 2);
}

#[test]
fn test_multiple_runs_in_one_row() {
    let output = fold_default(&in_document(
        "<tr><td>A</td><td></td><td>B</td><td></td><td></td><td>C</td></tr>",
    ));

    assert!(output.contains(r#"<td colspan="2">A</td>"#));
    assert!(output.contains(r#"<td colspan="3">B</td>"#));
    assert!(output.contains("<td>C</td>"));
    assert_eq!(td_count(&output), 3);
}

#[test]
fn test_idempotent() {
    let input = in_document(
        "<tr><td>A</td><td></td><td>B</td></tr><tr><td></td><td></td><td></td></tr>",
    );

    let once = fold_default(&input);
    let twice = fold_default(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_unmarked_table_is_out_of_scope() {
    let input = "<table><tr><td>A</td><td></td><td></td></tr></table>";
    let output = fold_default(input);

    assert!(!output.contains("colspan"));
    assert_eq!(td_count(&output), 3);
}

#[test]
fn test_all_tables_override() {
    let input = "<table><tr><td>A</td><td></td><td></td></tr></table>";
    let output = fold_html(input, &FoldOptions::unscoped()).unwrap();

    assert!(output.contains(r#"<td colspan="3">A</td>"#));
    assert_eq!(td_count(&output), 1);
}

#[test]
fn test_custom_scope_class() {
    let html = concat!(
        r#"<div class="api-docs"><table><tr><td>A</td><td></td></tr></table></div>"#,
        r#"<div class="changelog"><table><tr><td>B</td><td></td></tr></table></div>"#,
    );
    let options = FoldOptions::scoped_to(["api-docs"]);
    let output = fold_html(html, &options).unwrap();

    assert!(output.contains(r#"<td colspan="2">A</td>"#));
    // The changelog table is outside the configured scope
    assert!(output.contains("<td>B</td>"));
    assert_eq!(td_count(&output), 3);
}

#[test]
fn test_header_cells_are_skipped_not_barriers() {
    // The sibling walk only matches data cells; the th is neither removed
    // nor widened, and does not stop a run from folding
    let output = fold_default(&in_document(
        "<tr><th>Setting</th><td>A</td><td></td></tr>",
    ));

    assert!(output.contains("<th>Setting</th>"));
    assert!(output.contains(r#"<td colspan="2">A</td>"#));
    assert_eq!(td_count(&output), 1);
}

#[test]
fn test_header_only_row_is_ignored() {
    let output = fold_default(&in_document("<tr><th></th><th></th></tr>"));

    assert!(!output.contains("colspan"));
    assert_eq!(output.matches("<th").count(), 2);
}

#[test]
fn test_existing_span_is_widened_not_reset() {
    let output = fold_default(&in_document(
        r#"<tr><td colspan="2">wide</td><td></td><td>B</td></tr>"#,
    ));

    assert!(output.contains(r#"<td colspan="3">wide</td>"#));
    assert_eq!(td_count(&output), 2);
}

#[test]
fn test_unparsable_span_counts_as_one() {
    let output = fold_default(&in_document(
        r#"<tr><td colspan="wat">A</td><td></td></tr>"#,
    ));

    assert!(output.contains(r#"<td colspan="2">A</td>"#));
}

#[test]
fn test_whitespace_only_cell_is_empty() {
    let output = fold_default(&in_document("<tr><td>A</td><td> \n\t </td></tr>"));

    assert!(output.contains(r#"<td colspan="2">A</td>"#));
    assert_eq!(td_count(&output), 1);
}

#[test]
fn test_cell_with_markup_is_not_empty() {
    // An image-only cell has no text but still carries content
    let output = fold_default(&in_document(
        r#"<tr><td>A</td><td><img src="tick.png"></td></tr>"#,
    ));

    assert!(!output.contains("colspan"));
    assert_eq!(td_count(&output), 2);
}

#[test]
fn test_rows_in_nested_marker_fold_once() {
    // docutils wraps the RTD content area in its own document div; a row
    // matched by both markers must still fold exactly once
    let html = concat!(
        r#"<div class="rst-content"><div class="document">"#,
        "<table><tr><td>A</td><td></td></tr></table>",
        "</div></div>",
    );
    let (output, report) = fold_html_with_report(html, &FoldOptions::default()).unwrap();

    assert!(output.contains(r#"<td colspan="2">A</td>"#));
    assert_eq!(report.rows_scanned, 1);
    assert_eq!(report.cells_removed, 1);
}

#[test]
fn test_report_counters() {
    let html = in_document(concat!(
        "<tr><td>A</td><td></td><td></td></tr>",
        "<tr><td>B</td><td>C</td><td>D</td></tr>",
        "<tr><td></td><td></td><td>E</td></tr>",
    ));
    let (_, report) = fold_html_with_report(&html, &FoldOptions::default()).unwrap();

    assert_eq!(report.rows_scanned, 3);
    assert_eq!(report.rows_folded, 2);
    assert_eq!(report.cells_removed, 3);
    assert_eq!(report.spans_widened, 2);
}

#[test]
fn test_needs_fold() {
    let foldable = in_document("<tr><td>A</td><td></td></tr>");
    let clean = in_document("<tr><td>A</td><td>B</td></tr>");

    assert!(needs_fold(&foldable, &FoldOptions::default()).unwrap());
    assert!(!needs_fold(&clean, &FoldOptions::default()).unwrap());
}

#[test]
fn test_document_without_tables_is_a_noop() {
    let (output, report) =
        fold_html_with_report("<p>no tables here</p>", &FoldOptions::default()).unwrap();

    assert!(output.contains("no tables here"));
    assert!(report.is_noop());
    assert_eq!(report.rows_scanned, 0);
}

#[test]
fn test_bad_scope_class_is_an_error() {
    let options = FoldOptions::scoped_to(["not a class"]);
    let err = fold_html("<table></table>", &options).unwrap_err();

    assert!(err.to_string().contains("not a class"));
}

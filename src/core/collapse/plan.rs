//! Fold planning over a row's cell-emptiness sequence
//!
//! The merge decision is computed as an explicit transform over the row's
//! cell list before any tree mutation happens, so the span-start walk can
//! be exercised without a document.

/// One surviving cell after folding
///
/// `index` is the cell's position in the original row; `span` is the
/// number of source cells folded into it (1 means the cell is untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedCell {
    pub index: usize,
    pub span: usize,
}

/// Plan the fold for one row
///
/// `empties[i]` is the content state of the row's i-th data cell. The walk
/// starts with the row's first cell as the span-start, regardless of its
/// own content state. Every empty cell directly following the current
/// span-start folds into it; the next non-empty cell then becomes the new
/// span-start. The first cell is never folded away, even when empty.
pub fn fold_row(empties: &[bool]) -> Vec<FoldedCell> {
    let mut plan = Vec::new();
    let mut start = 0;

    while start < empties.len() {
        let mut next = start + 1;
        while next < empties.len() && empties[next] {
            next += 1;
        }
        plan.push(FoldedCell {
            index: start,
            span: next - start,
        });
        start = next;
    }

    plan
}

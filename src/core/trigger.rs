//! Readiness-gated execution
//!
//! The pass runs once per document, when the document's structural content
//! is available. In the browser this was a "content loaded" callback; here
//! it is an explicit two-state lifecycle gated by an external readiness
//! signal. Arming against an already-ready document executes synchronously;
//! arming against a loading one defers until the readiness notification,
//! and any notification after the first is ignored.

use kuchiki::NodeRef;

use crate::core::collapse::{fold_document, FoldOptions};
use crate::utils::error::FoldResult;
use crate::utils::report::FoldReport;

/// Readiness of the document's structural content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentReadiness {
    /// Structural content not yet available
    Loading,
    /// Content available; the pass may run synchronously
    Ready,
}

/// Lifecycle of a single-shot pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Waiting for the readiness notification
    Pending,
    /// The pass has run; further notifications are no-ops
    Executed,
}

/// A single-shot fold pass gated on document readiness
#[derive(Debug)]
pub struct FoldTrigger {
    options: FoldOptions,
    state: TriggerState,
}

impl FoldTrigger {
    pub fn new(options: FoldOptions) -> Self {
        FoldTrigger {
            options,
            state: TriggerState::Pending,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Register the pass against a document
    ///
    /// Runs immediately when the document is already ready, returning the
    /// pass report; otherwise stays pending until [`notify_ready`] fires.
    ///
    /// [`notify_ready`]: FoldTrigger::notify_ready
    pub fn arm(
        &mut self,
        readiness: DocumentReadiness,
        document: &NodeRef,
    ) -> FoldResult<Option<FoldReport>> {
        match readiness {
            DocumentReadiness::Ready => self.notify_ready(document),
            DocumentReadiness::Loading => Ok(None),
        }
    }

    /// Deliver the readiness notification
    ///
    /// Executes the pass if it is still pending. The trigger fires at most
    /// once per document lifetime; later notifications return `None`.
    pub fn notify_ready(&mut self, document: &NodeRef) -> FoldResult<Option<FoldReport>> {
        if self.state == TriggerState::Executed {
            return Ok(None);
        }

        let report = fold_document(document, &self.options)?;
        self.state = TriggerState::Executed;
        Ok(Some(report))
    }
}

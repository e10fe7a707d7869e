//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use recommend_core::{CandidateForm, CardLayout, Recommendation, RecommendError, RequestTicket, Submission, SubmissionController};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Submission state machine; the results panel renders from it
    pub controller: RwSignal<SubmissionController>,
    /// Card layout chosen by config
    pub card_layout: CardLayout,
    /// Absolute URL of the recommend endpoint
    pub endpoint: StoredValue<String>,
}

impl AppContext {
    pub fn new(card_layout: CardLayout, endpoint: String) -> Self {
        Self {
            controller: RwSignal::new(SubmissionController::new()),
            card_layout,
            endpoint: StoredValue::new(endpoint),
        }
    }

    /// Reset the panel to loading and start a submission.
    /// `None` once the owning view has been disposed.
    pub fn begin(&self, form: &CandidateForm) -> Option<Submission> {
        self.controller.try_update(|c| c.begin(form))
    }

    /// Apply a finished request; stale tickets are ignored by the controller
    pub fn finish(&self, ticket: RequestTicket, outcome: Result<Vec<Recommendation>, RecommendError>) {
        self.controller.update(|c| {
            c.finish(ticket, outcome);
        });
    }
}

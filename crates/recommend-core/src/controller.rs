//! Submission Controller
//!
//! Owns the results panel state and sequences submissions:
//! `Hidden -> Loading -> {ShowingResults | Error}`, and every new submission
//! goes back to `Loading` whatever came before.
//!
//! Each submission gets a [`RequestTicket`]. Only the newest ticket may finish,
//! so a slow response for an older submission is dropped.

use tracing::{debug, warn};

use crate::api::RecommendationApi;
use crate::error::RecommendError;
use crate::models::{CandidateForm, Recommendation, RecommendationRequest};
use crate::render::{render_results, CardLayout, RenderedResults};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    /// Nothing submitted yet, results container hidden
    #[default]
    Hidden,
    Loading,
    ShowingResults(Vec<Recommendation>),
    Error(RecommendError),
}

/// Monotonic id of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// A submission that has been started but not finished
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: RequestTicket,
    pub request: RecommendationRequest,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    state: UiState,
    latest: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Reset to `Loading` and build the payload for `form`.
    ///
    /// Clears any previous error and results, whatever the prior state.
    pub fn begin(&mut self, form: &CandidateForm) -> Submission {
        self.latest += 1;
        let ticket = RequestTicket(self.latest);
        debug!(ticket = ticket.0, "submission started");
        self.state = UiState::Loading;
        Submission { ticket, request: form.to_request() }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply the outcome of `ticket`. Returns false if a newer submission
    /// superseded it, in which case the state is untouched.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Recommendation>, RecommendError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest, "discarding stale response");
            return false;
        }

        self.state = match outcome {
            Ok(items) => {
                debug!(ticket = ticket.0, count = items.len(), "showing results");
                UiState::ShowingResults(items)
            }
            Err(err) => {
                warn!(ticket = ticket.0, error = ?err, "recommendation request failed");
                UiState::Error(err)
            }
        };
        true
    }

    pub fn is_results_visible(&self) -> bool {
        !matches!(self.state, UiState::Hidden)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    /// `Error: <message>` while in the error state
    pub fn error_text(&self) -> Option<String> {
        match &self.state {
            UiState::Error(err) => Some(err.display_text()),
            _ => None,
        }
    }

    #[cfg(test)]
    fn items(&self) -> &[Recommendation] {
        match &self.state {
            UiState::ShowingResults(items) => items,
            _ => &[],
        }
    }

    /// Cards to show, only once results have arrived
    pub fn rendered(&self, layout: CardLayout) -> Option<RenderedResults> {
        match &self.state {
            UiState::ShowingResults(items) => Some(render_results(items, layout)),
            _ => None,
        }
    }
}

/// Send `submission` and hand back its ticket with the outcome, ready for
/// [`SubmissionController::finish`].
pub async fn run_submission<A>(
    api: &A,
    submission: Submission,
) -> (RequestTicket, Result<Vec<Recommendation>, RecommendError>)
where
    A: RecommendationApi + ?Sized,
{
    let outcome = api.recommend(&submission.request).await;
    (submission.ticket, outcome)
}

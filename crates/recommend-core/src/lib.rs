//! Recommendation Core
//!
//! DOM-free half of the internship finder: request/response models, the
//! submission state machine and the card renderer.

pub mod api;
pub mod controller;
pub mod error;
pub mod format;
pub mod models;
pub mod render;

pub use api::{parse_recommendations, RecommendationApi};
pub use controller::{run_submission, RequestTicket, Submission, SubmissionController, UiState};
pub use error::RecommendError;
pub use models::{CandidateForm, Recommendation, RecommendationRequest};
pub use render::{render_card, render_results, CardBody, CardLayout, RecommendationCard, RenderedResults};

//! UI Components
//!
//! Leptos components for the form and results panel.

mod recommendation_form;
mod results_panel;
mod result_card;

pub use recommendation_form::RecommendationForm;
pub use results_panel::ResultsPanel;
pub use result_card::ResultCard;

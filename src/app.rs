//! Internship Finder App
//!
//! Root component: candidate form above the results panel.

use leptos::prelude::*;

use crate::components::{RecommendationForm, ResultsPanel};
use crate::config::{page_origin, AppConfig};
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let endpoint = config.endpoint(&page_origin());
    tracing::info!(%endpoint, layout = ?config.card_layout, "internship finder mounted");

    // Provide context to all children
    provide_context(AppContext::new(config.card_layout, endpoint));

    view! {
        <main class="container">
            <header class="app-header">
                <h1>"Internship Finder"</h1>
                <p class="subtitle">"Tell us about yourself and we'll match you with internships."</p>
            </header>

            <RecommendationForm />

            <ResultsPanel />
        </main>
    }
}

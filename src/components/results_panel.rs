//! Results Panel Component
//!
//! Loading indicator, error message and the recommendation list. Visibility of
//! each region follows the controller state.

use leptos::prelude::*;
use recommend_core::format::NO_RESULTS;
use recommend_core::RenderedResults;

use super::ResultCard;
use crate::context::AppContext;

fn hidden_unless(visible: bool, class: &'static str) -> String {
    if visible { class.to_string() } else { format!("{} hidden", class) }
}

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controller = ctx.controller;
    let layout = ctx.card_layout;

    view! {
        <section
            id="results-container"
            class=move || hidden_unless(controller.with(|c| c.is_results_visible()), "results-container")
        >
            <h2>"Recommended Internships"</h2>

            <div id="loading" class=move || hidden_unless(controller.with(|c| c.is_loading()), "loading")>
                <div class="spinner"></div>
                <p>"Finding the best matches for you..."</p>
            </div>

            <div
                id="error-message"
                class=move || hidden_unless(controller.with(|c| c.error_text().is_some()), "error-message")
            >
                {move || controller.with(|c| c.error_text()).unwrap_or_default()}
            </div>

            <div id="recommendations" class="recommendations">
                {move || controller.with(|c| c.rendered(layout)).map(|rendered| match rendered {
                    RenderedResults::NoResults => view! {
                        <p class="no-results">{NO_RESULTS}</p>
                    }.into_any(),
                    cards => cards
                        .cards()
                        .iter()
                        .cloned()
                        .map(|card| view! { <ResultCard card=card /> })
                        .collect_view()
                        .into_any(),
                })}
            </div>
        </section>
    }
}

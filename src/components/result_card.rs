//! Result Card Component
//!
//! Lays out one pre-formatted [`RecommendationCard`].

use leptos::prelude::*;
use recommend_core::{CardBody, RecommendationCard};

#[component]
pub fn ResultCard(card: RecommendationCard) -> impl IntoView {
    let RecommendationCard { title, company, location, stipend, body } = card;

    let details = match body {
        CardBody::Details { internship_id, sector } => view! {
            <div class="card-details">
                <p><strong>"Internship ID:"</strong>" "{internship_id}</p>
                <p><strong>"Sector:"</strong>" "{sector}</p>
                <p class="card-stipend">{stipend}</p>
                <p><strong>"Location:"</strong>" "{location}</p>
            </div>
        }.into_any(),
        CardBody::Scored { score, description } => view! {
            <div class="card-details">
                <p class="card-score">"⭐ Match Score: "{score}</p>
                <p>"📍 "{location}</p>
                <p class="card-stipend">"💰 "{stipend}</p>
                <p class="card-description">"📝 "{description}</p>
            </div>
        }.into_any(),
    };

    view! {
        <div class="recommendation-card">
            <div class="card-header">
                <h3>{title}</h3>
                <p class="company">{company}</p>
            </div>
            {details}
        </div>
    }
}

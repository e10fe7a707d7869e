//! Recommendation Form Component
//!
//! Candidate details form. Submitting it never reloads the page; it starts a
//! request through [`AppContext`] instead.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recommend_core::{run_submission, CandidateForm};
use tracing::{info, warn};
use wasm_bindgen::JsCast;

use crate::api::HttpRecommendationApi;
use crate::context::AppContext;

/// Education options (value, label); values match the server's education levels
const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("10th pass", "10th Pass"),
    ("12th pass", "12th Pass"),
    ("diploma", "Diploma"),
    ("ba", "B.A."),
    ("b.sc", "B.Sc."),
    ("b.com", "B.Com."),
    ("bba", "BBA"),
    ("b.tech", "B.Tech."),
    ("b.design", "B.Design"),
    ("b.pharma", "B.Pharma"),
    ("ma", "M.A."),
    ("m.sc", "M.Sc."),
    ("mba", "MBA"),
    ("m.tech", "M.Tech."),
    ("m.pharma", "M.Pharma"),
];

/// Read the four candidate fields from the submitted `<form>`
fn read_form(ev: &web_sys::SubmitEvent) -> Option<CandidateForm> {
    let form = ev.target()?.dyn_into::<web_sys::HtmlFormElement>().ok()?;
    let data = web_sys::FormData::new_with_form(&form).ok()?;
    Some(CandidateForm::from_fields(|name| data.get(name).as_string()))
}

#[component]
pub fn RecommendationForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = read_form(&ev) else {
            warn!("submit event did not come from a readable form");
            return;
        };
        let Some(submission) = ctx.begin(&form) else { return; };
        info!(ticket = ?submission.ticket, "requesting recommendations");

        let api = HttpRecommendationApi::new(ctx.endpoint.get_value());
        spawn_local(async move {
            let (ticket, outcome) = run_submission(&api, submission).await;
            ctx.finish(ticket, outcome);
        });
    };

    view! {
        <form id="recommendation-form" class="recommendation-form" on:submit=on_submit>
            <div class="form-group">
                <label for="education">"Highest Education"</label>
                <select id="education" name="education">
                    {EDUCATION_LEVELS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="skills">"Skills"</label>
                <input
                    type="text"
                    id="skills"
                    name="skills"
                    placeholder="e.g. python, excel, communication"
                />
            </div>

            <div class="form-group">
                <label for="sector_interests">"Sector of Interest"</label>
                <input
                    type="text"
                    id="sector_interests"
                    name="sector_interests"
                    placeholder="e.g. Information Technology"
                />
            </div>

            <div class="form-group">
                <label for="location">"Preferred Location"</label>
                <input type="text" id="location" name="location" placeholder="e.g. Bengaluru" />
            </div>

            <button type="submit" class="submit-btn">"Find Internships"</button>
        </form>
    }
}

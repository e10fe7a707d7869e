//! Results Rendering
//!
//! Projects server items into card view-models. Components only lay these out.

use serde::Deserialize;

use crate::format::{self, NOT_AVAILABLE, NO_COMPANY, NO_DESCRIPTION, NO_TITLE};
use crate::models::Recommendation;

/// Which detail block a card shows under its header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    /// Internship id and sector
    #[default]
    Details,
    /// Match score and description
    Scored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Details { internship_id: String, sector: String },
    Scored { score: String, description: String },
}

/// Display strings for one card, fallbacks already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub stipend: String,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedResults {
    /// Nothing matched; show [`format::NO_RESULTS`] only
    NoResults,
    Cards(Vec<RecommendationCard>),
}

impl RenderedResults {
    pub fn cards(&self) -> &[RecommendationCard] {
        match self {
            RenderedResults::NoResults => &[],
            RenderedResults::Cards(cards) => cards,
        }
    }
}

pub fn render_card(item: &Recommendation, layout: CardLayout) -> RecommendationCard {
    let body = match layout {
        CardLayout::Details => CardBody::Details {
            internship_id: format::or_fallback(item.internship_id.as_deref(), NOT_AVAILABLE),
            sector: format::or_fallback(item.sector.as_deref(), NOT_AVAILABLE),
        },
        CardLayout::Scored => CardBody::Scored {
            score: format::format_score(item.score),
            description: format::or_fallback(item.description.as_deref(), NO_DESCRIPTION),
        },
    };

    RecommendationCard {
        title: format::or_fallback(item.title.as_deref(), NO_TITLE),
        company: format::or_fallback(item.company_name.as_deref(), NO_COMPANY),
        location: format::or_fallback(item.location.as_deref(), NOT_AVAILABLE),
        stipend: format::format_stipend(item.stipend),
        body,
    }
}

/// Render the whole list, replacing whatever was shown before
pub fn render_results(items: &[Recommendation], layout: CardLayout) -> RenderedResults {
    if items.is_empty() {
        return RenderedResults::NoResults;
    }
    RenderedResults::Cards(items.iter().map(|item| render_card(item, layout)).collect())
}

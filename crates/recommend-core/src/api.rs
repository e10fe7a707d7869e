//! Recommendation API seam
//!
//! The controller talks to the server only through [`RecommendationApi`].

use async_trait::async_trait;

use crate::error::RecommendError;
use crate::models::{Recommendation, RecommendationRequest};

/// One-shot recommendation lookup.
///
/// Futures are not `Send`: the browser client runs on the single UI thread.
#[async_trait(?Send)]
pub trait RecommendationApi {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendError>;
}

/// Parse a success body. `null` reads as an empty list.
pub fn parse_recommendations(body: &str) -> Result<Vec<Recommendation>, RecommendError> {
    serde_json::from_str::<Option<Vec<Recommendation>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| RecommendError::MalformedResponse(e.to_string()))
}

//! Recommendation Models
//!
//! Data structures exchanged with the `/recommend` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Values of the candidate form, keyed by the page's field names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateForm {
    pub education: String,
    pub skills: String,
    pub sector_interests: String,
    pub location: String,
}

impl CandidateForm {
    /// Collect the form from a field lookup. Missing fields become empty strings.
    pub fn from_fields<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |name: &str| lookup(name).unwrap_or_default();
        Self {
            education: field("education"),
            skills: field("skills"),
            sector_interests: field("sector_interests"),
            location: field("location"),
        }
    }

    /// Rename the fields into the server's vocabulary
    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            qualification: self.education.clone(),
            skills: self.skills.clone(),
            sector_interested: self.sector_interests.clone(),
            location_interested: self.location.clone(),
        }
    }
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    pub qualification: String,
    pub skills: String,
    pub sector_interested: String,
    pub location_interested: String,
}

/// One internship returned by the server.
///
/// Every field is optional. The server fills missing cells with empty strings
/// and may send ids as numbers, so text fields accept any scalar and numeric
/// fields drop anything that is not a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub internship_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stipend: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    })
}

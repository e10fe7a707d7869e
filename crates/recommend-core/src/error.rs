use thiserror::Error;

/// Failure of a single recommendation request.
///
/// All variants end up in the same error panel; the variant only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// Server answered with a non-2xx status. The status is not shown to the user.
    #[error("Something went wrong with the request.")]
    RequestFailed { status: u16 },
    /// The request never completed
    #[error("{0}")]
    Network(String),
    /// Body was not a JSON list of recommendations
    #[error("{0}")]
    MalformedResponse(String),
}

impl RecommendError {
    /// Text for the error panel
    pub fn display_text(&self) -> String {
        format!("{} {}", crate::format::ERROR_PREFIX, self)
    }
}

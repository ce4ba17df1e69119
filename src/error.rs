use thiserror::Error;

/// Everything that can fail an invocation. All kinds collapse to status 500
/// with `{"error": message}` at the handler boundary; they stay distinct so
/// a transport can tell caller mistakes from downstream failures.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Malformed request body, or model output that failed JSON parsing.
    #[error("{0}")]
    Parse(String),

    /// A required credential is missing from the environment.
    #[error("{0} not configured")]
    Configuration(&'static str),

    /// The action discriminator is not one of the known set.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// The model response contains no locatable JSON array.
    #[error("No valid JSON array found in the response.")]
    Extraction,

    /// Gemini or Supabase reported a failure.
    #[error("{0}")]
    Downstream(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        ProxyError::Downstream(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            ProxyError::UnknownAction("not-a-real-action".to_string()).to_string(),
            "Unknown action: not-a-real-action"
        );
        assert_eq!(
            ProxyError::Configuration("GEMINI_API_KEY").to_string(),
            "GEMINI_API_KEY not configured"
        );
        assert_eq!(
            ProxyError::Configuration("Supabase credentials").to_string(),
            "Supabase credentials not configured"
        );
        assert_eq!(
            ProxyError::Extraction.to_string(),
            "No valid JSON array found in the response."
        );
    }
}

use crate::error::ProxyError;
use std::env::var;

/// Credential for the Gemini API, read fresh on every grouping call.
/// A missing key fails the invocation that needed it, never the process.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, ProxyError> {
        match var("GEMINI_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(ProxyError::Configuration("GEMINI_API_KEY")),
        }
    }
}

/// Supabase REST endpoint and anon key, read fresh on every query call.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self, ProxyError> {
        let url = var("SUPABASE_URL").unwrap_or_default();
        let anon_key = var("SUPABASE_ANON_KEY").unwrap_or_default();

        if url.is_empty() || anon_key.is_empty() {
            return Err(ProxyError::Configuration("Supabase credentials"));
        }

        Ok(Self { url, anon_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // each test touches only its own variables so they can run in parallel

    #[test]
    fn gemini_config_requires_the_api_key() {
        std::env::remove_var("GEMINI_API_KEY");
        let err = GeminiConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "GEMINI_API_KEY not configured");

        std::env::set_var("GEMINI_API_KEY", "");
        assert!(GeminiConfig::from_env().is_err());

        std::env::set_var("GEMINI_API_KEY", "test-key");
        assert_eq!(GeminiConfig::from_env().unwrap().api_key, "test-key");

        std::env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn supabase_config_requires_both_variables() {
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
        let err = SupabaseConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Supabase credentials not configured");

        std::env::set_var("SUPABASE_URL", "https://project.supabase.co");
        assert!(SupabaseConfig::from_env().is_err());

        std::env::set_var("SUPABASE_ANON_KEY", "anon");
        let config = SupabaseConfig::from_env().unwrap();
        assert_eq!(config.url, "https://project.supabase.co");
        assert_eq!(config.anon_key, "anon");

        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
    }
}

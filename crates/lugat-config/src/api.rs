use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Dictionary service endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout, none by default: a hanging request keeps the loading state
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("LUGAT_API_URL").unwrap_or_else(|_| default_base_url());
        let language = env::var("LUGAT_LANGUAGE").unwrap_or_else(|_| default_language());
        let timeout_seconds = env::var("LUGAT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            base_url,
            language,
            timeout_seconds,
        }
    }

    /// Lookup URL for a term, substituted as-is
    pub fn lookup_url(&self, term: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.language,
            term
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timeout_seconds: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_embeds_raw_term() {
        let api = ApiConfig::default();
        assert_eq!(
            api.lookup_url("keyboard"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/keyboard"
        );
        assert_eq!(
            api.lookup_url("ice cream"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice cream"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let api = ApiConfig {
            base_url: "http://localhost:9000/entries/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(api.lookup_url(""), "http://localhost:9000/entries/en/");
    }
}

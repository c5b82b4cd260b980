use std::env;

use business::domain::suggestion::cache::SuggestionCacheConfig;

/// Configuration for the suggestion cache
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub cache_enabled: bool,
    pub cache_ttl_seconds: u64,
}

impl SuggestionConfig {
    /// Load suggestion configuration from environment variables
    ///
    /// Environment variables:
    /// - SUGGESTION_CACHE_ENABLED: Whether result caching is on (default: "true")
    /// - SUGGESTION_CACHE_TTL_SECONDS: Entry lifetime in seconds (default: "3600")
    pub fn from_env() -> Self {
        let cache_enabled = env::var("SUGGESTION_CACHE_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        let cache_ttl_seconds = env::var("SUGGESTION_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            cache_enabled,
            cache_ttl_seconds,
        }
    }

    pub fn cache_config(&self) -> SuggestionCacheConfig {
        SuggestionCacheConfig {
            enabled: self.cache_enabled,
            ttl_seconds: self.cache_ttl_seconds,
        }
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::domain::clock::Clock;

use super::model::{RecipeSuggestion, SuggestionRequest, SuggestionSource};

/// Cache configuration, externally supplied.
#[derive(Debug, Clone)]
pub struct SuggestionCacheConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
}

struct CacheEntry {
    suggestions: Vec<RecipeSuggestion>,
    source: SuggestionSource,
    created_at: DateTime<Utc>,
}

/// In-process TTL cache for computed suggestion lists. Entries are evicted
/// lazily, on the lookup that finds them expired; there is no background
/// sweep and no size bound. The entry keeps the source it was computed with
/// so a hit reports the true origin.
pub struct SuggestionCache {
    config: SuggestionCacheConfig,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl SuggestionCache {
    pub fn new(config: SuggestionCacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Deterministic key over the canonicalized request: ingredient ids and
    /// dietary restrictions sorted, stable JSON field order, full SHA-256.
    /// Requests differing only in list order map to the same key.
    pub fn key(request: &SuggestionRequest) -> String {
        let mut ingredients = request.available_ingredients.clone();
        ingredients.sort_unstable();
        ingredients.dedup();

        let mut restrictions = request.dietary_restrictions.clone();
        restrictions.sort();

        let canonical = json!({
            "ingredients": ingredients,
            "max_prep_time": request.max_prep_time,
            "max_cook_time": request.max_cook_time,
            "difficulty": request.difficulty.as_ref().map(|d| d.to_string()),
            "dietary_restrictions": restrictions,
        });

        let digest = Sha256::digest(canonical.to_string().as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Returns the cached list and its source, or `None` for a miss. An
    /// expired entry counts as a miss and is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<(Vec<RecipeSuggestion>, SuggestionSource)> {
        if !self.config.enabled {
            return None;
        }

        let now = self.clock.now();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let expired = match entries.get(key) {
            Some(entry) => {
                let age = (now - entry.created_at).num_seconds();
                if age < self.config.ttl_seconds as i64 {
                    return Some((entry.suggestions.clone(), entry.source.clone()));
                }
                true
            }
            None => false,
        };

        if expired {
            entries.remove(key);
        }
        None
    }

    /// Stores a computed list. No-op when caching is disabled.
    pub fn put(&self, key: &str, suggestions: Vec<RecipeSuggestion>, source: SuggestionSource) {
        if !self.config.enabled {
            return;
        }

        let entry = CacheEntry {
            suggestions,
            source,
            created_at: self.clock.now(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);
    }
}

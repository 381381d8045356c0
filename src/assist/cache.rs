/*!
 * Remote result caching.
 *
 * Successful remote answers are kept for the rest of the session so that
 * running the same transformation on unchanged text does not call the API
 * again. Local fallback results are never cached.
 */

use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use log::debug;

use crate::fallback::TransformKind;

/// Cache key combining the transformation (with its target language) and the text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: TransformKind,
    text: String,
}

impl CacheKey {
    fn new(kind: &TransformKind, text: &str) -> Self {
        Self {
            kind: kind.clone(),
            text: text.to_string(),
        }
    }
}

/// Session cache of remote results
pub struct ResultCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<CacheKey, String>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl ResultCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Look up a cached result
    pub fn get(&self, kind: &TransformKind, text: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::new(kind, text);
        let cached = self.cache.read().get(&key).cloned();

        match &cached {
            Some(_) => {
                *self.hits.write() += 1;
                debug!("Cache hit for {} on '{}'", kind, truncate_text(text, 30));
            }
            None => {
                *self.misses.write() += 1;
                debug!("Cache miss for {} on '{}'", kind, truncate_text(text, 30));
            }
        }
        cached
    }

    /// Store a remote result
    pub fn store(&self, kind: &TransformKind, text: &str, result: &str) {
        if !self.enabled {
            return;
        }

        self.cache.write().insert(CacheKey::new(kind, text), result.to_string());
        debug!("Cached {} result for '{}'", kind, truncate_text(text, 30));
    }

    /// Hits, misses and hit rate
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 { hits as f64 / total as f64 } else { 0.0 };

        (hits, misses, hit_rate)
    }

    pub fn clear(&self) {
        self.cache.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Result cache cleared");
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for ResultCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}

/// Truncate text to at most `max_chars` characters, with an ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

//! Registry index cache
//!
//! Caches the fetched remote index on disk so repeated invocations within
//! the TTL window do not refetch.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::config::defaults::{INDEX_FILE_NAME, REGISTRY_CACHE_TTL};

/// Local cache for registry data
#[derive(Debug)]
pub struct RegistryCache {
    /// Cache directory path
    cache_dir: PathBuf,
    /// Time-to-live for cached entries
    ttl: Duration,
}

impl RegistryCache {
    /// Create a new registry cache
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            ttl: Duration::from_secs(REGISTRY_CACHE_TTL),
        }
    }

    /// Override the TTL (tests)
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Get the cache directory
    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    fn index_path(&self) -> PathBuf {
        self.cache_dir.join(INDEX_FILE_NAME)
    }

    /// Load the cached index if it exists and is younger than the TTL
    pub fn load_fresh_index(&self) -> Option<String> {
        let path = self.index_path();
        let modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok()?;
        let age = SystemTime::now().duration_since(modified).ok()?;
        if age > self.ttl {
            tracing::debug!("Registry cache at {} is stale", path.display());
            return None;
        }
        std::fs::read_to_string(&path).ok()
    }

    /// Store a fetched index. Failures are logged and ignored; the cache
    /// is an optimization, not a requirement.
    pub fn store_index(&self, content: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.cache_dir) {
            tracing::warn!("Failed to create cache directory: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.index_path(), content) {
            tracing::warn!("Failed to write registry cache: {e}");
        }
    }
}

impl Default for RegistryCache {
    fn default() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("payloadkit");
        Self::new(cache_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cache_is_not_fresh() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = RegistryCache::new(dir.path().join("cache"));
        assert!(cache.load_fresh_index().is_none());
    }

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = RegistryCache::new(dir.path().join("cache"));
        cache.store_index("{\"blocks\":[]}");
        assert_eq!(cache.load_fresh_index().as_deref(), Some("{\"blocks\":[]}"));
    }

    #[test]
    fn test_zero_ttl_is_always_stale() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = RegistryCache::new(dir.path().join("cache")).with_ttl(Duration::ZERO);
        cache.store_index("{}");
        assert!(cache.load_fresh_index().is_none());
    }
}

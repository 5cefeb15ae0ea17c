//! Registry client implementation
//!
//! Resolves the registry index in priority order: a local registry
//! directory (configured path or `PAYLOADKIT_REGISTRY_DIR`), then the
//! remote HTTP registry (with on-disk caching), then the builtin index
//! compiled into the binary. Read-only commands never hard-fail on
//! registry transport errors; they degrade to the builtin index.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::defaults::INDEX_FILE_NAME;
use crate::config::urls;
use crate::error::RegistryError;
use crate::registry::cache::RegistryCache;
use crate::registry::index::{ItemKind, RegistryIndex};

/// Registry client for fetching the index and locating item sources
#[derive(Debug)]
pub struct RegistryClient {
    /// HTTP client
    client: reqwest::Client,
    /// Registry base URL
    registry_url: String,
    /// Local registry directory, preferred over the remote URL when set
    local_dir: Option<PathBuf>,
    /// On-disk cache for the remote index
    cache: RegistryCache,
}

impl RegistryClient {
    /// Create a new registry client with the default URL.
    ///
    /// Honors `PAYLOADKIT_REGISTRY_DIR` as a local registry override.
    pub fn new() -> Self {
        let local_dir = std::env::var(urls::REGISTRY_DIR_ENV)
            .ok()
            .map(PathBuf::from);
        Self {
            client: reqwest::Client::new(),
            registry_url: urls::COMPONENT_REGISTRY.to_string(),
            local_dir,
            cache: RegistryCache::default(),
        }
    }

    /// Create a registry client with a custom URL
    pub fn with_url(url: String) -> Self {
        let mut client = Self::new();
        client.registry_url = url;
        client
    }

    /// Prefer a local registry directory over remote fetching
    pub fn with_local_dir(mut self, dir: PathBuf) -> Self {
        self.local_dir = Some(dir);
        self
    }

    /// Override the cache (tests)
    pub fn with_cache(mut self, cache: RegistryCache) -> Self {
        self.cache = cache;
        self
    }

    /// Get the registry URL
    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    /// Get the local registry directory, if any
    pub fn local_dir(&self) -> Option<&Path> {
        self.local_dir.as_deref()
    }

    /// Fetch the registry index.
    ///
    /// Local directory and cached remote failures that leave no index at
    /// all fall back to the builtin index with a warning.
    pub async fn fetch_index(&self) -> RegistryIndex {
        match self.try_fetch_index().await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("Falling back to builtin registry index: {e}");
                RegistryIndex::builtin()
            }
        }
    }

    /// Fetch the registry index, surfacing transport/parse failures
    pub async fn try_fetch_index(&self) -> Result<RegistryIndex, RegistryError> {
        if let Some(dir) = &self.local_dir {
            return Self::load_local_index(dir);
        }

        if let Some(cached) = self.cache.load_fresh_index() {
            if let Ok(index) = RegistryIndex::from_json(&cached) {
                return Ok(index);
            }
            tracing::warn!("Ignoring unparsable registry cache");
        }

        let content = self.fetch_remote_index().await?;
        let index = RegistryIndex::from_json(&content)
            .map_err(|e| RegistryError::ParseError(e.to_string()))?;
        self.cache.store_index(&content);
        Ok(index)
    }

    /// Locate the local source tree for an item.
    ///
    /// Only meaningful for local registries; remote items are not
    /// downloaded as file trees in this version, so installs from the
    /// remote or builtin index take the placeholder path.
    pub fn item_source_dir(&self, kind: ItemKind, name: &str) -> Option<PathBuf> {
        let dir = self.local_dir.as_ref()?.join(kind.dir_name()).join(name);
        dir.is_dir().then_some(dir)
    }

    fn load_local_index(dir: &Path) -> Result<RegistryIndex, RegistryError> {
        let path = dir.join(INDEX_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|e| RegistryError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        RegistryIndex::from_json(&content).map_err(|e| RegistryError::ParseError(e.to_string()))
    }

    async fn fetch_remote_index(&self) -> Result<String, RegistryError> {
        let url = format!("{}/{INDEX_FILE_NAME}", self.registry_url);

        let op = || async {
            let response = self
                .client
                .get(&url)
                .timeout(Duration::from_secs(10))
                .send()
                .await
                .map_err(backoff::Error::transient)?;
            let response = response
                .error_for_status()
                .map_err(backoff::Error::permanent)?;
            response.text().await.map_err(backoff::Error::transient)
        };

        let policy = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::from_secs(30)))
            .build();

        backoff::future::retry(policy, op)
            .await
            .map_err(|e| RegistryError::NetworkError {
                url,
                error: e.to_string(),
            })
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_local_registry(dir: &Path, index: &RegistryIndex) {
        std::fs::create_dir_all(dir).expect("create registry dir");
        std::fs::write(dir.join(INDEX_FILE_NAME), index.to_json().expect("json"))
            .expect("write index");
    }

    #[tokio::test]
    async fn test_local_index_preferred() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut index = RegistryIndex::default();
        index.blocks.push(crate::registry::RegistryItem::new("only-local", "test"));
        write_local_registry(tmp.path(), &index);

        let client = RegistryClient::with_url("http://127.0.0.1:1".to_string())
            .with_local_dir(tmp.path().to_path_buf());
        let fetched = client.fetch_index().await;
        assert!(fetched.get(ItemKind::Block, "only-local").is_some());
    }

    #[tokio::test]
    async fn test_local_index_missing_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let client = RegistryClient::new().with_local_dir(tmp.path().join("nope"));
        assert!(client.try_fetch_index().await.is_err());
    }

    #[test]
    fn test_item_source_dir_requires_existing_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let item_dir = tmp.path().join("blocks").join("hero");
        std::fs::create_dir_all(&item_dir).expect("create item dir");

        let client = RegistryClient::new().with_local_dir(tmp.path().to_path_buf());
        assert_eq!(client.item_source_dir(ItemKind::Block, "hero"), Some(item_dir));
        assert_eq!(client.item_source_dir(ItemKind::Block, "missing"), None);
        assert_eq!(client.item_source_dir(ItemKind::Global, "hero"), None);
    }
}

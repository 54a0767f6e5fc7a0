//! The single entry point over fetcher + cache. Constructed once at process
//! start and shared by every request handler; there is no module-level
//! mutable state.

use tokio::sync::Mutex;

use crate::cache::RatingsCache;
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::ProfileFetcher;
use crate::types::RatingsSnapshot;

pub struct Pipeline {
    fetcher: ProfileFetcher,
    cache: RatingsCache,
    /// Serializes whole resolve cycles. Two concurrent cache misses must not
    /// race the load-then-overwrite of the snapshot file.
    resolve_lock: Mutex<()>,
}

impl Pipeline {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: ProfileFetcher::new(cfg)?,
            cache: RatingsCache::new(&cfg.cache_path),
            resolve_lock: Mutex::new(()),
        })
    }

    /// Resolve the identifier list to a snapshot: served from cache when it
    /// covers the list, fetched and persisted otherwise.
    pub async fn resolve(&self, fide_ids: &[String]) -> RatingsSnapshot {
        let _guard = self.resolve_lock.lock().await;
        let fetcher = &self.fetcher;
        self.cache
            .resolve(fide_ids, |ids| async move { fetcher.fetch_all(&ids).await })
            .await
    }
}

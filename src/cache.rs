//! JSON snapshot cache: one file, whole-batch overwrite, and a load path
//! that treats corruption the same as absence.

use std::future::Future;
use std::path::PathBuf;

use tracing::{error, info};

use crate::types::{PlayerRecord, RatingsSnapshot};

pub struct RatingsCache {
    path: PathBuf,
}

impl RatingsCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Prior snapshot, if one exists and decodes. A corrupt file logs and
    /// reads as absent; it never errors out of the pipeline.
    pub fn load(&self) -> Option<RatingsSnapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                error!(path = %self.path.display(), "failed to read cache file: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                error!(path = %self.path.display(), "cache file is corrupt, refetching: {e}");
                None
            }
        }
    }

    /// Wholesale overwrite. A write failure is logged; the caller keeps its
    /// in-memory snapshot either way.
    pub fn store(&self, snapshot: &RatingsSnapshot) {
        let json = match serde_json::to_string(snapshot) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize snapshot: {e}");
                return;
            }
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => info!(path = %self.path.display(), "cache written"),
            Err(e) => error!(path = %self.path.display(), "failed to write cache: {e}"),
        }
    }

    /// The fetch-or-reuse decision: serve the stored snapshot when it covers
    /// exactly the requested identifiers, otherwise run one fetch cycle and
    /// persist the result. At most one fetch cycle per call; no
    /// per-identifier partial caching.
    pub async fn resolve<F, Fut>(&self, fide_ids: &[String], fetch_all: F) -> RatingsSnapshot
    where
        F: FnOnce(Vec<String>) -> Fut,
        Fut: Future<Output = Vec<PlayerRecord>>,
    {
        if let Some(snapshot) = self.load() {
            if snapshot.covers(fide_ids) {
                info!(players = snapshot.players.len(), "serving ratings from cache");
                return snapshot;
            }
            info!("cached snapshot is for a different player list, refetching");
        }
        let players = fetch_all(fide_ids.to_vec()).await;
        let snapshot = RatingsSnapshot::new(players);
        self.store(&snapshot);
        snapshot
    }
}

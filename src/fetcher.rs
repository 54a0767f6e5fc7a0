//! Sequential profile retrieval. One GET per identifier; any transport or
//! HTTP failure degrades to a placeholder record instead of propagating.

use std::time::Duration;

use tracing::{error, info};

use crate::config::{Config, FETCH_TIMEOUT_SECS};
use crate::error::Result;
use crate::extract::extract_profile;
use crate::types::PlayerRecord;

pub struct ProfileFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileFetcher {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.fide_base_url.clone(),
        })
    }

    /// Fetch every identifier one at a time, in input order. Failures come
    /// back as placeholder records, so the batch length always matches the
    /// input length.
    pub async fn fetch_all(&self, fide_ids: &[String]) -> Vec<PlayerRecord> {
        let mut players = Vec::with_capacity(fide_ids.len());
        for fide_id in fide_ids {
            players.push(self.fetch_player(fide_id).await);
        }
        players
    }

    pub async fn fetch_player(&self, fide_id: &str) -> PlayerRecord {
        match self.try_fetch(fide_id).await {
            Ok(record) => {
                info!(
                    fide_id,
                    name = %record.name,
                    standard = %record.standard,
                    rapid = %record.rapid,
                    blitz = %record.blitz,
                    "fetched ratings"
                );
                record
            }
            Err(e) => {
                error!(fide_id, "profile fetch failed: {e}");
                PlayerRecord::placeholder(fide_id)
            }
        }
    }

    async fn try_fetch(&self, fide_id: &str) -> Result<PlayerRecord> {
        let url = format!("{}/profile/{}", self.base_url, fide_id);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(extract_profile(&body, fide_id))
    }
}

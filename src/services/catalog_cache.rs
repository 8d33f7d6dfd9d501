//! Vehicle catalog cache.
//!
//! Data-loading collaborator for callers that refresh the catalog on every
//! keystroke. The engine itself never caches: its services take plain
//! slices, and this wrapper sits strictly outside them with an explicit
//! invalidate/refresh contract.

use std::time::{Duration, Instant};

use crate::models::vehicle::VehicleCatalogEntry;

const DEFAULT_TTL_SECS: u64 = 300;

type CatalogResult = Result<Vec<VehicleCatalogEntry>, Box<dyn std::error::Error>>;

pub struct CatalogCache {
    ttl: Duration,
    entries: Vec<VehicleCatalogEntry>,
    fetched_at: Option<Instant>,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCache {
    pub fn new() -> Self {
        let ttl_secs = std::env::var("CATALOG_CACHE_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);
        Self::with_ttl(Duration::from_secs(ttl_secs))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Vec::new(),
            fetched_at: None,
        }
    }

    /// Serve the cached catalog while fresh, refreshing through the supplier
    /// once the TTL lapses. A failed refresh serves the stale copy when one
    /// exists and surfaces the error only on a cold cache.
    pub fn get<F>(&mut self, supplier: F) -> CatalogResult
    where
        F: FnOnce() -> CatalogResult,
    {
        if let Some(fetched_at) = self.fetched_at {
            if fetched_at.elapsed() < self.ttl {
                log::debug!("Catalog cache hit ({} entries)", self.entries.len());
                return Ok(self.entries.clone());
            }
        }
        self.refresh(supplier)
    }

    /// Force a fetch through the supplier regardless of freshness.
    pub fn refresh<F>(&mut self, supplier: F) -> CatalogResult
    where
        F: FnOnce() -> CatalogResult,
    {
        match supplier() {
            Ok(entries) => {
                self.entries = entries;
                self.fetched_at = Some(Instant::now());
                Ok(self.entries.clone())
            }
            Err(e) if !self.entries.is_empty() => {
                log::warn!("Catalog refresh failed: {}. Serving stale catalog.", e);
                Ok(self.entries.clone())
            }
            Err(e) => Err(e),
        }
    }

    /// Drop freshness so the next `get` goes back to the supplier.
    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }
}

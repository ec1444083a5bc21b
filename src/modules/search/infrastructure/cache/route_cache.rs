use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::search::domain::route::Route;

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub insertions: u64,
    pub rejected_expired: u64,
    pub evicted_on_read: u64,
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

/// Concurrent route store keyed by route identifier.
///
/// Validity is bounded by each route's time limit: already-expired routes
/// are dropped at insertion, and entries that expire while stored are
/// evicted lazily on read (plus optionally by a background sweep). Per-key
/// upsert is atomic; identifiers are freshly minted per fetch, so writes
/// from concurrent requests only add entries, never collide.
#[derive(Debug, Default)]
pub struct RouteCache {
    routes: Arc<DashMap<Uuid, Route>>,
    insertions: AtomicU64,
    rejected_expired: AtomicU64,
    evicted_on_read: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store every route whose time limit is strictly in the future;
    /// expired routes are dropped silently. Returns the number stored.
    pub fn put(&self, routes: &[Route]) -> usize {
        let now = Utc::now();
        let mut stored = 0;

        for route in routes {
            if route.is_valid_at(now) {
                self.routes.insert(route.id, route.clone());
                stored += 1;
            } else {
                self.rejected_expired.fetch_add(1, Ordering::Relaxed);
                debug!(
                    "Dropping expired route {} (time limit {})",
                    route.id, route.time_limit
                );
            }
        }

        self.insertions.fetch_add(stored as u64, Ordering::Relaxed);
        stored
    }

    /// Return all stored routes whose origin and destination match exactly
    /// (case-sensitive). Entries past their time limit are evicted and
    /// never returned.
    pub fn get(&self, origin: &str, destination: &str) -> Vec<Route> {
        let now = Utc::now();
        let mut matches = Vec::new();
        let mut expired_keys = Vec::new();

        for entry in self.routes.iter() {
            let route = entry.value();
            if !route.is_valid_at(now) {
                expired_keys.push(*entry.key());
            } else if route.origin == origin && route.destination == destination {
                matches.push(route.clone());
            }
        }

        // Removal must not overlap iteration: iter() holds shard locks
        for key in expired_keys {
            if self.routes.remove(&key).is_some() {
                self.evicted_on_read.fetch_add(1, Ordering::Relaxed);
            }
        }

        if matches.is_empty() {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        matches
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Clear all cached routes and reset counters
    pub fn clear(&self) {
        self.routes.clear();
        self.insertions.store(0, Ordering::Relaxed);
        self.rejected_expired.store(0, Ordering::Relaxed);
        self.evicted_on_read.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        info!("Route cache cleared");
    }

    /// Get current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            insertions: self.insertions.load(Ordering::Relaxed),
            rejected_expired: self.rejected_expired.load(Ordering::Relaxed),
            evicted_on_read: self.evicted_on_read.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.routes.len(),
        }
    }

    /// Start a background task pruning expired entries on an interval
    pub fn spawn_cleanup_task(&self, interval: Duration) -> JoinHandle<()> {
        let routes = Arc::clone(&self.routes);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // the first tick fires immediately

            loop {
                ticker.tick().await;

                let now = Utc::now();
                let expired_keys: Vec<Uuid> = routes
                    .iter()
                    .filter(|entry| !entry.value().is_valid_at(now))
                    .map(|entry| *entry.key())
                    .collect();

                let expired_count = expired_keys.len();
                for key in expired_keys {
                    routes.remove(&key);
                }

                if expired_count > 0 {
                    debug!("Cleaned up {} expired route entries", expired_count);
                }
            }
        })
    }
}

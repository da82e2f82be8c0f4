//! Reference table store
//!
//! An explicitly constructed, injected cache around a reference source.
//! The snapshot loads at most once, even under concurrent first calls,
//! and every later call returns the same `Arc` without touching the
//! backing store. `reload()` replaces the snapshot on demand, which is
//! how tests isolate themselves and how a caller recovers after fixing
//! an empty or misconfigured backing database.
//!
//! There is deliberately no process-global cache: embedders construct a
//! store, hand it to a [`CampaignCalculator`](crate::CampaignCalculator),
//! and keep a clone if they want to reload it later.

use crate::db;
use crate::reference::ReferenceTables;
use crate::Result;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Where a reference snapshot comes from
#[derive(Debug, Clone)]
pub enum ReferenceSource {
    /// The three reference tables of a SQLite database
    /// (see [`db::init_reference_db`])
    Sqlite(SqlitePool),
    /// A prebuilt in-memory snapshot, for tests and for embedders that
    /// load their rate card elsewhere
    Fixture(ReferenceTables),
}

impl ReferenceSource {
    async fn load(&self) -> Result<ReferenceTables> {
        match self {
            ReferenceSource::Sqlite(pool) => {
                let media = db::fetch_media_rates(pool).await?;
                let creator = db::fetch_creator_rates(pool).await?;
                let community = db::fetch_community_weights(pool).await?;
                Ok(ReferenceTables::from_entries(media, creator, community))
            }
            ReferenceSource::Fixture(tables) => Ok(tables.clone()),
        }
    }
}

/// Shared, lazily loaded reference table cache
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    source: ReferenceSource,
    cache: RwLock<Option<Arc<ReferenceTables>>>,
}

impl ReferenceStore {
    /// Create a store over a source; nothing is loaded until the first
    /// [`tables()`](Self::tables) call
    pub fn new(source: ReferenceSource) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source,
                cache: RwLock::new(None),
            }),
        }
    }

    /// Store over a prebuilt in-memory snapshot
    pub fn with_fixture(tables: ReferenceTables) -> Self {
        Self::new(ReferenceSource::Fixture(tables))
    }

    /// Get the reference snapshot, loading it from the source on first use.
    ///
    /// Concurrent first callers serialize on the write lock and the
    /// double-check, so the source is queried at most once. A load
    /// failure leaves the cache unpopulated; the next call retries.
    pub async fn tables(&self) -> Result<Arc<ReferenceTables>> {
        if let Some(tables) = self.inner.cache.read().await.as_ref() {
            debug!("Serving cached reference tables");
            return Ok(Arc::clone(tables));
        }

        let mut guard = self.inner.cache.write().await;
        // Another caller may have loaded while we waited for the write lock
        if let Some(tables) = guard.as_ref() {
            return Ok(Arc::clone(tables));
        }

        let tables = Arc::new(self.inner.source.load().await?);
        info!(
            media_rates = tables.media_rate_count(),
            creator_rates = tables.creator_rate_count(),
            community_platforms = tables.community_platform_count(),
            "Loaded reference tables"
        );
        *guard = Some(Arc::clone(&tables));
        Ok(tables)
    }

    /// Discard the cached snapshot and load a fresh one from the source.
    ///
    /// Returns the new snapshot so callers can immediately inspect its
    /// row counts. On failure the previous snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<ReferenceTables>> {
        let mut guard = self.inner.cache.write().await;
        let tables = Arc::new(self.inner.source.load().await?);
        info!(
            media_rates = tables.media_rate_count(),
            creator_rates = tables.creator_rate_count(),
            community_platforms = tables.community_platform_count(),
            "Reloaded reference tables"
        );
        *guard = Some(Arc::clone(&tables));
        Ok(tables)
    }

    /// True once a snapshot has been loaded
    pub async fn is_loaded(&self) -> bool {
        self.inner.cache.read().await.is_some()
    }
}

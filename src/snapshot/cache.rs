use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use crate::core::domain::{FreshnessPolicy, INVENTORY_TAG};
use crate::core::inventory::InventoryResult;
use crate::records::domain::model::BookRecord;
use crate::records::normalizer::parse_snapshot;
use crate::snapshot::source::SnapshotSource;

// One complete, immutable, normalized copy of the catalog. Queries hold it
// through an Arc so a refresh can never tear a response in flight.
#[derive(Debug)]
pub(crate) struct Snapshot {
    pub records: Vec<BookRecord>,
    pub fetched_at: DateTime<Utc>,
}

struct Entry {
    snapshot: Arc<Snapshot>,
    tags: Vec<String>,
    invalidated: bool,
    refreshing: bool,
}

enum ReadPlan {
    Serve(Arc<Snapshot>),
    ServeStale { snapshot: Arc<Snapshot>, spawn_refresh: bool },
    Refresh,
}

// SnapshotCache brokers access to the upstream source under a freshness
// policy. Within max_age a cached snapshot is served with no upstream call;
// within the stale-while-revalidate grace the stale snapshot is served while
// a refresh runs out-of-band; past the grace (or after invalidation, or on a
// cold cache) the reader waits for a synchronous refresh. A failed refresh on
// the synchronous path hard-fails the request even when a stale snapshot
// exists, matching the upstream-of-record behavior of always re-fetching.
pub(crate) struct SnapshotCache {
    source: Arc<dyn SnapshotSource>,
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl SnapshotCache {
    pub(crate) fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub(crate) async fn get(&self, key: &str, policy: &FreshnessPolicy) -> InventoryResult<Arc<Snapshot>> {
        let now = Utc::now();
        let plan = {
            let mut entries = self.entries.lock().await;
            match entries.get_mut(key) {
                Some(entry) if !entry.invalidated => {
                    let age = (now - entry.snapshot.fetched_at).num_seconds();
                    if age <= policy.max_age_secs {
                        ReadPlan::Serve(entry.snapshot.clone())
                    } else if age <= policy.max_age_secs + policy.stale_while_revalidate_secs {
                        let spawn_refresh = !entry.refreshing;
                        if spawn_refresh {
                            entry.refreshing = true;
                        }
                        ReadPlan::ServeStale { snapshot: entry.snapshot.clone(), spawn_refresh }
                    } else {
                        ReadPlan::Refresh
                    }
                }
                _ => ReadPlan::Refresh,
            }
        };

        match plan {
            ReadPlan::Serve(snapshot) => Ok(snapshot),
            ReadPlan::ServeStale { snapshot, spawn_refresh } => {
                if spawn_refresh {
                    self.spawn_refresh(key.to_string());
                }
                Ok(snapshot)
            }
            ReadPlan::Refresh => self.refresh(key).await,
        }
    }

    // Marks every entry carrying the tag so its next read refreshes
    // regardless of age.
    pub(crate) async fn invalidate(&self, tag: &str) {
        let mut entries = self.entries.lock().await;
        for entry in entries.values_mut() {
            if entry.tags.iter().any(|t| t == tag) {
                entry.invalidated = true;
            }
        }
    }

    // Synchronous refresh path: the upstream fetch runs outside the entry
    // lock, then the whole entry is replaced in one publish.
    async fn refresh(&self, key: &str) -> InventoryResult<Arc<Snapshot>> {
        let snapshot = Arc::new(fetch_snapshot(self.source.as_ref()).await?);
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), Entry {
            snapshot: snapshot.clone(),
            tags: vec![INVENTORY_TAG.to_string(), key.to_string()],
            invalidated: false,
            refreshing: false,
        });
        Ok(snapshot)
    }

    // Out-of-band refresh for the stale-while-revalidate path; readers never
    // block on it and a failure leaves the stale entry in place.
    fn spawn_refresh(&self, key: String) {
        let source = self.source.clone();
        let entries = self.entries.clone();
        tokio::spawn(async move {
            match fetch_snapshot(source.as_ref()).await {
                Ok(snapshot) => {
                    let mut entries = entries.lock().await;
                    entries.insert(key.clone(), Entry {
                        snapshot: Arc::new(snapshot),
                        tags: vec![INVENTORY_TAG.to_string(), key.clone()],
                        invalidated: false,
                        refreshing: false,
                    });
                    tracing::info!(key = key.as_str(), "refreshed inventory snapshot");
                }
                Err(err) => {
                    tracing::warn!(key = key.as_str(), "background refresh failed: {}", err);
                    let mut entries = entries.lock().await;
                    if let Some(entry) = entries.get_mut(key.as_str()) {
                        entry.refreshing = false;
                    }
                }
            }
        });
    }

    #[cfg(test)]
    pub(crate) async fn backdate(&self, key: &str, secs: i64) {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.snapshot = Arc::new(Snapshot {
                records: entry.snapshot.records.clone(),
                fetched_at: entry.snapshot.fetched_at - chrono::Duration::seconds(secs),
            });
        }
    }
}

async fn fetch_snapshot(source: &dyn SnapshotSource) -> InventoryResult<Snapshot> {
    let raw = source.fetch().await?;
    let records = parse_snapshot(raw.as_str())?;
    Ok(Snapshot {
        records,
        fetched_at: Utc::now(),
    })
}

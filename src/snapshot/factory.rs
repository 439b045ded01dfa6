use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::snapshot::cache::SnapshotCache;
use crate::snapshot::source::{FixtureSnapshotSource, HttpSnapshotSource, SnapshotSource};
use crate::snapshot::SnapshotOrigin;

pub(crate) fn create_snapshot_source(config: &Configuration, origin: SnapshotOrigin) -> Arc<dyn SnapshotSource> {
    match origin {
        SnapshotOrigin::Http => Arc::new(HttpSnapshotSource::new(config.upstream_url.as_str())),
        SnapshotOrigin::Fixture => Arc::new(FixtureSnapshotSource::sample()),
    }
}

pub(crate) fn create_snapshot_cache(config: &Configuration, origin: SnapshotOrigin) -> Arc<SnapshotCache> {
    Arc::new(SnapshotCache::new(create_snapshot_source(config, origin)))
}

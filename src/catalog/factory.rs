use std::sync::Arc;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::snapshot::cache::SnapshotCache;

pub(crate) fn create_catalog_service(config: &Configuration, cache: Arc<SnapshotCache>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, cache))
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::{CatalogPage, CatalogQuery, CatalogService, SampleQuery, SampleSet};
use crate::catalog::{engine, sampler};
use crate::core::domain::{Configuration, FreshnessPolicy, CATALOG_CACHE_KEY, SAMPLE_CACHE_KEY};
use crate::core::inventory::InventoryResult;
use crate::snapshot::cache::SnapshotCache;

// The catalog and sampling surfaces read through the same cache under their
// own keys and freshness policies, so each keeps its own refresh cadence.
pub(crate) struct CatalogServiceImpl {
    cache: Arc<SnapshotCache>,
    catalog_policy: FreshnessPolicy,
    sample_policy: FreshnessPolicy,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, cache: Arc<SnapshotCache>) -> Self {
        Self {
            cache,
            catalog_policy: config.catalog_policy,
            sample_policy: config.sample_policy,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn query(&self, query: &CatalogQuery) -> InventoryResult<CatalogPage> {
        let snapshot = self.cache.get(CATALOG_CACHE_KEY, &self.catalog_policy).await?;
        Ok(engine::query_page(&snapshot.records, query, snapshot.fetched_at))
    }

    async fn sample(&self, query: &SampleQuery) -> InventoryResult<SampleSet> {
        let snapshot = self.cache.get(SAMPLE_CACHE_KEY, &self.sample_policy).await?;
        Ok(sampler::sample_records(&snapshot.records, query, snapshot.fetched_at))
    }

    async fn invalidate(&self, tag: &str) {
        self.cache.invalidate(tag).await
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::{CatalogQuery, CatalogService, SampleQuery};
    use crate::catalog::factory;
    use crate::core::domain::{Configuration, INVENTORY_TAG};
    use crate::core::inventory::StockFilter;
    use crate::snapshot::factory::create_snapshot_cache;
    use crate::snapshot::SnapshotOrigin;

    fn create_service() -> Box<dyn CatalogService> {
        let config = Configuration::new("");
        let cache = create_snapshot_cache(&config, SnapshotOrigin::Fixture);
        factory::create_catalog_service(&config, cache)
    }

    #[tokio::test]
    async fn test_should_query_full_catalog() {
        let svc = create_service();
        let page = svc.query(&CatalogQuery::default()).await.expect("should query");
        assert_eq!(8, page.total);
        assert_eq!(1, page.total_pages);
        assert_eq!(8, page.items.len());
    }

    #[tokio::test]
    async fn test_should_query_filtered_catalog() {
        let svc = create_service();
        let mut query = CatalogQuery::default();
        query.stock_filter = StockFilter::OutOfStock;
        let page = svc.query(&query).await.expect("should query");
        assert_eq!(2, page.total);
        assert!(page.items.iter().all(|r| !r.in_stock()));
    }

    #[tokio::test]
    async fn test_should_sample_eligible_records() {
        let svc = create_service();
        let query = SampleQuery { count: 3, include_out_of_stock: false };
        let set = svc.sample(&query).await.expect("should sample");
        assert_eq!(3, set.recommendations.len());
        assert_eq!(6, set.total);
        assert!(set.recommendations.iter().all(|r| r.in_stock()));
    }

    #[tokio::test]
    async fn test_should_invalidate_through_service() {
        let svc = create_service();
        let _ = svc.query(&CatalogQuery::default()).await.expect("should query");
        svc.invalidate(INVENTORY_TAG).await;
        let page = svc.query(&CatalogQuery::default()).await.expect("should re-query");
        assert_eq!(8, page.total);
    }
}

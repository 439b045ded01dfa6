use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::{CatalogQuery, CatalogService, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use crate::catalog::dto::CatalogPageDto;
use crate::core::command::{Command, CommandError};
use crate::core::inventory::{InventoryError, InventoryResult, StockFilter};

pub(crate) struct QueryCatalogCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl QueryCatalogCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryCatalogCommandRequest {
    pub(crate) page: Option<i64>,
    pub(crate) limit: Option<i64>,
    pub(crate) search: Option<String>,
    pub(crate) stock_filter: Option<String>,
    pub(crate) publisher: Option<String>,
}

impl QueryCatalogCommandRequest {
    // Pagination bounds are checked here, before any snapshot is fetched or
    // filtered.
    pub fn build_query(&self) -> InventoryResult<CatalogQuery> {
        let page = self.page.unwrap_or(DEFAULT_PAGE as i64);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT as i64);
        if page < 1 {
            return Err(InventoryError::validation(
                "Invalid pagination parameters", Some("page must be >= 1".to_string())));
        }
        if limit < 1 || limit > MAX_LIMIT as i64 {
            return Err(InventoryError::validation(
                "Invalid pagination parameters",
                Some(format!("limit must be within [1, {}]", MAX_LIMIT))));
        }
        Ok(CatalogQuery {
            search: self.search.clone(),
            stock_filter: StockFilter::from(self.stock_filter.clone().unwrap_or_default()),
            publisher: self.publisher.clone(),
            page: page as usize,
            limit: limit as usize,
        })
    }
}

pub(crate) type QueryCatalogCommandResponse = CatalogPageDto;

#[async_trait]
impl Command<QueryCatalogCommandRequest, QueryCatalogCommandResponse> for QueryCatalogCommand {
    async fn execute(&self, req: QueryCatalogCommandRequest) -> Result<QueryCatalogCommandResponse, CommandError> {
        let query = req.build_query().map_err(CommandError::from)?;
        self.catalog_service.query(&query)
            .await.map_err(CommandError::from).map(|page| QueryCatalogCommandResponse::from(&page))
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::query_catalog_cmd::{QueryCatalogCommand, QueryCatalogCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::snapshot::factory::create_snapshot_cache;
    use crate::snapshot::SnapshotOrigin;

    lazy_static! {
        static ref SUT_CMD: AsyncOnce<QueryCatalogCommand> = AsyncOnce::new(async {
                let config = Configuration::new("");
                let cache = create_snapshot_cache(&config, SnapshotOrigin::Fixture);
                QueryCatalogCommand::new(factory::create_catalog_service(&config, cache))
            });
    }

    #[tokio::test]
    async fn test_should_run_query_with_defaults() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(QueryCatalogCommandRequest::default()).await.expect("should query");
        assert_eq!(1, res.pagination.page);
        assert_eq!(20, res.pagination.limit);
        assert_eq!(8, res.pagination.total);
    }

    #[tokio::test]
    async fn test_should_run_query_with_search_and_filters() {
        let cmd = SUT_CMD.get().await;
        let req = QueryCatalogCommandRequest {
            search: Some("인사이트".to_string()),
            stock_filter: Some("inStock".to_string()),
            ..QueryCatalogCommandRequest::default()
        };
        let res = cmd.execute(req).await.expect("should query");
        assert_eq!(2, res.pagination.total);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_page() {
        let cmd = SUT_CMD.get().await;
        let req = QueryCatalogCommandRequest { page: Some(0), ..QueryCatalogCommandRequest::default() };
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_limit() {
        let cmd = SUT_CMD.get().await;
        for limit in [0, -5, 1001] {
            let req = QueryCatalogCommandRequest { limit: Some(limit), ..QueryCatalogCommandRequest::default() };
            assert!(matches!(cmd.execute(req).await, Err(CommandError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_should_accept_page_past_end() {
        let cmd = SUT_CMD.get().await;
        let req = QueryCatalogCommandRequest { page: Some(99), ..QueryCatalogCommandRequest::default() };
        let res = cmd.execute(req).await.expect("should query");
        assert!(res.items.is_empty());
        assert_eq!(8, res.pagination.total);
    }
}

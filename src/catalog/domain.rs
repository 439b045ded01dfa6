pub mod service;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::core::inventory::{InventoryResult, StockFilter};
use crate::records::domain::model::BookRecord;

pub(crate) const DEFAULT_PAGE: usize = 1;
pub(crate) const DEFAULT_LIMIT: usize = 20;
pub(crate) const MAX_LIMIT: usize = 1000;

// CatalogQuery is a validated listing request; invalid page/limit values are
// rejected at the command boundary before one of these is ever built.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct CatalogQuery {
    pub search: Option<String>,
    pub stock_filter: StockFilter,
    pub publisher: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl CatalogQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            search: None,
            stock_filter: StockFilter::All,
            publisher: None,
            page,
            limit,
        }
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub(crate) struct CatalogPage {
    pub items: Vec<BookRecord>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub limit: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone)]
pub(crate) struct SampleQuery {
    pub count: usize,
    pub include_out_of_stock: bool,
}

// total is the eligible-set size before sampling, not the sample size.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct SampleSet {
    pub recommendations: Vec<BookRecord>,
    pub total: usize,
    pub last_updated: DateTime<Utc>,
}

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn query(&self, query: &CatalogQuery) -> InventoryResult<CatalogPage>;
    async fn sample(&self, query: &SampleQuery) -> InventoryResult<SampleSet>;
    async fn invalidate(&self, tag: &str);
}

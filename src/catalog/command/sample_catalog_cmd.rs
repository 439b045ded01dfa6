use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::{CatalogService, SampleQuery};
use crate::catalog::dto::SampleSetDto;
use crate::catalog::sampler::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
use crate::core::command::{Command, CommandError};

pub(crate) struct SampleCatalogCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SampleCatalogCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SampleCatalogCommandRequest {
    pub(crate) count: Option<i64>,
    pub(crate) include_out_of_stock: Option<bool>,
}

impl SampleCatalogCommandRequest {
    // count is clamped into [1, 20], never rejected.
    pub fn build_query(&self) -> SampleQuery {
        let count = self.count.unwrap_or(DEFAULT_SAMPLE_COUNT as i64)
            .clamp(1, MAX_SAMPLE_COUNT as i64);
        SampleQuery {
            count: count as usize,
            include_out_of_stock: self.include_out_of_stock.unwrap_or(false),
        }
    }
}

pub(crate) type SampleCatalogCommandResponse = SampleSetDto;

#[async_trait]
impl Command<SampleCatalogCommandRequest, SampleCatalogCommandResponse> for SampleCatalogCommand {
    async fn execute(&self, req: SampleCatalogCommandRequest) -> Result<SampleCatalogCommandResponse, CommandError> {
        let query = req.build_query();
        self.catalog_service.sample(&query)
            .await.map_err(CommandError::from).map(|set| SampleCatalogCommandResponse::from(&set))
    }
}

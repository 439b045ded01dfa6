use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogPage, SampleSet};
use crate::records::domain::model::BookRecord;
use crate::utils::date::to_iso8601;

// RecordDto is the wire shape of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecordDto {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub price: String,
    pub stock: String,
}

impl From<&BookRecord> for RecordDto {
    fn from(other: &BookRecord) -> Self {
        Self {
            id: other.id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            price: other.price.to_string(),
            stock: other.stock.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationDto {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogPageDto {
    pub items: Vec<RecordDto>,
    pub pagination: PaginationDto,
    pub last_updated: String,
}

impl From<&CatalogPage> for CatalogPageDto {
    fn from(other: &CatalogPage) -> Self {
        Self {
            items: other.items.iter().map(RecordDto::from).collect(),
            pagination: PaginationDto {
                page: other.page,
                limit: other.limit,
                total: other.total,
                total_pages: other.total_pages,
                has_next: other.has_next,
                has_prev: other.has_prev,
            },
            last_updated: to_iso8601(&other.last_updated),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SampleSetDto {
    pub recommendations: Vec<RecordDto>,
    pub total: usize,
    pub last_updated: String,
}

impl From<&SampleSet> for SampleSetDto {
    fn from(other: &SampleSet) -> Self {
        Self {
            recommendations: other.recommendations.iter().map(RecordDto::from).collect(),
            total: other.total,
            last_updated: to_iso8601(&other.last_updated),
        }
    }
}

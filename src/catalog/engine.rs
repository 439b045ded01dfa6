use chrono::{DateTime, Utc};
use crate::catalog::domain::{CatalogPage, CatalogQuery};
use crate::core::inventory::StockFilter;
use crate::records::domain::model::BookRecord;

// The three predicates are independent and commutative; application order
// here is arbitrary.
pub(crate) fn apply_filters<'a>(records: &'a [BookRecord], query: &CatalogQuery) -> Vec<&'a BookRecord> {
    let term = query.search.as_deref().map(str::trim).unwrap_or("").to_lowercase();
    records.iter()
        .filter(|record| matches_search(record, term.as_str()))
        .filter(|record| matches_stock(record, query.stock_filter))
        .filter(|record| matches_publisher(record, query.publisher.as_deref()))
        .collect()
}

// Case-insensitive substring match over title, author, isbn, and publisher.
fn matches_search(record: &BookRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(term)
        || record.author.to_lowercase().contains(term)
        || record.isbn.to_lowercase().contains(term)
        || record.publisher.to_lowercase().contains(term)
}

fn matches_stock(record: &BookRecord, filter: StockFilter) -> bool {
    match filter {
        StockFilter::All => true,
        StockFilter::InStock => record.stock_count() > 0,
        StockFilter::OutOfStock => record.stock_count() == 0,
    }
}

// Exact, case-sensitive publisher match; "all" and the empty string disable
// the filter.
fn matches_publisher(record: &BookRecord, publisher: Option<&str>) -> bool {
    match publisher {
        Some(p) if !p.is_empty() && p != "all" => record.publisher.as_str() == p,
        _ => true,
    }
}

// Assumes a validated query (page >= 1, limit within bounds). Pages past the
// end are not an error: they yield an empty slice with correct metadata.
pub(crate) fn query_page(records: &[BookRecord], query: &CatalogQuery,
                         last_updated: DateTime<Utc>) -> CatalogPage {
    let filtered = apply_filters(records, query);
    let total = filtered.len();
    let total_pages = if total == 0 { 0 } else { (total + query.limit - 1) / query.limit };
    let start = (query.page - 1).saturating_mul(query.limit);
    let end = start.saturating_add(query.limit).min(total);
    let items = if start >= total {
        Vec::new()
    } else {
        filtered[start..end].iter().map(|record| (*record).clone()).collect()
    };
    CatalogPage {
        items,
        total,
        total_pages,
        page: query.page,
        limit: query.limit,
        has_next: query.page < total_pages,
        has_prev: query.page > 1,
        last_updated,
    }
}

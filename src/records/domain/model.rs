use serde::{Deserialize, Serialize};
use crate::records::domain::StockStatus;
use crate::utils::numeric::{format_grouped, parse_count};

// BookRecord is one normalized row of the inventory snapshot. Every field is
// kept as the display string from the source; price and stock may carry
// thousands separators or other decoration and are only interpreted through
// the explicit digit parse below.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookRecord {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub price: String,
    pub stock: String,
}

impl BookRecord {
    pub fn new(id: &str, isbn: &str, title: &str, author: &str,
               publisher: &str, price: &str, stock: &str) -> Self {
        Self {
            id: id.to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    pub fn stock_count(&self) -> u64 {
        parse_count(self.stock.as_str())
    }

    pub fn in_stock(&self) -> bool {
        self.stock_count() > 0
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.in_stock() {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    // Renders the price with grouped thousands and the won suffix,
    // e.g. "12,000" -> "12,000원".
    pub fn display_price(&self) -> String {
        format!("{}원", format_grouped(parse_count(self.price.as_str())))
    }
}

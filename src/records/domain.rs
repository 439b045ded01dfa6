use std::fmt;
use std::fmt::{Display, Formatter};

pub mod model;

// Display-facing stock status derived from the parsed stock count.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum StockStatus {
    InStock,
    OutOfStock,
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in-stock"),
            StockStatus::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

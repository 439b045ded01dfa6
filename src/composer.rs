use std::fmt;
use std::fmt::{Display, Formatter};

pub mod state;

// Secondary sort fields applied client-side to the loaded page only.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum SortField {
    Title,
    Author,
    Publisher,
    Price,
    Stock,
}

impl SortField {
    // price and stock compare as integers after stripping separators
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortField::Price | SortField::Stock)
    }
}

impl From<String> for SortField {
    fn from(s: String) -> Self {
        match s.as_str() {
            "author" => SortField::Author,
            "publisher" => SortField::Publisher,
            "price" => SortField::Price,
            "stock" => SortField::Stock,
            _ => SortField::Title,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Author => write!(f, "author"),
            SortField::Publisher => write!(f, "publisher"),
            SortField::Price => write!(f, "price"),
            SortField::Stock => write!(f, "stock"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

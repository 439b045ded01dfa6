pub mod catalog;
pub mod composer;
pub mod core;
pub mod records;
pub mod snapshot;
pub mod utils;

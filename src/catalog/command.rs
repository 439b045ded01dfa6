pub mod query_catalog_cmd;
pub mod sample_catalog_cmd;

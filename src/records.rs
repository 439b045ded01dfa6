pub mod domain;
pub mod normalizer;

use serde::{Deserialize, Serialize};

pub const CATALOG_CACHE_KEY: &str = "catalog";
pub const SAMPLE_CACHE_KEY: &str = "random";

// Tag shared by every cache entry so a single invalidation signal can expire
// all views of the inventory at once.
pub const INVENTORY_TAG: &str = "inventory";

// FreshnessPolicy governs how stale a cached snapshot may be served.
// Within max_age the cache answers without an upstream call; within the
// stale-while-revalidate grace it answers with the stale snapshot while a
// refresh runs out-of-band; past the grace a reader waits for a refresh.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct FreshnessPolicy {
    pub max_age_secs: i64,
    pub stale_while_revalidate_secs: i64,
}

impl FreshnessPolicy {
    pub fn new(max_age_secs: i64, stale_while_revalidate_secs: i64) -> Self {
        FreshnessPolicy {
            max_age_secs,
            stale_while_revalidate_secs,
        }
    }

    // Rendered onto responses so intermediary caches can honor the same policy.
    pub fn cache_control(&self) -> String {
        format!("public, s-maxage={}, stale-while-revalidate={}",
                self.max_age_secs, self.stale_while_revalidate_secs)
    }
}

// Configuration abstracts config options for the catalog service.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub upstream_url: String,
    pub catalog_policy: FreshnessPolicy,
    pub sample_policy: FreshnessPolicy,
}

impl Configuration {
    pub fn new(upstream_url: &str) -> Self {
        Configuration {
            upstream_url: upstream_url.to_string(),
            catalog_policy: FreshnessPolicy::new(3600, 1800),
            sample_policy: FreshnessPolicy::new(1800, 900),
        }
    }

    pub fn from_env() -> Self {
        let url = std::env::var("INVENTORY_URL").unwrap_or_default();
        Configuration::new(url.as_str())
    }
}

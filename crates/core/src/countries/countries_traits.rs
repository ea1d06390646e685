use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::countries_model::{Country, CountryRef};

/// Batch lookup of country display attributes by record id.
#[async_trait]
pub trait CountryResolverTrait: Send + Sync {
    /// Resolves each id independently. Ids that fail or match no record are
    /// absent from the result; an empty input makes no queries.
    async fn resolve_countries(&self, ids: &HashSet<String>) -> HashMap<String, CountryRef>;
}

#[async_trait]
pub trait CountryServiceTrait: Send + Sync {
    /// Countries with sites in the study. Empty on any failure.
    async fn get_countries(&self, study_id: &str) -> Vec<Country>;
}

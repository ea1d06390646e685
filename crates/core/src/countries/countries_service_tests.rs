use std::sync::Arc;

use serde_json::json;

use super::{CountryService, CountryServiceTrait, UNKNOWN_COUNTRY_NAME};
use crate::testing::MockVault;

const STUDY: &str = "0ST000000000101";

fn study_country_rows() -> Vec<serde_json::Value> {
    vec![
        json!({ "country__v": "00C000000000002" }),
        json!({ "country__v": "00C000000000001" }),
        json!({ "country__v": "00C000000000002" }),
        json!({ "country__v": null }),
    ]
}

#[tokio::test]
async fn lists_countries_with_study_status() {
    let vault = Arc::new(
        MockVault::new()
            .on("SELECT country__v FROM site__v", study_country_rows())
            .on(
                "FROM study_country__v WHERE study__v = '0ST000000000101' AND country__v = '00C000000000001'",
                vec![json!({ "status__v": ["active__v"] })],
            )
            .on(
                "FROM country__v WHERE id = '00C000000000001'",
                vec![json!({
                    "id": "00C000000000001",
                    "name__v": "France",
                    "code__sys": "FR",
                    "abbreviation__c": "FRA"
                })],
            )
            .on(
                "FROM country__v WHERE id = '00C000000000002'",
                vec![json!({ "id": "00C000000000002", "name__v": "Belgium", "code__sys": "BE" })],
            ),
    );
    let service = CountryService::new(vault.clone());

    let countries = service.get_countries(STUDY).await;

    let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Belgium", "France"]);
    assert_eq!(countries[1].status.as_deref(), Some("active__v"));
    assert_eq!(countries[1].abbreviation.as_deref(), Some("FRA"));
    assert_eq!(countries[0].status, None);
    assert_eq!(
        countries[1].vault_url,
        "https://vault.test/ui/#v/00C/00C000000000001"
    );
    assert_eq!(vault.count_matching("FROM country__v WHERE id"), 2);
    assert_eq!(vault.count_matching("FROM study_country__v"), 2);
}

#[tokio::test]
async fn failed_detail_lookup_skips_only_that_country() {
    let vault = Arc::new(
        MockVault::new()
            .on("SELECT country__v FROM site__v", study_country_rows())
            .reject_on("FROM country__v WHERE id = '00C000000000002'", "[]")
            .on(
                "FROM country__v WHERE id = '00C000000000001'",
                vec![json!({ "id": "00C000000000001" })],
            )
            .transport_error_on("FROM study_country__v"),
    );
    let service = CountryService::new(vault);

    let countries = service.get_countries(STUDY).await;

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].id, "00C000000000001");
    assert_eq!(countries[0].name, UNKNOWN_COUNTRY_NAME);
    assert_eq!(countries[0].code, "??");
    assert_eq!(countries[0].status, None);
}

#[tokio::test]
async fn study_without_countries_is_empty() {
    let vault = Arc::new(MockVault::new().on("SELECT country__v FROM site__v", vec![]));
    let service = CountryService::new(vault.clone());

    assert!(service.get_countries(STUDY).await.is_empty());
    assert_eq!(vault.queries().len(), 1);
}

#[tokio::test]
async fn top_level_failure_is_empty() {
    let vault = Arc::new(MockVault::new().transport_error_on("SELECT country__v FROM site__v"));
    let service = CountryService::new(vault);

    assert!(service.get_countries(STUDY).await.is_empty());
}

#[tokio::test]
async fn unsafe_study_id_makes_no_queries() {
    let vault = Arc::new(MockVault::new());
    let service = CountryService::new(vault.clone());

    assert!(service.get_countries("S1' OR '1'='1").await.is_empty());
    assert!(vault.queries().is_empty());
}

//! Countries module - country reference resolution and the per-study
//! country listing.

mod countries_model;
mod countries_service;
mod countries_traits;
mod country_resolver;

#[cfg(test)]
mod countries_service_tests;

pub use countries_model::{Country, CountryRef, UNKNOWN_COUNTRY_CODE, UNKNOWN_COUNTRY_NAME};
pub use countries_service::CountryService;
pub use countries_traits::{CountryResolverTrait, CountryServiceTrait};
pub use country_resolver::{collect_country_ids, CountryResolver};

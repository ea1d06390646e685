//! Site health module.
//!
//! Derives a 0-100 health score, a status bucket and an issue list for each
//! site from its lifecycle status and days to greenlight:
//!
//! ```text
//! SiteService::get_sites → [Site] → health_scorer::score_site → [SiteHealth]
//! ```
//!
//! The `trend` field is a random placeholder. There is no history source to
//! compute a real trend from, so consumers must not read meaning into it.

mod health_model;
mod health_scorer;
mod health_service;
mod health_traits;

pub use health_model::*;
pub use health_scorer::{
    calculate_health_score, identify_issues, score_site, score_site_with, BASE_SCORE,
};
pub use health_service::SiteHealthService;
pub use health_traits::SiteHealthServiceTrait;

//! Sites module - site aggregation.
//!
//! Site rows are joined in-process against country lookups and the status
//! color table. Rows without both coordinates never become sites.

mod sites_model;
mod sites_service;
mod sites_traits;


pub use sites_model::{Site, SITE_FIELDS};
pub use sites_service::SiteService;
pub use sites_traits::SiteServiceTrait;

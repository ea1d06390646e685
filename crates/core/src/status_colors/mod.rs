//! Status colors module - display colors for site statuses.
//!
//! A fixed default table is always the floor; rows of the remote
//! `site_status_configuration__c` object override or extend it by status key.

mod status_colors_constants;
mod status_colors_model;
mod status_colors_service;
mod status_colors_traits;

pub use status_colors_constants::*;
pub use status_colors_model::{SiteStatus, StatusColor};
pub use status_colors_service::{
    default_status_color_rules, default_status_colors, StatusColorService,
};
pub use status_colors_traits::StatusColorServiceTrait;

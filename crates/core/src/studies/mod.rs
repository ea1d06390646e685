//! Studies module - study listing.

mod studies_model;
mod studies_service;
mod studies_traits;

pub use studies_model::Study;
pub use studies_service::StudyService;
pub use studies_traits::StudyServiceTrait;

// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Point, Tour};
pub use responses::{TourReport, TourStop};

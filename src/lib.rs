//! Greedy Tour - nearest-neighbour visiting order for geographic points
//!
//! Starting at the first input point, the tour repeatedly jumps to the
//! closest point not yet visited. Distances are great-circle kilometers,
//! measured by one of three interchangeable formulas.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    build_tour, select_nearest, DistanceCalculator, DistanceMethod, Equirectangular, Haversine,
    PointSet, SphericalLawOfCosines, TourBuilder, TourError,
};
pub use error::AppError;
pub use models::{Point, Tour, TourReport, TourStop};

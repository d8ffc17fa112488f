// Core algorithm exports
pub mod distance;
pub mod tour;

pub use distance::{
    DistanceCalculator, DistanceMethod, Equirectangular, Haversine, SphericalLawOfCosines,
    EARTH_RADIUS_KM,
};
pub use tour::{build_tour, select_nearest, PointSet, TourBuilder, TourError};

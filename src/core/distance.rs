use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Point;

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Capability to measure the great-circle distance between two points in kilometers
pub trait DistanceCalculator {
    fn distance(&self, source: &Point, destination: &Point) -> f64;
}

impl<D: DistanceCalculator + ?Sized> DistanceCalculator for &D {
    #[inline]
    fn distance(&self, source: &Point, destination: &Point) -> f64 {
        (**self).distance(source, destination)
    }
}

/// Trigonometric terms shared by every formula
struct Radians {
    source_lat: f64,
    destination_lat: f64,
    delta_lat: f64,
    delta_lon: f64,
}

impl Radians {
    #[inline]
    fn between(source: &Point, destination: &Point) -> Self {
        Self {
            source_lat: source.latitude.to_radians(),
            destination_lat: destination.latitude.to_radians(),
            delta_lat: (destination.latitude - source.latitude).to_radians(),
            delta_lon: (destination.longitude - source.longitude).to_radians(),
        }
    }
}

/// Haversine formula; stable over the whole input domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    #[inline]
    fn distance(&self, source: &Point, destination: &Point) -> f64 {
        let r = Radians::between(source, destination);

        let a = (r.delta_lat / 2.0).sin().powi(2)
            + (r.delta_lon / 2.0).sin().powi(2) * r.source_lat.cos() * r.destination_lat.cos();
        // rounding can push `a` just past 1 for antipodal points
        let a = a.clamp(0.0, 1.0);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Spherical law of cosines
///
/// Cheap, but loses precision when the two points are close together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SphericalLawOfCosines;

impl DistanceCalculator for SphericalLawOfCosines {
    #[inline]
    fn distance(&self, source: &Point, destination: &Point) -> f64 {
        let r = Radians::between(source, destination);

        let cosine = r.source_lat.sin() * r.destination_lat.sin()
            + r.source_lat.cos() * r.destination_lat.cos() * r.delta_lon.cos();

        EARTH_RADIUS_KM * cosine.clamp(-1.0, 1.0).acos()
    }
}

/// Equirectangular projection followed by planar distance
///
/// Fastest and least accurate. Good enough for coarse filtering only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equirectangular;

impl DistanceCalculator for Equirectangular {
    #[inline]
    fn distance(&self, source: &Point, destination: &Point) -> f64 {
        let r = Radians::between(source, destination);

        let x = r.delta_lon * ((r.source_lat + r.destination_lat) / 2.0).cos();
        let y = r.destination_lat - r.source_lat;

        EARTH_RADIUS_KM * (x * x + y * y).sqrt()
    }
}

/// Distance formula selectable from configuration or the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMethod {
    #[default]
    Haversine,
    SphericalLawOfCosines,
    Equirectangular,
}

impl DistanceMethod {
    pub const ALL: [DistanceMethod; 3] = [
        DistanceMethod::Haversine,
        DistanceMethod::SphericalLawOfCosines,
        DistanceMethod::Equirectangular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMethod::Haversine => "haversine",
            DistanceMethod::SphericalLawOfCosines => "spherical-law-of-cosines",
            DistanceMethod::Equirectangular => "equirectangular",
        }
    }
}

impl DistanceCalculator for DistanceMethod {
    #[inline]
    fn distance(&self, source: &Point, destination: &Point) -> f64 {
        match self {
            DistanceMethod::Haversine => Haversine.distance(source, destination),
            DistanceMethod::SphericalLawOfCosines => {
                SphericalLawOfCosines.distance(source, destination)
            }
            DistanceMethod::Equirectangular => Equirectangular.distance(source, destination),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown distance method: {}", s))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::distance::DistanceCalculator;

/// Named geographic point with coordinates in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}

/// Visiting order produced by the tour builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.name.as_str()).collect()
    }

    /// Distance of every hop, aligned with the points (the start has a 0 leg)
    pub fn legs<D: DistanceCalculator>(&self, calculator: &D) -> Vec<f64> {
        let mut legs = Vec::with_capacity(self.points.len());
        if !self.points.is_empty() {
            legs.push(0.0);
        }
        legs.extend(
            self.points
                .windows(2)
                .map(|pair| calculator.distance(&pair[0], &pair[1])),
        );
        legs
    }

    /// Length of the open path in kilometers; the tour does not return to its start
    pub fn total_distance<D: DistanceCalculator>(&self, calculator: &D) -> f64 {
        self.legs(calculator).iter().sum()
    }
}

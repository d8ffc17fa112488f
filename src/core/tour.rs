use thiserror::Error;

use crate::core::distance::{DistanceCalculator, Haversine};
use crate::models::{Point, Tour};

/// Errors that can occur while building a tour
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("Empty input: at least one point is required to start a tour")]
    EmptyInput,
}

/// Points not yet visited, kept in input order
///
/// Removal shifts later elements down, so iteration order is always the
/// input order minus the points already taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Remove and return the point at `index`, or `None` if out of range
    pub fn take(&mut self, index: usize) -> Option<Point> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

/// Take the member of `remaining` closest to `current`
///
/// A singleton set is returned without measuring anything. Otherwise the
/// first candidate with the strictly smallest distance wins, so equal
/// distances resolve to whichever point came earlier in the input.
/// Returns `None` only when `remaining` is empty.
pub fn select_nearest<D: DistanceCalculator>(
    calculator: &D,
    current: &Point,
    remaining: &mut PointSet,
) -> Option<Point> {
    if remaining.len() == 1 {
        return remaining.take(0);
    }

    let mut nearest: Option<(usize, f64)> = None;

    for (index, candidate) in remaining.iter().enumerate() {
        let distance = calculator.distance(current, candidate);

        let closer = match nearest {
            None => true,
            // NaN never wins against a real distance
            Some((_, best)) => distance < best || (best.is_nan() && !distance.is_nan()),
        };

        if closer {
            nearest = Some((index, distance));
        }
    }

    let (index, distance) = nearest?;
    let point = remaining.take(index)?;
    tracing::trace!("Nearest to {}: {} ({:.3} km)", current.name, point.name, distance);
    Some(point)
}

/// Greedy nearest-neighbour tour construction
///
/// Starts at the first input point and keeps jumping to the closest point
/// that has not been visited yet until every point is placed.
#[derive(Debug, Clone, Default)]
pub struct TourBuilder<D> {
    calculator: D,
}

impl<D: DistanceCalculator> TourBuilder<D> {
    pub fn new(calculator: D) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &D {
        &self.calculator
    }

    /// Build a tour visiting every point exactly once
    ///
    /// # Errors
    /// `TourError::EmptyInput` when `points` is empty; nothing is built.
    pub fn build(&self, points: Vec<Point>) -> Result<Tour, TourError> {
        let total = points.len();
        let mut remaining = points.into_iter();
        let start = remaining.next().ok_or(TourError::EmptyInput)?;

        tracing::debug!("Building tour over {} points starting at {}", total, start.name);

        let mut remaining: PointSet = remaining.collect();
        let mut tour = Tour::with_capacity(total);
        let mut current = start.clone();
        tour.push(start);

        while let Some(next) = select_nearest(&self.calculator, &current, &mut remaining) {
            current = next.clone();
            tour.push(next);
        }

        debug_assert!(remaining.is_empty());
        debug_assert_eq!(tour.len(), total);
        tracing::debug!("Tour complete with {} stops", tour.len());

        Ok(tour)
    }
}

/// Build a tour using the haversine formula
pub fn build_tour(points: Vec<Point>) -> Result<Tour, TourError> {
    TourBuilder::new(Haversine).build(points)
}

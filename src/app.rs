use std::io::Write;
use tracing::info;

use crate::config::Settings;
use crate::core::{DistanceMethod, TourBuilder};
use crate::error::Result;
use crate::models::{Point, TourReport};
use crate::services::{write_report, PointReader};

/// Build a report for points already in memory
pub fn plan(points: Vec<Point>, method: DistanceMethod) -> Result<TourReport> {
    let tour = TourBuilder::new(method).build(points)?;
    Ok(TourReport::from_tour(tour, method))
}

/// Read the configured input, build the tour and write it to `out`
///
/// Nothing is written when reading or tour construction fails.
pub fn run<W: Write>(settings: &Settings, out: W) -> Result<TourReport> {
    let reader = PointReader::new(&settings.input)?;
    let points = reader.read_path(&settings.input.path)?;

    let method = settings.tour.method;
    info!("Building tour over {} points using {}", points.len(), method);

    let report = plan(points, method)?;
    info!(
        "Tour covers {} stops, {:.1} km",
        report.stops.len(),
        report.total_distance_km
    );

    write_report(out, &report, settings.output.format)?;
    Ok(report)
}

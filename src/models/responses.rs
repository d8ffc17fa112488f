use serde::{Deserialize, Serialize};

use crate::core::distance::DistanceMethod;
use crate::models::domain::Tour;

/// Serializable summary of a finished tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourReport {
    pub method: DistanceMethod,
    #[serde(rename = "totalDistanceKm")]
    pub total_distance_km: f64,
    pub stops: Vec<TourStop>,
}

/// One visited point with the length of the hop that reached it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourStop {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "legKm")]
    pub leg_km: f64,
}

impl TourReport {
    pub fn from_tour(tour: Tour, method: DistanceMethod) -> Self {
        let legs = tour.legs(&method);
        let total_distance_km = legs.iter().sum();

        let stops = tour
            .into_points()
            .into_iter()
            .zip(legs)
            .map(|(point, leg_km)| TourStop {
                name: point.name,
                latitude: point.latitude,
                longitude: point.longitude,
                leg_km,
            })
            .collect();

        Self {
            method,
            total_distance_km,
            stops,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tour::build_tour;
    use crate::models::Point;

    #[test]
    fn test_report_from_tour() {
        let tour = build_tour(vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 3.0),
            Point::new("C", 0.0, 1.0),
        ])
        .unwrap();

        let report = TourReport::from_tour(tour, DistanceMethod::Haversine);

        assert_eq!(report.names().collect::<Vec<_>>(), vec!["A", "C", "B"]);
        assert_eq!(report.stops[0].leg_km, 0.0);
        let sum: f64 = report.stops.iter().map(|s| s.leg_km).sum();
        assert!((report.total_distance_km - sum).abs() < 1e-9);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = TourReport {
            method: DistanceMethod::Equirectangular,
            total_distance_km: 0.0,
            stops: vec![TourStop {
                name: "A".to_string(),
                latitude: 1.0,
                longitude: 2.0,
                leg_km: 0.0,
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["method"], "equirectangular");
        assert!(json.get("totalDistanceKm").is_some());
        assert!(json["stops"][0].get("legKm").is_some());
    }
}

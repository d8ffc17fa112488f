use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

use crate::config::InputSettings;
use crate::models::Point;

/// Errors that can occur while reading a point list
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("Malformed point on line {line}: {reason}")]
    MalformedPoint { line: u64, reason: String },
}

/// Raw record before coordinates are trusted
#[derive(Debug, Validate)]
struct PointRecord {
    #[validate(length(min = 1))]
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Reads `<name><delimiter><latitude><delimiter><longitude>` lines
///
/// Blank and whitespace-only lines are skipped and columns past the third
/// are ignored. Coordinates are always trimmed; names only when `trim` is set.
#[derive(Debug, Clone)]
pub struct PointReader {
    delimiter: u8,
    has_headers: bool,
    quoting: bool,
    trim: Trim,
}

impl PointReader {
    pub fn new(settings: &InputSettings) -> Result<Self, ReaderError> {
        let delimiter = u8::try_from(settings.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(ReaderError::InvalidDelimiter(settings.delimiter))?;

        Ok(Self {
            delimiter,
            has_headers: settings.has_headers,
            quoting: settings.quoting,
            trim: if settings.trim { Trim::All } else { Trim::None },
        })
    }

    /// Read every point from a file, preserving file order
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Point>, ReaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let points = self.read_from(file)?;
        tracing::info!("Loaded {} points from {}", points.len(), path.display());
        Ok(points)
    }

    /// Read every point from any byte source, preserving source order
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Point>, ReaderError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .quoting(self.quoting)
            .flexible(true)
            .trim(self.trim)
            .from_reader(source);

        let mut points = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            points.push(parse_record(&record)?);
        }

        Ok(points)
    }
}

fn parse_record(record: &StringRecord) -> Result<Point, ReaderError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let malformed = |reason: String| ReaderError::MalformedPoint { line, reason };

    let field = |index: usize, label: &str| {
        record
            .get(index)
            .ok_or_else(|| malformed(format!("missing {}", label)))
    };
    let coordinate = |index: usize, label: &str| {
        let raw = field(index, label)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| malformed(format!("invalid {} {:?}: {}", label, raw, e)))
    };

    let parsed = PointRecord {
        name: field(0, "name")?.to_string(),
        latitude: coordinate(1, "latitude")?,
        longitude: coordinate(2, "longitude")?,
    };

    parsed
        .validate()
        .map_err(|errors| malformed(format!("invalid record: {}", errors)))?;

    Ok(Point::new(parsed.name, parsed.latitude, parsed.longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> PointReader {
        PointReader::new(&InputSettings::default()).unwrap()
    }

    #[test]
    fn test_reads_tab_separated_points() {
        let data = "Berlin\t52.52\t13.405\nMunich\t48.1351\t11.582\n";
        let points = reader().read_from(data.as_bytes()).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new("Berlin", 52.52, 13.405));
        assert_eq!(points[1].name, "Munich");
    }

    #[test]
    fn test_skips_blank_lines_and_extra_columns() {
        let data = "A\t1\t2\n\nB\t3\t4\tignored\n";
        let points = reader().read_from(data.as_bytes()).unwrap();

        let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_skips_whitespace_only_lines() {
        let data = "A\t1\t2\n   \n\t \t\nB\t3\t4\n";
        let points = reader().read_from(data.as_bytes()).unwrap();

        let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_whitespace_only_lines_skipped_without_trim() {
        let settings = InputSettings {
            trim: false,
            ..InputSettings::default()
        };
        let data = "A\t1\t2\n   \nB\t3\t4\n";
        let points = PointReader::new(&settings).unwrap().read_from(data.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_trim_strips_name_padding() {
        let data = "  Berlin  \t 52.52 \t13.405\n";
        let points = reader().read_from(data.as_bytes()).unwrap();
        assert_eq!(points[0], Point::new("Berlin", 52.52, 13.405));
    }

    #[test]
    fn test_without_trim_names_keep_padding() {
        let settings = InputSettings {
            trim: false,
            ..InputSettings::default()
        };
        let data = "  Berlin  \t 52.52 \t13.405\n";
        let points = PointReader::new(&settings).unwrap().read_from(data.as_bytes()).unwrap();
        assert_eq!(points[0], Point::new("  Berlin  ", 52.52, 13.405));
    }

    #[test]
    fn test_names_keep_spaces_and_quotes() {
        let data = "New \"Big Apple\" York\t40.7128\t-74.0060\n";
        let points = reader().read_from(data.as_bytes()).unwrap();
        assert_eq!(points[0].name, "New \"Big Apple\" York");
        assert_eq!(points[0].longitude, -74.0060);
    }

    #[test]
    fn test_missing_longitude_is_malformed() {
        let data = "A\t1\t2\nB\t3\n";
        let err = reader().read_from(data.as_bytes()).unwrap_err();
        match err {
            ReaderError::MalformedPoint { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("longitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparsable_latitude_is_malformed() {
        let err = reader().read_from("A\tnorth\t2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReaderError::MalformedPoint { line: 1, .. }));
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let err = reader().read_from("\t1\t2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReaderError::MalformedPoint { .. }));
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        let points = reader().read_from("X\t123.0\t-400.0\n".as_bytes()).unwrap();
        assert_eq!(points[0].latitude, 123.0);
        assert_eq!(points[0].longitude, -400.0);
    }

    #[test]
    fn test_comma_delimiter_with_headers() {
        let settings = InputSettings {
            delimiter: ',',
            has_headers: true,
            ..InputSettings::default()
        };
        let data = "name,lat,lon\nA,1.5,2.5\n";
        let points = PointReader::new(&settings).unwrap().read_from(data.as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new("A", 1.5, 2.5)]);
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let settings = InputSettings {
            delimiter: '→',
            ..InputSettings::default()
        };
        assert!(matches!(
            PointReader::new(&settings),
            Err(ReaderError::InvalidDelimiter('→'))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = reader().read_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
    }
}

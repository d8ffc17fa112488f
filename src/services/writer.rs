use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::models::TourReport;

/// Errors that can occur while writing a tour
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// How a finished tour is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One point name per line in visiting order
    #[default]
    Text,
    /// Pretty-printed report with coordinates and leg distances
    Json,
}

/// Write `report` to `writer` in the requested format
pub fn write_report<W: Write>(
    mut writer: W,
    report: &TourReport,
    format: OutputFormat,
) -> Result<(), WriterError> {
    match format {
        OutputFormat::Text => {
            for name in report.names() {
                writeln!(writer, "{}", name)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

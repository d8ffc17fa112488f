// Service exports
pub mod reader;
pub mod writer;

pub use reader::{PointReader, ReaderError};
pub use writer::{write_report, OutputFormat, WriterError};

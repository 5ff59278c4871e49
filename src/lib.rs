//! suggest2csv - Export location suggestions for a city to CSV

pub mod api;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod export;

pub use config::{ConverterConfig, FileConfig};
pub use converter::{ConversionSummary, CsvConverter, default_output_path};
pub use error::{Error, ErrorKind, Result};

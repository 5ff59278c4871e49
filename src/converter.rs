use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::SuggestClient;
use crate::config::ConverterConfig;
use crate::domain::map_rows;
use crate::error::Result;
use crate::export::write_csv;

/// Outcome of a successful [`CsvConverter::generate_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Turns the suggestions for one city into a CSV file.
#[derive(Debug)]
pub struct CsvConverter {
    config: ConverterConfig,
    client: SuggestClient,
}

impl CsvConverter {
    pub fn new(config: ConverterConfig) -> Result<Self> {
        let client = SuggestClient::new(config.timeout)?;
        Ok(Self { config, client })
    }

    /// Fetch, map, then write to `output`.
    ///
    /// Every placemark is mapped before the file is opened, so a network,
    /// parse, or missing-field error leaves no file behind.
    pub fn generate_csv(&self, output: &Path) -> Result<ConversionSummary> {
        let placemarks = self
            .client
            .fetch_placemarks(&self.config.base_url, &self.config.city)?;
        info!(city = %self.config.city, placemarks = placemarks.len(), "fetched suggestions");

        let rows = map_rows(&placemarks)?;
        let rows = write_csv(output, &rows)?;

        Ok(ConversionSummary {
            path: output.to_path_buf(),
            rows,
        })
    }
}

/// `<city>.csv`, relative to the working directory.
pub fn default_output_path(city: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", city))
}

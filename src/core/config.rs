//! Explicit aggregation configuration. Every operation takes this struct
//! instead of relying on ambient working-directory state.
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::features::FeatureTable;
use crate::error::{Error, Result};

/// Numeric value that source rasters use to mean "no data".
pub const DEFAULT_SENTINEL: f64 = 9999.0;

/// Configuration for one aggregation run, suitable for config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateConfig {
    /// Directory holding the year-prefixed raster files.
    pub src_dir: PathBuf,
    /// Directory receiving per-year CSVs (under `years/`) and `weather.csv`.
    pub dst_dir: PathBuf,
    /// First year of the inclusive range.
    pub year_start: i32,
    /// Last year of the inclusive range.
    pub year_end: i32,
    /// Sentinel value translated to missing at ingestion.
    pub sentinel: f64,
    pub features: FeatureTable,
}

impl AggregateConfig {
    pub fn new(src_dir: &Path, dst_dir: &Path, year_start: i32, year_end: i32) -> Self {
        Self {
            src_dir: src_dir.to_path_buf(),
            dst_dir: dst_dir.to_path_buf(),
            year_start,
            year_end,
            sentinel: DEFAULT_SENTINEL,
            features: FeatureTable::era5_weather(),
        }
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.year_start..=self.year_end
    }

    pub fn years_dir(&self) -> PathBuf {
        self.dst_dir.join("years")
    }

    pub fn year_csv_path(&self, year: i32) -> PathBuf {
        self.years_dir().join(format!("{}.csv", year))
    }

    pub fn weather_csv_path(&self) -> PathBuf {
        self.dst_dir.join("weather.csv")
    }

    pub fn validate(&self) -> Result<()> {
        if self.year_start > self.year_end {
            return Err(Error::InvalidYearRange {
                start: self.year_start,
                end: self.year_end,
            });
        }
        Ok(())
    }
}

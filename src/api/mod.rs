//! High-level, ergonomic library API: relabel patch directories, extract
//! per-year sample tables from rasters, and reduce them into the final
//! mean-per-point table. Prefer these entrypoints over low-level core
//! modules when integrating okaprep.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::config::AggregateConfig;
use crate::core::reduce::{YearAccumulator, rename_with_units};
use crate::core::table::SampleTable;
use crate::error::{Error, Result};
use crate::io::gdal::GdalRasterReader;
use crate::io::points::load_points;
use crate::io::tables::{list_year_tables, read_table, write_table};
use crate::types::SamplePoint;

pub use crate::core::relabel::{RelabelReport, relabel_patches};

/// Outcome of a full aggregation run.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    /// Years that produced a per-year table.
    pub years_written: Vec<i32>,
    /// Years in range with no matching raster files.
    pub years_skipped: Vec<i32>,
    /// Path of the final combined table.
    pub output: PathBuf,
}

/// Raster files for one year: names start with `<year>_` and carry a
/// `-`-separated source tag. Sorted for a deterministic merge order.
fn year_files(src_dir: &Path, year: i32) -> Result<Vec<PathBuf>> {
    let prefix = format!("{}_", year);
    let mut files = Vec::new();
    for entry in fs::read_dir(src_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(&prefix) && name.contains('-') {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Sample every raster of one year at the point set and merge the results.
///
/// Merge policy across a year's files: the first file's value is kept
/// unless missing, in which case the first later file with a non-missing
/// value fills it. Returns the written CSV path, or `None` when the year
/// has no data (a logged notice, not an error).
pub fn extract_year(
    config: &AggregateConfig,
    points: &[SamplePoint],
    year: i32,
) -> Result<Option<PathBuf>> {
    let files = year_files(&config.src_dir, year)?;
    if files.is_empty() {
        info!("No raster files for year {}, skipping", year);
        return Ok(None);
    }

    let mut merged: Option<SampleTable> = None;
    for file in &files {
        let reader = GdalRasterReader::open(file)?;
        let table = reader.sample_points(points, config.sentinel)?;
        match merged.as_mut() {
            None => merged = Some(table),
            Some(m) => m.fill_missing_from(&table)?,
        }
        info!("Sampled {:?} at {} points", file, points.len());
    }

    let merged = merged.expect("at least one file was sampled");
    if merged.is_empty() {
        info!("Empty merge result for year {}, nothing written", year);
        return Ok(None);
    }

    fs::create_dir_all(config.years_dir())?;
    let path = config.year_csv_path(year);
    write_table(&path, &merged)?;
    info!("Wrote {:?} ({} files merged)", path, files.len());
    Ok(Some(path))
}

/// Reduce the per-year tables of the configured range into one
/// mean-per-point table and write it as `weather.csv` with unit-suffixed
/// column names. Tables from years outside the range (stale files from an
/// earlier run) are ignored with a warning.
pub fn reduce_years(config: &AggregateConfig) -> Result<PathBuf> {
    let years_dir = config.years_dir();
    if !years_dir.is_dir() {
        return Err(Error::NoYearData(years_dir.display().to_string()));
    }
    let mut tables = list_year_tables(&years_dir)?;
    tables.retain(|(year, path)| {
        let in_range = config.years().contains(year);
        if !in_range {
            warn!("Ignoring {:?}: year {} outside configured range", path, year);
        }
        in_range
    });
    if tables.is_empty() {
        return Err(Error::NoYearData(years_dir.display().to_string()));
    }

    let mut accumulator: Option<YearAccumulator> = None;
    for (year, path) in &tables {
        let table = read_table(path)?;
        let acc = accumulator.get_or_insert_with(|| YearAccumulator::new(&table));
        acc.absorb(&table)?;
        info!("Absorbed year {} from {:?}", year, path);
    }

    let mut mean = accumulator
        .expect("tables is non-empty")
        .finish();
    rename_with_units(&mut mean, &config.features);

    let output = config.weather_csv_path();
    write_table(&output, &mean)?;
    info!("Wrote {:?} ({} years reduced)", output, tables.len());
    Ok(output)
}

/// Full aggregation: per-year extraction over the configured range, then
/// the cross-year reduction. Single-pass and fully synchronous; any I/O
/// failure aborts the run.
pub fn aggregate(config: &AggregateConfig, points_path: &Path) -> Result<AggregateReport> {
    config.validate()?;
    fs::create_dir_all(&config.dst_dir)?;

    let points = load_points(points_path)?;

    let mut years_written = Vec::new();
    let mut years_skipped = Vec::new();
    for year in config.years() {
        match extract_year(config, &points, year)? {
            Some(_) => years_written.push(year),
            None => years_skipped.push(year),
        }
    }

    let output = reduce_years(config)?;
    Ok(AggregateReport {
        years_written,
        years_skipped,
        output,
    })
}

//! CSV readers/writers for sample tables.
//!
//! Layout on disk: header `lon,lat,<column>...`, one row per sample point,
//! missing cells as empty fields. Reading back preserves point order,
//! column order, and missing positions.
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::table::SampleTable;
use crate::error::{Error, Result};
use crate::types::SamplePoint;

pub fn write_table(path: &Path, table: &SampleTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["lon".to_string(), "lat".to_string()];
    header.extend(table.columns().iter().cloned());
    writer.write_record(&header)?;

    for (point, cells) in table.points().iter().zip(table.rows()) {
        let mut record = vec![point.lon.to_string(), point.lat.to_string()];
        record.extend(cells.iter().map(|cell| match cell {
            Some(value) => value.to_string(),
            None => String::new(),
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_table(path: &Path) -> Result<SampleTable> {
    let malformed = |reason: String| Error::MalformedTable {
        path: path.display().to_string(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.len() < 2 || &headers[0] != "lon" || &headers[1] != "lat" {
        return Err(malformed("header must start with lon,lat".to_string()));
    }
    let columns: Vec<String> = headers.iter().skip(2).map(|h| h.to_string()).collect();

    let mut points = Vec::new();
    let mut cells = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != columns.len() + 2 {
            return Err(malformed(format!(
                "record {} has {} fields, expected {}",
                line + 1,
                record.len(),
                columns.len() + 2
            )));
        }
        let lon: f64 = record[0]
            .parse()
            .map_err(|_| malformed(format!("bad longitude at record {}", line + 1)))?;
        let lat: f64 = record[1]
            .parse()
            .map_err(|_| malformed(format!("bad latitude at record {}", line + 1)))?;
        points.push(SamplePoint::new(lon, lat));

        for field in record.iter().skip(2) {
            if field.is_empty() {
                cells.push(None);
            } else {
                let value: f64 = field.parse().map_err(|_| {
                    malformed(format!("bad value {:?} at record {}", field, line + 1))
                })?;
                cells.push(Some(value));
            }
        }
    }

    SampleTable::from_cells(points, columns, cells)
}

/// Enumerate `<year>.csv` files under a per-year output directory,
/// sorted by year.
pub fn list_year_tables(years_dir: &Path) -> Result<Vec<(i32, PathBuf)>> {
    let mut tables = Vec::new();
    for entry in fs::read_dir(years_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Ok(year) = stem.parse::<i32>() {
            tables.push((year, path));
        }
    }
    tables.sort_by_key(|(year, _)| *year);
    Ok(tables)
}

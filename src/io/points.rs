//! Sample point loading. The point table is a headered CSV whose first two
//! columns are longitude and latitude; it is read once and fixed for the
//! whole run.
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::types::SamplePoint;

pub fn load_points(path: &Path) -> Result<Vec<SamplePoint>> {
    let malformed = |reason: String| Error::MalformedTable {
        path: path.display().to_string(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            return Err(malformed(format!(
                "record {} has {} fields, expected at least 2",
                line + 1,
                record.len()
            )));
        }
        let lon: f64 = record[0]
            .trim()
            .parse()
            .map_err(|_| malformed(format!("bad longitude at record {}: {:?}", line + 1, &record[0])))?;
        let lat: f64 = record[1]
            .trim()
            .parse()
            .map_err(|_| malformed(format!("bad latitude at record {}: {:?}", line + 1, &record[1])))?;
        points.push(SamplePoint::new(lon, lat));
    }

    if points.is_empty() {
        return Err(malformed("no sample points".to_string()));
    }

    info!("Loaded {} sample points from {:?}", points.len(), path);
    Ok(points)
}

use gdal::{Dataset, Metadata, errors::GdalError as GdalCrateError};
use std::path::Path;
use thiserror::Error;

use crate::core::table::SampleTable;
use crate::types::SamplePoint;

/// Errors encountered when using the GDAL reader
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Rotated geotransform not supported: {0:?}")]
    RotatedTransform([f64; 6]),
}

/// Metadata extracted from a GDAL-supported dataset
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// Width (pixels) of the raster
    pub size_x: usize,
    /// Height (lines) of the raster
    pub size_y: usize,
    /// Number of raster bands
    pub bands: usize,
    /// Affine geotransform coefficients ([origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height])
    pub geotransform: [f64; 6],
    /// Projection in WKT format
    pub projection: String,
}

/// Reader for generic geospatial formats via GDAL
pub struct GdalRasterReader {
    pub dataset: Dataset,
    pub metadata: RasterMetadata,
}

// Helper to extract EPSG code from WKT authority tag
fn parse_epsg(wkt: &str) -> Option<String> {
    const KEY: &str = "AUTHORITY[\"EPSG\",\"";
    if let Some(idx) = wkt.rfind(KEY) {
        let start = idx + KEY.len();
        if let Some(end) = wkt[start..].find('"') {
            let code = &wkt[start..start + end];
            return Some(format!("EPSG:{}", code));
        }
    }
    None
}

impl GdalRasterReader {
    /// Open a GDAL-supported dataset (e.g., GeoTIFF, NetCDF, HDF5, ENVI)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let dataset = Dataset::open(path.as_ref())?;
        let (size_x, size_y) = dataset.raster_size();
        let bands = dataset.raster_count() as usize;
        if bands == 0 {
            return Err(RasterError::UnsupportedFormat(
                "No raster bands found".into(),
            ));
        }
        let geotransform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => [0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        };
        // Point sampling assumes a north-up grid
        if geotransform[2] != 0.0 || geotransform[4] != 0.0 {
            return Err(RasterError::RotatedTransform(geotransform));
        }
        let proj = dataset.projection();
        let projection = if proj.starts_with("EPSG:") {
            proj
        } else if let Some(code) = parse_epsg(&proj) {
            code
        } else {
            proj
        };
        Ok(GdalRasterReader {
            dataset,
            metadata: RasterMetadata {
                size_x: size_x as usize,
                size_y: size_y as usize,
                bands,
                geotransform,
                projection,
            },
        })
    }

    /// Column names for the sample table: the band description when the
    /// producer set one, otherwise `band_<i>`.
    pub fn band_names(&self) -> Result<Vec<String>, RasterError> {
        let mut names = Vec::with_capacity(self.metadata.bands);
        for idx in 1..=self.metadata.bands {
            let band = self.dataset.rasterband(idx)?;
            let description = band.description()?;
            if description.is_empty() {
                names.push(format!("band_{}", idx));
            } else {
                names.push(description);
            }
        }
        Ok(names)
    }

    /// Invert the geotransform: geographic coordinates to (col, row).
    /// Returns None when the point falls outside the raster.
    fn pixel_of(&self, point: &SamplePoint) -> Option<(isize, isize)> {
        let gt = self.metadata.geotransform;
        let col = ((point.lon - gt[0]) / gt[1]).floor();
        let row = ((point.lat - gt[3]) / gt[5]).floor();
        if col < 0.0
            || row < 0.0
            || col >= self.metadata.size_x as f64
            || row >= self.metadata.size_y as f64
        {
            return None;
        }
        Some((col as isize, row as isize))
    }

    /// Sample every band at every point. The configured sentinel, the
    /// band's own nodata value, and NaN all map to missing; points outside
    /// the raster sample as missing for every band.
    pub fn sample_points(
        &self,
        points: &[SamplePoint],
        sentinel: f64,
    ) -> Result<SampleTable, RasterError> {
        let columns = self.band_names()?;
        let mut table = SampleTable::new(points.to_vec(), columns);

        for band_idx in 1..=self.metadata.bands {
            let band = self.dataset.rasterband(band_idx)?;
            let nodata = band.no_data_value();

            for (row, point) in points.iter().enumerate() {
                let Some((px, py)) = self.pixel_of(point) else {
                    continue;
                };
                let buf = band.read_as::<f64>((px, py), (1, 1), (1, 1), None)?;
                let value = buf.data()[0];
                let cell = if value.is_nan() || value == sentinel || nodata == Some(value) {
                    None
                } else {
                    Some(value)
                };
                table.set(row, band_idx - 1, cell);
            }
        }

        Ok(table)
    }
}

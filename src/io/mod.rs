//! I/O layer: GDAL-backed raster reading and point sampling, the sample
//! point loader, and CSV readers/writers for sample tables.
pub mod gdal;
pub use gdal::{GdalRasterReader, RasterError, RasterMetadata};

pub mod points;
pub use points::load_points;

pub mod tables;
pub use tables::{list_year_tables, read_table, write_table};

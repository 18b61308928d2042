#![doc = r#"
okaprep — dataset preparation for satellite-based R. okamurae detection.

This crate provides a typed API for the two data-preparation workflows of the
detection project: relabeling class-labeled patch images into one training
directory, and aggregating yearly raster products into a single mean-per-point
weather table. It powers the okaprep CLI and can be embedded in your own Rust
applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start: aggregate yearly rasters
-------------------------------------
```rust,no_run
use std::path::Path;
use okaprep::{AggregateConfig, aggregate};

fn main() -> okaprep::Result<()> {
    let config = AggregateConfig::new(
        Path::new("/data/rasters"),
        Path::new("/out"),
        2016,
        2023,
    );

    let report = aggregate(&config, Path::new("/data/points.csv"))?;
    println!(
        "written={:?} skipped={:?} output={:?}",
        report.years_written, report.years_skipped, report.output
    );
    Ok(())
}
```

Per-year tables land at `<dst>/years/<year>.csv`; the final table at
`<dst>/weather.csv` carries unit-suffixed column names
(`<feature>_<stat>-<unit>`). Cells a year's rasters could not provide stay
missing; the cross-year mean is NA-aware, so a cell with no contribution at
all comes out missing rather than as a 0/0 artifact.

Relabel patch directories
-------------------------
```rust,no_run
use std::path::Path;
use okaprep::relabel_patches;

fn main() -> okaprep::Result<()> {
    let report = relabel_patches(
        Path::new("/data/patches/present"),
        Path::new("/data/patches/absent"),
        Path::new("/out/labeled"),
    )?;
    println!("present={} absent={}", report.present, report.absent);
    Ok(())
}
```

Error handling
--------------
All public functions return `okaprep::Result<T>`; match on `okaprep::Error`
to handle specific cases, e.g. raster reader or table layout errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — config, feature table, sample tables, and the reducer.
- [`io`] — GDAL reader, point loader, and table CSV I/O.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::config::{AggregateConfig, DEFAULT_SENTINEL};
pub use core::features::{Feature, FeatureTable};
pub use core::table::SampleTable;
pub use error::{Error, Result};
pub use types::{PatchClass, SamplePoint};

// Readers
pub use io::gdal::{GdalRasterReader, RasterError, RasterMetadata};

// High-level API re-exports
pub use api::{
    AggregateReport, RelabelReport, aggregate, extract_year, reduce_years, relabel_patches,
};

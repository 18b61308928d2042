use clap::{Parser, Subcommand};
use std::path::PathBuf;

use okaprep::core::config::DEFAULT_SENTINEL;

#[derive(Parser)]
#[command(name = "okaprep", version, about = "okaprep CLI")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Copy labeled patch images into one directory with a class-digit
    /// filename prefix ("1-" present, "0-" absent)
    Relabel {
        /// Directory of patches where the species is present
        #[arg(long)]
        present_dir: PathBuf,

        /// Directory of patches where the species is absent
        #[arg(long)]
        absent_dir: PathBuf,

        /// Destination directory for the relabeled copies
        #[arg(long)]
        output_dir: PathBuf,
    },

    /// Sample yearly rasters at fixed points, write one CSV per year,
    /// then reduce all years into a mean-per-point weather table
    Aggregate {
        /// Directory holding year-prefixed raster files (<year>_<source>-*.<ext>)
        #[arg(long)]
        src_dir: PathBuf,

        /// Output directory for years/<year>.csv and weather.csv
        #[arg(long)]
        dst_dir: PathBuf,

        /// CSV of sample point coordinates (longitude, latitude)
        #[arg(long)]
        points: PathBuf,

        /// First year of the inclusive range
        #[arg(long)]
        year_start: i32,

        /// Last year of the inclusive range
        #[arg(long)]
        year_end: i32,

        /// Numeric value treated as missing in source rasters
        #[arg(long, default_value_t = DEFAULT_SENTINEL)]
        sentinel: f64,
    },
}

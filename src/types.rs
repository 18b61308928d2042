//! Shared types used across okaprep: sample point coordinates and
//! patch class labels for the relabeling utility.
use serde::{Deserialize, Serialize};

/// A fixed geographic location at which raster values are sampled.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub lon: f64,
    pub lat: f64,
}

impl SamplePoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Class label of a patch image directory.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PatchClass {
    Present,
    Absent,
}

impl PatchClass {
    /// Digit prepended to relabeled filenames.
    pub fn digit(self) -> char {
        match self {
            PatchClass::Present => '1',
            PatchClass::Absent => '0',
        }
    }
}

impl std::fmt::Display for PatchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchClass::Present => write!(f, "Present"),
            PatchClass::Absent => write!(f, "Absent"),
        }
    }
}

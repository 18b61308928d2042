//! Patch relabeling: copy class-labeled patch images into one directory,
//! prefixing each filename with its class digit. Pixel data is untouched
//! beyond decode/re-encode; existing outputs are overwritten.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::PatchClass;

/// Per-class file counts from a relabeling run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelabelReport {
    pub present: usize,
    pub absent: usize,
}

/// Relabel both class directories into `output_dir`.
/// A file named `X.tif` under `present_dir` lands at `1-X.tif`; the same
/// name under `absent_dir` lands at `0-X.tif`, so both can coexist.
pub fn relabel_patches(
    present_dir: &Path,
    absent_dir: &Path,
    output_dir: &Path,
) -> Result<RelabelReport> {
    fs::create_dir_all(output_dir)?;

    let present = relabel_class(present_dir, output_dir, PatchClass::Present)?;
    let absent = relabel_class(absent_dir, output_dir, PatchClass::Absent)?;

    info!(
        "Relabeled {} present and {} absent patches into {:?}",
        present, absent, output_dir
    );

    Ok(RelabelReport { present, absent })
}

fn relabel_class(src_dir: &Path, output_dir: &Path, class: PatchClass) -> Result<usize> {
    let mut relabeled = 0;

    for entry in fs::read_dir(src_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let output_path = output_dir.join(format!("{}-{}", class.digit(), name));

        // Decode failures propagate; no partial-write cleanup.
        let patch = image::open(&path)?;
        patch.save(&output_path)?;
        relabeled += 1;
    }

    info!("{}: {} patches from {:?}", class, relabeled, src_dir);
    Ok(relabeled)
}

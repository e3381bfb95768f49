//! Writing composited stimuli to the output directory

use crate::compose::Canvas;
use crate::io::configuration::FILE_TYPE;
use crate::io::error::{Result, StimulusError};
use std::path::{Path, PathBuf};

/// Output path for one stimulus: `<output_dir>/<file_stem>.<ext>`
pub fn stimulus_path(output_dir: &Path, file_stem: &str) -> PathBuf {
    output_dir.join(format!("{file_stem}.{FILE_TYPE}"))
}

/// Save a canvas to `path`, creating parent directories as needed
///
/// Existing files of the same name are overwritten; re-running the generator
/// regenerates the full set in place.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_stimulus(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StimulusError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    canvas
        .image()
        .save(path)
        .map_err(|source| StimulusError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}

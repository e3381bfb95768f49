//! Asset sources: where component images come from
//!
//! The generator resolves assets through this trait so that tests can
//! substitute in-memory fixtures for the component directory.

use crate::assets::key::AssetKey;
use crate::io::configuration::FILE_TYPE;
use crate::io::error::{Result, StimulusError};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves an asset key to a decoded RGBA image
pub trait AssetSource {
    /// Load the asset identified by `key`
    ///
    /// # Errors
    ///
    /// Returns `AssetNotFound` if no asset matches the key, or `ImageLoad`
    /// if the asset exists but cannot be decoded.
    fn load(&self, key: &AssetKey) -> Result<RgbaImage>;
}

/// Filesystem source reading `<dir>/<name>.<ext>` component files
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
    extension: &'static str,
}

impl DirSource {
    /// Create a source over a component directory using the standard extension
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: FILE_TYPE,
        }
    }

    fn asset_path(&self, key: &AssetKey) -> PathBuf {
        self.dir.join(format!("{}.{}", key.name(), self.extension))
    }
}

impl AssetSource for DirSource {
    fn load(&self, key: &AssetKey) -> Result<RgbaImage> {
        let path = self.asset_path(key);
        if !path.is_file() {
            return Err(StimulusError::AssetNotFound {
                name: key.name(),
                path,
            });
        }
        let img = image::open(&path).map_err(|source| StimulusError::ImageLoad {
            path: path.clone(),
            source,
        })?;
        Ok(img.into_rgba8())
    }
}

/// In-memory source backed by a name-to-image map, for tests
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    images: HashMap<String, RgbaImage>,
}

impl MemorySource {
    /// Create an empty in-memory source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under an asset name
    pub fn insert(&mut self, name: impl Into<String>, image: RgbaImage) {
        self.images.insert(name.into(), image);
    }
}

impl AssetSource for MemorySource {
    fn load(&self, key: &AssetKey) -> Result<RgbaImage> {
        let name = key.name();
        self.images
            .get(&name)
            .cloned()
            .ok_or_else(|| StimulusError::AssetNotFound {
                name: name.clone(),
                path: PathBuf::from(format!("<memory>/{name}")),
            })
    }
}

//! Caching layer over an asset source
//!
//! Assets are immutable once loaded, so each key is loaded at most once per
//! run and served from the cache afterwards. The library optionally applies
//! background keying at load time for families whose source assets are drawn
//! on flat white instead of carrying real transparency.

use crate::assets::key::AssetKey;
use crate::assets::source::AssetSource;
use crate::compose::mask::key_background;
use crate::io::error::Result;
use image::RgbaImage;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Read-only asset store with per-name caching
#[derive(Debug)]
pub struct AssetLibrary<S> {
    source: S,
    cache: HashMap<String, RgbaImage>,
    key_white: bool,
}

impl<S: AssetSource> AssetLibrary<S> {
    /// Create a library over a source, assets used as-is
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            key_white: false,
        }
    }

    /// Enable background keying: exact-white pixels become fully transparent
    /// in every loaded asset
    pub fn with_background_keying(mut self) -> Self {
        self.key_white = true;
        self
    }

    /// Fetch an asset, loading it through the source on first use
    ///
    /// # Errors
    ///
    /// Propagates `AssetNotFound` and `ImageLoad` from the source.
    pub fn get(&mut self, key: &AssetKey) -> Result<&RgbaImage> {
        match self.cache.entry(key.name()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut img = self.source.load(key)?;
                if self.key_white {
                    key_background(&mut img);
                }
                Ok(entry.insert(img))
            }
        }
    }

    /// Number of distinct assets currently cached
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

//! Feature axis primitives shared by all stimulus families

use crate::assets::{AssetLibrary, AssetSource};
use crate::compose::Canvas;
use crate::io::error::Result;
use image::Rgb;

/// Ordered name-to-color axis
///
/// Stored as a list of pairs rather than a map: iteration order determines
/// both the enumeration order and the derived filenames, so it must be
/// explicit and reproducible.
#[derive(Debug, Clone)]
pub struct ColorTable {
    entries: Vec<(&'static str, Rgb<u8>)>,
}

impl ColorTable {
    /// Build a table from `(name, rgb)` pairs in their declared order
    pub fn new(entries: &[(&'static str, [u8; 3])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(name, rgb)| (name, Rgb(rgb)))
                .collect(),
        }
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rgb<u8>)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of colors in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One family of stimuli generated from a fixed set of feature axes
///
/// `combinations` enumerates the full Cartesian product of the axes in
/// declared order; `assemble` deterministically composites one combination;
/// `file_stem` must be injective over the product so no two combinations
/// collide on disk.
pub trait StimulusFamily {
    /// One selection of exactly one value per feature axis
    type Features;

    /// Family name used for reporting
    fn name(&self) -> &'static str;

    /// Whether component assets need flat-white backgrounds keyed out
    fn keys_background(&self) -> bool {
        false
    }

    /// Enumerate every feature combination in declared axis order
    fn combinations(&self) -> Vec<Self::Features>;

    /// Output filename stem for one combination, without extension
    fn file_stem(&self, features: &Self::Features) -> String;

    /// Composite one combination onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Propagates asset resolution failures from the library.
    fn assemble<S: AssetSource>(
        &self,
        features: &Self::Features,
        assets: &mut AssetLibrary<S>,
    ) -> Result<Canvas>;
}

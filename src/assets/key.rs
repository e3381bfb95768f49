//! Typed identification of component assets
//!
//! Replaces ad-hoc path string concatenation: a key carries a category prefix
//! (e.g. `petal`), a variant name (e.g. `pointed`), or both, and resolves to
//! a single asset name.

use std::fmt;

/// Identifier for one component asset
///
/// At least one of prefix and variant is always present; the constructors
/// make an empty key unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    prefix: Option<String>,
    variant: Option<String>,
}

impl AssetKey {
    /// Key for a category prefix with a variant name, e.g. `petal` + `round`
    pub fn prefixed(prefix: &str, variant: impl fmt::Display) -> Self {
        Self {
            prefix: Some(prefix.to_owned()),
            variant: Some(variant.to_string()),
        }
    }

    /// Key for a category with a single asset and no variants, e.g. `wings`
    pub fn bare(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_owned()),
            variant: None,
        }
    }

    /// Key for a standalone asset name with no category prefix
    pub fn named(variant: impl fmt::Display) -> Self {
        Self {
            prefix: None,
            variant: Some(variant.to_string()),
        }
    }

    /// Resolved asset name: `<prefix>_<variant>`, or whichever half is present
    pub fn name(&self) -> String {
        match (&self.prefix, &self.variant) {
            (Some(prefix), Some(variant)) if !variant.is_empty() => {
                format!("{prefix}_{variant}")
            }
            (Some(prefix), _) => prefix.clone(),
            (None, Some(variant)) => variant.clone(),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

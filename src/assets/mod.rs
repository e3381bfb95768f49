//! Component asset resolution
//!
//! Assets are pre-made transparent image fragments identified by a category
//! prefix and an optional variant name. They are loaded read-only through an
//! injectable source (filesystem or in-memory fixture) and cached by name,
//! since assets are immutable once loaded.

/// Typed asset keys joining category prefix and variant name
pub mod key;
/// Caching asset library with optional background keying
pub mod library;
/// Asset sources: filesystem directory and in-memory fixtures
pub mod source;

pub use key::AssetKey;
pub use library::AssetLibrary;
pub use source::{AssetSource, DirSource, MemorySource};

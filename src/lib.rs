//! Batch generation of composited stimulus images for category-learning experiments
//!
//! The system resolves named component assets (petals, body segments, shells, legs),
//! composites them onto fixed-size canvases with recoloring and rotation, and writes
//! one output image per feature combination of each stimulus family.

#![forbid(unsafe_code)]

/// Component asset keys, sources, and the caching asset library
pub mod assets;
/// Canvas compositing primitives: color-mask tinting, rotation, centered placement
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Stimulus family definitions and feature enumeration
pub mod stimuli;

pub use io::error::{Result, StimulusError};

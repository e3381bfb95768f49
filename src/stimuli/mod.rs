//! Stimulus families and feature enumeration
//!
//! Each family declares a fixed set of feature axes and assembles one canvas
//! per point in their Cartesian product. Axis tables are immutable values
//! held by the family, so tests can substitute reduced tables.

/// Feature axis primitives and the family trait
pub mod features;
/// Flower stimuli: colored center, petals and sepals arranged radially
pub mod flowers;
/// Insect stimuli: antennae, legs, stacked body segments, translucent wings
pub mod insects;
/// Turtle stimuli: shell, head, legs, tail, and spot overlays at fixed offsets
pub mod turtles;

pub use features::{ColorTable, StimulusFamily};
pub use flowers::FlowerFamily;
pub use insects::InsectFamily;
pub use turtles::TurtleFamily;

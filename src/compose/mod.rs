//! Canvas compositing primitives
//!
//! A stimulus is assembled by pasting recolored component parts onto an
//! opaque canvas. Parts act as stencils: their alpha channel decides where
//! paint lands, their own RGB is ignored (color-mask semantics), so one
//! grayscale asset renders in arbitrary colors.

/// Mutable canvas with centered and rotated paste operations
pub mod canvas;
/// Color-mask tinting, alpha scaling, and background keying
pub mod mask;
/// Part rotation with expanded bounds
pub mod rotate;

pub use canvas::Canvas;
pub use mask::{key_background, set_alpha, tint};
pub use rotate::rotate_expanded;

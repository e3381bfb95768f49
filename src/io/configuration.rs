//! Canvas geometry and output constants shared by all stimulus families

/// Width of every stimulus canvas in pixels
pub const CANVAS_WIDTH: u32 = 500;
/// Height of every stimulus canvas in pixels
pub const CANVAS_HEIGHT: u32 = 500;

/// Opaque background color for freshly created canvases
pub const CANVAS_COLOR: [u8; 3] = [255, 255, 255];

/// File extension for component and output images (lossless, alpha-capable)
pub const FILE_TYPE: &str = "png";

/// Default directory searched for component images
pub const DEFAULT_COMPONENT_DIR: &str = "Components";
/// Default directory for generated stimulus images
pub const DEFAULT_OUTPUT_DIR: &str = "images";

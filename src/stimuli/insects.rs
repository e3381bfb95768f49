//! Insect stimuli: antennae, legs, a stacked segment body, translucent wings
//!
//! The body is built from one segment asset resized so that the stack always
//! fills the same total height regardless of segment count. Wings render at
//! two-thirds opacity so the body stays visible underneath.

use crate::assets::{AssetKey, AssetLibrary, AssetSource};
use crate::compose::{Canvas, set_alpha};
use crate::io::configuration::{CANVAS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::io::error::Result;
use crate::stimuli::features::{ColorTable, StimulusFamily};
use image::Rgb;
use image::imageops::{self, FilterType};

/// Asset category for antennae clusters
pub const ANTENNAE_PREFIX: &str = "antennae";
/// Asset name for the leg part (single variant)
pub const LEG_PREFIX: &str = "legs";
/// Asset category for body segment shapes
pub const SEGMENT_PREFIX: &str = "segment";
/// Asset name for the wing part (single variant)
pub const WING_PREFIX: &str = "wings";

/// Width of a resized body segment in pixels
pub const BODY_WIDTH: u32 = 100;
/// Total body height in pixels, divided among the segments
pub const BODY_HEIGHT: u32 = 250;

/// Opacity factor applied to wings
pub const WING_ALPHA: f32 = 2.0 / 3.0;

const BODY_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const LEG_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

const ANTENNAE_OFFSET: (f64, f64) = (0.0, -150.0);
const LEG_OFFSET: (f64, f64) = (0.0, 48.0);
const WING_OFFSET: (f64, f64) = (0.0, 25.0);

const FILE_PREFIX: &str = "insect";

/// Height of one body segment for a given segment count (integer division)
pub const fn segment_height(count: u32) -> u32 {
    if count == 0 { 0 } else { BODY_HEIGHT / count }
}

/// Vertical center offsets for each stacked segment
///
/// The stack of `count` segments of truncated height is centered about the
/// canvas vertical center, so two segments sit at -62.5 and +62.5.
pub fn segment_offsets(count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let seg_h = f64::from(segment_height(count));
    let centering = f64::from(count - 1) * f64::from(BODY_HEIGHT) / (f64::from(count) * 2.0);
    (0..count).map(|i| f64::from(i) * seg_h - centering).collect()
}

/// Vertical center offsets for each wing, equally spaced along the body
pub fn wing_offsets(count: u32) -> Vec<f64> {
    let step = f64::from(BODY_HEIGHT) / f64::from(count + 1);
    (1..=count)
        .map(|i| WING_OFFSET.1 + f64::from(i) * step - f64::from(BODY_HEIGHT) / 2.0)
        .collect()
}

/// Feature axes for the insect family
///
/// Wing count is fixed rather than an axis; the draw logic stays generic
/// over the count but the experiment settled on a single wing pair.
#[derive(Debug, Clone)]
pub struct InsectFamily {
    segment_counts: Vec<u32>,
    segment_shapes: Vec<&'static str>,
    wing_count: u32,
    wing_colors: ColorTable,
    antennae_counts: Vec<u32>,
    antennae_colors: ColorTable,
}

impl Default for InsectFamily {
    fn default() -> Self {
        Self {
            segment_counts: vec![1, 2, 3],
            segment_shapes: vec!["circle", "triangle", "rectangle"],
            wing_count: 1,
            wing_colors: ColorTable::new(&[
                ("blue", [60, 0, 180]),
                ("yellow", [185, 160, 75]),
                ("green", [0, 200, 75]),
            ]),
            antennae_counts: vec![1, 2, 4],
            antennae_colors: ColorTable::new(&[
                ("purple", [205, 0, 255]),
                ("orange", [255, 40, 15]),
                ("lightblue", [55, 175, 255]),
            ]),
        }
    }
}

/// One insect: body segmentation, wing color, antennae count and color
#[derive(Debug, Clone)]
pub struct InsectFeatures {
    /// Number of stacked body segments
    pub segment_count: u32,
    /// Body segment shape variant
    pub segment_shape: &'static str,
    /// Wing color name
    pub wing_color: &'static str,
    /// Wing fill color
    pub wing_rgb: Rgb<u8>,
    /// Antennae cluster variant
    pub antennae_count: u32,
    /// Antennae color name
    pub antennae_color: &'static str,
    /// Antennae fill color
    pub antennae_rgb: Rgb<u8>,
}

impl StimulusFamily for InsectFamily {
    type Features = InsectFeatures;

    fn name(&self) -> &'static str {
        "insects"
    }

    fn combinations(&self) -> Vec<InsectFeatures> {
        let mut combos = Vec::new();
        for &segment_count in &self.segment_counts {
            for &segment_shape in &self.segment_shapes {
                for (wing_color, wing_rgb) in self.wing_colors.iter() {
                    for &antennae_count in &self.antennae_counts {
                        for (antennae_color, antennae_rgb) in self.antennae_colors.iter() {
                            combos.push(InsectFeatures {
                                segment_count,
                                segment_shape,
                                wing_color,
                                wing_rgb,
                                antennae_count,
                                antennae_color,
                                antennae_rgb,
                            });
                        }
                    }
                }
            }
        }
        combos
    }

    fn file_stem(&self, f: &InsectFeatures) -> String {
        format!(
            "{FILE_PREFIX}_{}_{}_{}_{}_{}",
            f.segment_count, f.segment_shape, f.antennae_count, f.antennae_color, f.wing_color
        )
    }

    fn assemble<S: AssetSource>(
        &self,
        f: &InsectFeatures,
        assets: &mut AssetLibrary<S>,
    ) -> Result<Canvas> {
        let mut canvas = Canvas::new(Rgb(CANVAS_COLOR), CANVAS_WIDTH, CANVAS_HEIGHT);

        let antennae = assets.get(&AssetKey::prefixed(ANTENNAE_PREFIX, f.antennae_count))?;
        canvas.draw_centered(antennae, f.antennae_rgb, ANTENNAE_OFFSET.0, ANTENNAE_OFFSET.1);

        let legs = assets.get(&AssetKey::bare(LEG_PREFIX))?;
        canvas.draw_centered(legs, LEG_COLOR, LEG_OFFSET.0, LEG_OFFSET.1);

        let segment = assets.get(&AssetKey::prefixed(SEGMENT_PREFIX, f.segment_shape))?;
        let segment = imageops::resize(
            segment,
            BODY_WIDTH,
            segment_height(f.segment_count),
            FilterType::Lanczos3,
        );
        for dy in segment_offsets(f.segment_count) {
            canvas.draw_centered(&segment, BODY_COLOR, 0.0, dy);
        }

        let wing = set_alpha(assets.get(&AssetKey::bare(WING_PREFIX))?, WING_ALPHA);
        for dy in wing_offsets(self.wing_count) {
            canvas.draw_centered(&wing, f.wing_rgb, WING_OFFSET.0, dy);
        }

        Ok(canvas)
    }
}

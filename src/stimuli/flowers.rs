//! Flower stimuli: a colored center shape ringed by petals and sepals
//!
//! Petals sit at equal angular steps around the canvas center; sepals use the
//! same steps shifted by half a step and a negative radius, which places them
//! behind the flower on the opposite side of each gap.

use crate::assets::{AssetKey, AssetLibrary, AssetSource};
use crate::compose::Canvas;
use crate::io::configuration::{CANVAS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::io::error::Result;
use crate::stimuli::features::{ColorTable, StimulusFamily};
use image::Rgb;

/// Asset category for petal shapes
pub const PETAL_PREFIX: &str = "petal";
/// Asset category for center shapes
pub const CENTER_PREFIX: &str = "middle";
/// Asset category for sepal clusters
pub const SEPAL_PREFIX: &str = "sepal";

/// Distance of petal centers from the canvas center
pub const PETAL_RADIUS: f64 = 150.0;

const SEPAL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const FILE_PREFIX: &str = "stim";

/// Petal placement angles in degrees for a given petal count
///
/// The step is the integer division `360 / count`; any remainder is dropped,
/// so counts that do not divide 360 evenly leave a wider final gap. That is
/// the declared behavior, not a rounding bug.
pub fn petal_angles(count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360 / count;
    (0..count).map(|i| f64::from(i * step)).collect()
}

/// Sepal placement angles: petal angles shifted by half a step, truncated
pub fn sepal_angles(count: u32) -> Vec<f64> {
    petal_angles(count)
        .iter()
        .map(|angle| (angle + 180.0 / f64::from(count)).trunc())
        .collect()
}

/// Feature axes for the flower family
#[derive(Debug, Clone)]
pub struct FlowerFamily {
    petal_styles: Vec<&'static str>,
    petal_colors: ColorTable,
    petal_counts: Vec<u32>,
    center_colors: ColorTable,
    center_shapes: Vec<&'static str>,
    sepal_counts: Vec<u32>,
}

impl Default for FlowerFamily {
    fn default() -> Self {
        Self {
            petal_styles: vec!["pointed", "concave", "round"],
            petal_colors: ColorTable::new(&[
                ("blue", [60, 0, 180]),
                ("pink", [190, 0, 125]),
                ("yellow", [185, 160, 75]),
                ("green", [0, 200, 75]),
            ]),
            petal_counts: vec![2, 4, 6, 8],
            center_colors: ColorTable::new(&[
                ("purple", [205, 0, 255]),
                ("orange", [255, 40, 15]),
                ("brightgreen", [0, 255, 60]),
                ("lightblue", [55, 175, 255]),
            ]),
            center_shapes: vec!["circle", "triangle", "square", "star"],
            sepal_counts: vec![0, 1, 2, 3],
        }
    }
}

/// One flower: petal style, color and count, center shape and color, sepals
#[derive(Debug, Clone)]
pub struct FlowerFeatures {
    /// Petal outline variant
    pub petal_style: &'static str,
    /// Petal color name
    pub petal_color: &'static str,
    /// Petal fill color
    pub petal_rgb: Rgb<u8>,
    /// Number of petals around the center
    pub petal_count: u32,
    /// Center color name
    pub center_color: &'static str,
    /// Center fill color
    pub center_rgb: Rgb<u8>,
    /// Center shape variant
    pub center_shape: &'static str,
    /// Sepal cluster variant (0 is a valid, empty-looking cluster)
    pub sepal_count: u32,
}

impl StimulusFamily for FlowerFamily {
    type Features = FlowerFeatures;

    fn name(&self) -> &'static str {
        "flowers"
    }

    // Flower components are painted on flat white with no alpha channel
    fn keys_background(&self) -> bool {
        true
    }

    fn combinations(&self) -> Vec<FlowerFeatures> {
        let mut combos = Vec::new();
        for &petal_style in &self.petal_styles {
            for (petal_color, petal_rgb) in self.petal_colors.iter() {
                for &petal_count in &self.petal_counts {
                    for (center_color, center_rgb) in self.center_colors.iter() {
                        for &center_shape in &self.center_shapes {
                            for &sepal_count in &self.sepal_counts {
                                combos.push(FlowerFeatures {
                                    petal_style,
                                    petal_color,
                                    petal_rgb,
                                    petal_count,
                                    center_color,
                                    center_rgb,
                                    center_shape,
                                    sepal_count,
                                });
                            }
                        }
                    }
                }
            }
        }
        combos
    }

    fn file_stem(&self, f: &FlowerFeatures) -> String {
        format!(
            "{FILE_PREFIX}_{}_{}_{}_{}_{}_{}",
            f.petal_style,
            f.petal_count,
            f.petal_color,
            f.center_shape,
            f.center_color,
            f.sepal_count
        )
    }

    fn assemble<S: AssetSource>(
        &self,
        f: &FlowerFeatures,
        assets: &mut AssetLibrary<S>,
    ) -> Result<Canvas> {
        let mut canvas = Canvas::new(Rgb(CANVAS_COLOR), CANVAS_WIDTH, CANVAS_HEIGHT);

        let center = assets.get(&AssetKey::prefixed(CENTER_PREFIX, f.center_shape))?;
        canvas.draw_centered(center, f.center_rgb, 0.0, 0.0);

        let petal = assets.get(&AssetKey::prefixed(PETAL_PREFIX, f.petal_style))?;
        for angle in petal_angles(f.petal_count) {
            canvas.draw_rotated(petal, f.petal_rgb, angle, PETAL_RADIUS, 0.0, 0.0);
        }

        let sepal = assets.get(&AssetKey::prefixed(SEPAL_PREFIX, f.sepal_count))?;
        for angle in sepal_angles(f.petal_count) {
            canvas.draw_rotated(sepal, SEPAL_COLOR, angle, -PETAL_RADIUS, 0.0, 0.0);
        }

        Ok(canvas)
    }
}

//! Turtle stimuli: shell, head, legs, tail, and spot overlay at fixed offsets
//!
//! No rotation or resizing here; every part lands at a fixed offset from the
//! canvas center. Head, legs, and tail share the leg color so the body reads
//! as one animal.

use crate::assets::{AssetKey, AssetLibrary, AssetSource};
use crate::compose::Canvas;
use crate::io::configuration::{CANVAS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::io::error::Result;
use crate::stimuli::features::{ColorTable, StimulusFamily};
use image::Rgb;

/// Asset category for shell shapes
pub const SHELL_PREFIX: &str = "shell_short";
/// Asset category for head shapes
pub const HEAD_PREFIX: &str = "head";
/// Asset category for leg shapes
pub const LEG_PREFIX: &str = "legs_short";
/// Asset category for tail variants
pub const TAIL_PREFIX: &str = "tail";
/// Asset category for spot overlays
pub const SPOT_PREFIX: &str = "spots";

const SHELL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

const SHELL_OFFSET: (f64, f64) = (0.0, 12.5);
const HEAD_OFFSET: (f64, f64) = (0.0, -190.0);
const LEG_OFFSET: (f64, f64) = (0.0, 15.0);
const TAIL_OFFSET: (f64, f64) = (0.0, 200.0);
const SPOT_OFFSET: (f64, f64) = (0.0, 35.0);

const FILE_PREFIX: &str = "turtle";

/// Feature axes for the turtle family
#[derive(Debug, Clone)]
pub struct TurtleFamily {
    shell_shapes: Vec<&'static str>,
    spot_counts: Vec<u32>,
    spot_colors: ColorTable,
    head_shapes: Vec<&'static str>,
    tail_types: Vec<&'static str>,
    leg_shapes: Vec<&'static str>,
    leg_colors: ColorTable,
}

impl Default for TurtleFamily {
    fn default() -> Self {
        Self {
            shell_shapes: vec!["circle", "box"],
            spot_counts: vec![1, 3],
            spot_colors: ColorTable::new(&[
                ("orange", [255, 40, 15]),
                ("lightblue", [55, 175, 255]),
            ]),
            head_shapes: vec!["circle", "triangle"],
            tail_types: vec!["left", "right"],
            leg_shapes: vec!["fin", "turtle"],
            leg_colors: ColorTable::new(&[("pink", [190, 0, 125]), ("green", [0, 200, 75])]),
        }
    }
}

/// One turtle: shell, spots, head, tail, and leg variants
#[derive(Debug, Clone)]
pub struct TurtleFeatures {
    /// Shell shape variant
    pub shell_shape: &'static str,
    /// Spot overlay variant
    pub spot_count: u32,
    /// Spot color name
    pub spot_color: &'static str,
    /// Spot fill color
    pub spot_rgb: Rgb<u8>,
    /// Head shape variant
    pub head_shape: &'static str,
    /// Tail orientation variant
    pub tail_type: &'static str,
    /// Leg shape variant
    pub leg_shape: &'static str,
    /// Color name shared by head, legs, and tail
    pub leg_color: &'static str,
    /// Fill color shared by head, legs, and tail
    pub leg_rgb: Rgb<u8>,
}

impl StimulusFamily for TurtleFamily {
    type Features = TurtleFeatures;

    fn name(&self) -> &'static str {
        "turtles"
    }

    fn combinations(&self) -> Vec<TurtleFeatures> {
        let mut combos = Vec::new();
        for &shell_shape in &self.shell_shapes {
            for &spot_count in &self.spot_counts {
                for (spot_color, spot_rgb) in self.spot_colors.iter() {
                    for &head_shape in &self.head_shapes {
                        for &tail_type in &self.tail_types {
                            for &leg_shape in &self.leg_shapes {
                                for (leg_color, leg_rgb) in self.leg_colors.iter() {
                                    combos.push(TurtleFeatures {
                                        shell_shape,
                                        spot_count,
                                        spot_color,
                                        spot_rgb,
                                        head_shape,
                                        tail_type,
                                        leg_shape,
                                        leg_color,
                                        leg_rgb,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
        combos
    }

    fn file_stem(&self, f: &TurtleFeatures) -> String {
        format!(
            "{FILE_PREFIX}_{}_{}_{}_{}_{}_{}_{}",
            f.shell_shape,
            f.spot_count,
            f.spot_color,
            f.head_shape,
            f.tail_type,
            f.leg_shape,
            f.leg_color
        )
    }

    fn assemble<S: AssetSource>(
        &self,
        f: &TurtleFeatures,
        assets: &mut AssetLibrary<S>,
    ) -> Result<Canvas> {
        let mut canvas = Canvas::new(Rgb(CANVAS_COLOR), CANVAS_WIDTH, CANVAS_HEIGHT);

        let shell = assets.get(&AssetKey::prefixed(SHELL_PREFIX, f.shell_shape))?;
        canvas.draw_centered(shell, SHELL_COLOR, SHELL_OFFSET.0, SHELL_OFFSET.1);

        let head = assets.get(&AssetKey::prefixed(HEAD_PREFIX, f.head_shape))?;
        canvas.draw_centered(head, f.leg_rgb, HEAD_OFFSET.0, HEAD_OFFSET.1);

        let legs = assets.get(&AssetKey::prefixed(LEG_PREFIX, f.leg_shape))?;
        canvas.draw_centered(legs, f.leg_rgb, LEG_OFFSET.0, LEG_OFFSET.1);

        let tail = assets.get(&AssetKey::prefixed(TAIL_PREFIX, f.tail_type))?;
        canvas.draw_centered(tail, f.leg_rgb, TAIL_OFFSET.0, TAIL_OFFSET.1);

        let spots = assets.get(&AssetKey::prefixed(SPOT_PREFIX, f.spot_count))?;
        canvas.draw_centered(spots, f.spot_rgb, SPOT_OFFSET.0, SPOT_OFFSET.1);

        Ok(canvas)
    }
}

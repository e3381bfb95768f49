//! Mutable stimulus canvas
//!
//! A canvas is created opaque, receives a fixed sequence of paste operations,
//! and is then exported and discarded. Pasting never changes the canvas
//! dimensions; parts that extend past the edge clip silently.

use crate::compose::mask::tint;
use crate::compose::rotate::rotate_expanded;
use image::{Rgb, Rgba, RgbaImage, imageops};

/// Fixed-size RGBA drawing surface for one stimulus
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create an opaque canvas filled with `color`
    pub fn new(color: Rgb<u8>, width: u32, height: u32) -> Self {
        let Rgb([r, g, b]) = color;
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying pixel buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, yielding the pixel buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paste a recolored part centered at canvas center + `(dx, dy)`
    ///
    /// The part is tinted to `color` through its alpha channel, then
    /// alpha-composited over the canvas. Fractional positions truncate
    /// toward zero.
    pub fn draw_centered(&mut self, part: &RgbaImage, color: Rgb<u8>, dx: f64, dy: f64) {
        let tinted = tint(part, color);
        let x = (dx + f64::from(self.width()) / 2.0 - f64::from(part.width()) / 2.0) as i64;
        let y = (dy + f64::from(self.height()) / 2.0 - f64::from(part.height()) / 2.0) as i64;
        imageops::overlay(&mut self.image, &tinted, x, y);
    }

    /// Paste a part rotated by `angle_degrees` and displaced `radius` along
    /// the angle's direction from canvas center + `(dx, dy)`
    ///
    /// Used to arrange repeated parts (petals, sepals) symmetrically around
    /// a pivot. A negative radius places the part on the opposite side.
    pub fn draw_rotated(
        &mut self,
        part: &RgbaImage,
        color: Rgb<u8>,
        angle_degrees: f64,
        radius: f64,
        dx: f64,
        dy: f64,
    ) {
        let rotated = rotate_expanded(part, angle_degrees);
        let theta = angle_degrees.to_radians();
        self.draw_centered(
            &rotated,
            color,
            dx + radius * theta.cos(),
            dy + radius * theta.sin(),
        );
    }
}

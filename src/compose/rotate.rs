//! Part rotation with expanded bounds
//!
//! Rotation never clips: the output buffer grows to the rotated bounding box
//! and uncovered corners are transparent. Right angles are handled exactly;
//! arbitrary angles use inverse nearest-neighbor mapping.

use image::{Rgba, RgbaImage, imageops};

const RIGHT_ANGLE_TOLERANCE: f64 = 1e-9;

/// Rotate a part counter-clockwise by `angle_degrees`, expanding bounds
pub fn rotate_expanded(part: &RgbaImage, angle_degrees: f64) -> RgbaImage {
    let angle = angle_degrees.rem_euclid(360.0);

    if angle.abs() < RIGHT_ANGLE_TOLERANCE || (angle - 360.0).abs() < RIGHT_ANGLE_TOLERANCE {
        return part.clone();
    }
    // imageops rotations are clockwise, so counter-clockwise quarter turns swap
    if (angle - 90.0).abs() < RIGHT_ANGLE_TOLERANCE {
        return imageops::rotate270(part);
    }
    if (angle - 180.0).abs() < RIGHT_ANGLE_TOLERANCE {
        return imageops::rotate180(part);
    }
    if (angle - 270.0).abs() < RIGHT_ANGLE_TOLERANCE {
        return imageops::rotate90(part);
    }

    rotate_arbitrary(part, angle)
}

// Inverse mapping with nearest-neighbor sampling. Screen coordinates have y
// pointing down, so a visual counter-clockwise rotation by theta maps a
// source offset (su, sv) to (su*cos + sv*sin, -su*sin + sv*cos).
fn rotate_arbitrary(part: &RgbaImage, angle: f64) -> RgbaImage {
    let theta = angle.to_radians();
    let (sin, cos) = theta.sin_cos();

    let w = f64::from(part.width());
    let h = f64::from(part.height());
    let new_w = (w * cos.abs() + h * sin.abs()).ceil() as u32;
    let new_h = (w * sin.abs() + h * cos.abs()).ceil() as u32;

    RgbaImage::from_fn(new_w, new_h, |x, y| {
        // Offsets from the respective image centers, sampled at pixel centers
        let u = f64::from(x) + 0.5 - f64::from(new_w) / 2.0;
        let v = f64::from(y) + 0.5 - f64::from(new_h) / 2.0;

        let su = u * cos - v * sin;
        let sv = u * sin + v * cos;

        let sx = (su + w / 2.0).floor();
        let sy = (sv + h / 2.0).floor();

        if sx >= 0.0 && sx < w && sy >= 0.0 && sy < h {
            *part.get_pixel(sx as u32, sy as u32)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

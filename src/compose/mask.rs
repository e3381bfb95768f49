//! Per-pixel channel operations on component parts

use image::{Rgb, Rgba, RgbaImage};

/// Recolor a part through its own alpha channel
///
/// The output keeps the part's alpha values verbatim and replaces RGB with
/// `color` everywhere, so the part becomes a stencil for an arbitrary fill
/// color regardless of how the source asset was painted.
pub fn tint(part: &RgbaImage, color: Rgb<u8>) -> RgbaImage {
    let Rgb([r, g, b]) = color;
    let mut out = part.clone();
    for pixel in out.pixels_mut() {
        let Rgba([_, _, _, a]) = *pixel;
        *pixel = Rgba([r, g, b, a]);
    }
    out
}

/// Scale every alpha value by `factor`, leaving RGB untouched
///
/// Used to render wings semi-transparent. Values are rounded and clamped to
/// the byte range, so factors outside `[0, 1]` saturate rather than wrap.
pub fn set_alpha(part: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = part.clone();
    for pixel in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let scaled = (f32::from(a) * factor).round().clamp(0.0, 255.0) as u8;
        *pixel = Rgba([r, g, b, scaled]);
    }
    out
}

/// Turn exact-white pixels fully transparent, in place
///
/// Source assets for the flower family are drawn on flat white with no real
/// alpha channel; keying recovers transparency. Only pixels whose RGB is
/// exactly `(255, 255, 255)` are keyed, near-white shading is preserved.
pub fn key_background(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r == 255 && g == 255 && b == 255 {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }
}

//! Tests for color-mask tinting, alpha scaling, and background keying

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};
    use stimgen::compose::{key_background, set_alpha, tint};

    #[test]
    fn test_tint_preserves_alpha_and_replaces_rgb() {
        let mut part = RgbaImage::from_pixel(3, 1, Rgba([90, 90, 90, 255]));
        part.put_pixel(1, 0, Rgba([10, 200, 30, 128]));
        part.put_pixel(2, 0, Rgba([1, 2, 3, 0]));

        let tinted = tint(&part, Rgb([60, 0, 180]));

        assert_eq!(*tinted.get_pixel(0, 0), Rgba([60, 0, 180, 255]));
        assert_eq!(*tinted.get_pixel(1, 0), Rgba([60, 0, 180, 128]));
        assert_eq!(tinted.get_pixel(2, 0).0[3], 0);
    }

    #[test]
    fn test_set_alpha_scales_every_alpha_value() {
        let mut part = RgbaImage::from_pixel(2, 1, Rgba([5, 5, 5, 255]));
        part.put_pixel(1, 0, Rgba([5, 5, 5, 60]));

        let faded = set_alpha(&part, 2.0 / 3.0);

        assert_eq!(faded.get_pixel(0, 0).0[3], 170);
        assert_eq!(faded.get_pixel(1, 0).0[3], 40);
        assert_eq!(&faded.get_pixel(0, 0).0[..3], &[5, 5, 5]);
    }

    #[test]
    fn test_set_alpha_saturates_out_of_range_factors() {
        let part = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 200]));
        assert_eq!(set_alpha(&part, 2.0).get_pixel(0, 0).0[3], 255);
        assert_eq!(set_alpha(&part, 0.0).get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_key_background_only_hits_exact_white() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([254, 255, 255, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 255]));

        key_background(&mut img);

        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(1, 0).0[3], 255, "near-white must survive");
        assert_eq!(img.get_pixel(2, 0).0[3], 255);
    }
}

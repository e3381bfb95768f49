//! Tests for centered pasting and canvas dimension stability

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};
    use stimgen::compose::Canvas;

    const RED: Rgb<u8> = Rgb([200, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn opaque_part(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]))
    }

    #[test]
    fn test_new_canvas_is_opaque_fill() {
        let canvas = Canvas::new(Rgb([1, 2, 3]), 8, 6);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 6);
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*canvas.image().get_pixel(7, 5), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_draw_centered_places_part_about_canvas_center() {
        let mut canvas = Canvas::new(WHITE, 10, 10);
        canvas.draw_centered(&opaque_part(2, 2), RED, 0.0, 0.0);

        // Top-left lands at center minus half the part size
        assert_eq!(*canvas.image().get_pixel(4, 4), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(5, 5), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(3, 3), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.image().get_pixel(6, 6), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_draw_centered_applies_offset() {
        let mut canvas = Canvas::new(WHITE, 10, 10);
        canvas.draw_centered(&opaque_part(2, 2), RED, 2.0, -2.0);

        assert_eq!(*canvas.image().get_pixel(6, 2), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(4, 4), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_transparent_part_pixels_leave_background() {
        let mut part = opaque_part(2, 1);
        part.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let mut canvas = Canvas::new(WHITE, 6, 6);
        canvas.draw_centered(&part, RED, 0.0, 0.0);

        assert_eq!(*canvas.image().get_pixel(2, 2), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(3, 2), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_canvas_dimensions_survive_any_paste() {
        let mut canvas = Canvas::new(WHITE, 10, 10);

        // Oversized part
        canvas.draw_centered(&opaque_part(30, 30), RED, 0.0, 0.0);
        assert_eq!((canvas.width(), canvas.height()), (10, 10));

        // Far off-canvas offsets clip silently
        canvas.draw_centered(&opaque_part(2, 2), RED, 100.0, -100.0);
        assert_eq!((canvas.width(), canvas.height()), (10, 10));

        canvas.draw_rotated(&opaque_part(4, 4), RED, 33.0, 50.0, 0.0, 0.0);
        assert_eq!((canvas.width(), canvas.height()), (10, 10));
    }

    #[test]
    fn test_fractional_offsets_truncate_toward_zero() {
        let mut canvas = Canvas::new(WHITE, 10, 10);
        // x = trunc(1.5 + 5 - 1) = 5
        canvas.draw_centered(&opaque_part(2, 2), RED, 1.5, 0.0);
        assert_eq!(*canvas.image().get_pixel(5, 4), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(4, 4), Rgba([255, 255, 255, 255]));
    }
}

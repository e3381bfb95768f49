//! Tests for turtle enumeration and fixed-offset assembly

#[cfg(test)]
mod tests {
    use image::{Rgb, Rgba, RgbaImage};
    use std::collections::HashSet;
    use stimgen::assets::{AssetLibrary, MemorySource};
    use stimgen::stimuli::turtles::TurtleFeatures;
    use stimgen::stimuli::{StimulusFamily, TurtleFamily};

    #[test]
    fn test_full_cartesian_product_is_enumerated() {
        let family = TurtleFamily::default();
        // 2 shells x 2 spot counts x 2 spot colors x 2 heads x 2 tails x 2 legs x 2 leg colors
        assert_eq!(family.combinations().len(), 128);
    }

    #[test]
    fn test_file_stems_are_injective() {
        let family = TurtleFamily::default();
        let combos = family.combinations();
        let stems: HashSet<String> = combos.iter().map(|f| family.file_stem(f)).collect();
        assert_eq!(stems.len(), combos.len());
    }

    #[test]
    fn test_file_stem_format() {
        let features = TurtleFeatures {
            shell_shape: "box",
            spot_count: 3,
            spot_color: "lightblue",
            spot_rgb: Rgb([55, 175, 255]),
            head_shape: "triangle",
            tail_type: "right",
            leg_shape: "fin",
            leg_color: "green",
            leg_rgb: Rgb([0, 200, 75]),
        };
        assert_eq!(
            TurtleFamily::default().file_stem(&features),
            "turtle_box_3_lightblue_triangle_right_fin_green"
        );
    }

    #[test]
    fn test_assemble_places_parts_at_fixed_offsets() {
        let part = RgbaImage::from_pixel(10, 10, Rgba([30, 30, 30, 255]));
        let mut source = MemorySource::new();
        source.insert("shell_short_circle", part.clone());
        source.insert("head_circle", part.clone());
        source.insert("legs_short_fin", part.clone());
        source.insert("tail_left", part.clone());
        source.insert("spots_1", part);

        let mut assets = AssetLibrary::new(source);
        let family = TurtleFamily::default();
        let features = TurtleFeatures {
            shell_shape: "circle",
            spot_count: 1,
            spot_color: "orange",
            spot_rgb: Rgb([255, 40, 15]),
            head_shape: "circle",
            tail_type: "left",
            leg_shape: "fin",
            leg_color: "pink",
            leg_rgb: Rgb([190, 0, 125]),
        };

        let canvas = family
            .assemble(&features, &mut assets)
            .expect("assembly should succeed");

        assert_eq!((canvas.width(), canvas.height()), (500, 500));
        // Head at (0, -190) shares the leg color
        assert_eq!(*canvas.image().get_pixel(250, 60), Rgba([190, 0, 125, 255]));
        // Tail at (0, 200) shares the leg color
        assert_eq!(*canvas.image().get_pixel(250, 450), Rgba([190, 0, 125, 255]));
        // Spot overlay at (0, 35) in the spot color, drawn last
        assert_eq!(*canvas.image().get_pixel(250, 285), Rgba([255, 40, 15, 255]));
        // Background stays white away from all parts
        assert_eq!(
            *canvas.image().get_pixel(100, 100),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn test_assemble_fails_fast_on_missing_component() {
        let mut assets = AssetLibrary::new(MemorySource::new());
        let family = TurtleFamily::default();
        let features = TurtleFeatures {
            shell_shape: "circle",
            spot_count: 1,
            spot_color: "orange",
            spot_rgb: Rgb([255, 40, 15]),
            head_shape: "circle",
            tail_type: "left",
            leg_shape: "fin",
            leg_color: "pink",
            leg_rgb: Rgb([190, 0, 125]),
        };
        assert!(family.assemble(&features, &mut assets).is_err());
    }
}

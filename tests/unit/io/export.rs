//! Tests for stimulus export paths and file creation

#[cfg(test)]
mod tests {
    use image::Rgb;
    use std::path::Path;
    use stimgen::compose::Canvas;
    use stimgen::io::export::{export_stimulus, stimulus_path};

    #[test]
    fn test_stimulus_path_appends_extension() {
        let path = stimulus_path(Path::new("images"), "stim_round_4_pink_star_orange_2");
        assert_eq!(
            path,
            Path::new("images/stim_round_4_pink_star_orange_2.png")
        );
    }

    #[test]
    fn test_export_creates_directories_and_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested/out/insect_1_circle_1_purple_blue.png");

        let canvas = Canvas::new(Rgb([255, 255, 255]), 4, 4);
        export_stimulus(&canvas, &path).expect("export should succeed");

        assert!(path.is_file());
        let reloaded = image::open(&path).expect("Failed to reopen exported image");
        assert_eq!(reloaded.into_rgba8().dimensions(), (4, 4));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("stim.png");

        export_stimulus(&Canvas::new(Rgb([0, 0, 0]), 2, 2), &path).expect("first export");
        export_stimulus(&Canvas::new(Rgb([255, 0, 0]), 2, 2), &path).expect("second export");

        let reloaded = image::open(&path)
            .expect("Failed to reopen exported image")
            .into_rgba8();
        assert_eq!(&reloaded.get_pixel(0, 0).0[..3], &[255, 0, 0]);
    }
}

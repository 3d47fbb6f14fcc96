use crate::grid::PixelGrid;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export an image's RGB values to a text grid file.
///
/// Any color mode the codec can decode is accepted; alpha is dropped
/// and grayscale is expanded to three identical channels. The output
/// path is overwritten if it exists.
pub fn export_image(input: &Path, output: &Path) -> Result<()> {
    let img = image::open(input)
        .with_context(|| format!("failed to decode image {}", input.display()))?
        .to_rgb8();

    let grid = PixelGrid::from_image(&img);

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    grid.write_to(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pixgrid_encode_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let mut img = RgbImage::new(2, 3);
        for (i, pixel) in img.pixels_mut().enumerate() {
            let v = (i * 10) as u8;
            *pixel = Rgb([v, v + 1, v + 2]);
        }

        let input = temp_path("in.png");
        let output = temp_path("out.txt");
        img.save(&input).unwrap();

        export_image(&input, &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "3 2 3");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0 1 2 10 11 12");
        assert_eq!(lines[2], "20 21 22 30 31 32");
        assert_eq!(lines[3], "40 41 42 50 51 52");

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_export_drops_alpha_channel() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([7, 8, 9, 42]));

        let input = temp_path("alpha.png");
        let output = temp_path("alpha.txt");
        img.save(&input).unwrap();

        export_image(&input, &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "1 1 3\n7 8 9\n");

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_export_expands_grayscale() {
        let gray = image::GrayImage::from_pixel(2, 1, image::Luma([77]));
        let input = temp_path("gray.png");
        let output = temp_path("gray.txt");
        DynamicImage::ImageLuma8(gray).save(&input).unwrap();

        export_image(&input, &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "1 2 3\n77 77 77 77 77 77\n");

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_export_missing_input_fails() {
        let input = temp_path("does_not_exist.png");
        let output = temp_path("unused.txt");
        let err = export_image(&input, &output).unwrap_err();
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn test_export_overwrites_existing_output() {
        let img = RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]));
        let input = temp_path("ow.png");
        let output = temp_path("ow.txt");
        img.save(&input).unwrap();
        fs::write(&output, "stale contents that are longer than the new file\n").unwrap();

        export_image(&input, &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "1 1 3\n1 2 3\n");

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }
}

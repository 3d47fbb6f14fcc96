use crate::grid::PixelGrid;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reconstruct an image from a text grid file.
///
/// Values are rescaled so the largest one maps to 255, then the result
/// is saved with the encoding inferred from the output extension. The
/// output path is overwritten if it exists.
pub fn reconstruct_image(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let grid = PixelGrid::parse(BufReader::new(file))
        .with_context(|| format!("malformed grid file {}", input.display()))?;

    let img = grid.normalize();
    img.save(output)
        .with_context(|| format!("failed to save {}", output.display()))?;

    Ok(())
}

use anyhow::Result;

use pixgrid::{config::Config, decode};

// Default paths; override with TXT2IMG_INPUT / TXT2IMG_OUTPUT
const INPUT_TXT_PATH: &str = "output_fpga.txt";
const OUTPUT_IMAGE_PATH: &str = "filtered_image.png";

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let config = Config::from_env("TXT2IMG_INPUT", "TXT2IMG_OUTPUT");
    let input = config.input_or(INPUT_TXT_PATH);
    let output = config.output_or(OUTPUT_IMAGE_PATH);

    decode::reconstruct_image(&input, &output)?;
    println!("Image saved as {}", output.display());

    Ok(())
}

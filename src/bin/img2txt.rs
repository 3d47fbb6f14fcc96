use anyhow::Result;

use pixgrid::{config::Config, encode};

// Default paths; override with IMG2TXT_INPUT / IMG2TXT_OUTPUT
const INPUT_IMAGE_PATH: &str = "rgb_nu.jpg";
const OUTPUT_TXT_PATH: &str = "input_x.txt";

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let config = Config::from_env("IMG2TXT_INPUT", "IMG2TXT_OUTPUT");
    let input = config.input_or(INPUT_IMAGE_PATH);
    let output = config.output_or(OUTPUT_TXT_PATH);

    encode::export_image(&input, &output)?;
    println!("RGB values exported to: {}", output.display());

    Ok(())
}

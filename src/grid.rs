use crate::error::FormatError;
use anyhow::Result;
use image::{Rgb, RgbImage};
use std::io::{BufRead, Write};

/// Fixed channel count of the grid format (R, G, B)
pub const CHANNELS: usize = 3;

/// In-memory pixel grid: H x W x 3, row-major, channel-interleaved.
///
/// Values are u16 because the text format is not limited to 8-bit
/// intensities - the filter pipeline that produces these files emits
/// 16-bit results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    data: Vec<u16>,
}

impl PixelGrid {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn values(&self) -> &[u16] {
        &self.data
    }

    /// Capture an RGB image as a grid, rows top-to-bottom, columns
    /// left-to-right.
    pub fn from_image(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = Vec::with_capacity((width * height) as usize * CHANNELS);

        for y in 0..height {
            for x in 0..width {
                let Rgb([r, g, b]) = *img.get_pixel(x, y);
                data.extend([r as u16, g as u16, b as u16]);
            }
        }

        Self {
            height: height as usize,
            width: width as usize,
            data,
        }
    }

    /// Parse the text grid format: a `H W C` header line followed by H
    /// lines of whitespace-separated integers.
    ///
    /// Token counts are validated against the header: the total across
    /// all data lines must come out to exactly H*W*3. Lines after the
    /// H-th data line are ignored.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        let (height, width) = parse_header(&header)?;

        let expected = height * width * CHANNELS;
        let mut data = Vec::with_capacity(expected);

        for row in 0..height {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(FormatError::MissingRows {
                        expected: height,
                        found: row,
                    }
                    .into())
                }
            };

            for token in line.split_whitespace() {
                let value: u16 = token
                    .parse()
                    .map_err(|_| FormatError::BadToken(token.to_string()))?;
                data.push(value);
            }
        }

        if data.len() != expected {
            return Err(FormatError::TokenCount {
                expected,
                found: data.len(),
            }
            .into());
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Serialize to the text grid format, one image row per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{} {} {}", self.height, self.width, CHANNELS)?;

        let row_len = self.width * CHANNELS;
        for y in 0..self.height {
            let row = &self.data[y * row_len..(y + 1) * row_len];
            let mut line = String::with_capacity(row.len() * 4);
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(&value.to_string());
            }
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }

    pub fn max_value(&self) -> u16 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Rescale so the maximum observed value maps to 255 and build an
    /// 8-bit RGB image.
    ///
    /// The scaled value is truncated, not rounded, matching the uint8
    /// cast of the reference pipeline. The clamp only guards against
    /// float error pushing the maximum slightly past 255.0.
    pub fn normalize(&self) -> RgbImage {
        let mut max_val = self.max_value();
        if max_val == 0 {
            max_val = 1; // all-zero grid stays all-zero
        }
        let max_val = max_val as f64;
        let scale = |v: u16| (v as f64 / max_val * 255.0).clamp(0.0, 255.0) as u8;

        let mut img = RgbImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let base = (y * self.width + x) * CHANNELS;
                let pixel = Rgb([
                    scale(self.data[base]),
                    scale(self.data[base + 1]),
                    scale(self.data[base + 2]),
                ]);
                img.put_pixel(x as u32, y as u32, pixel);
            }
        }

        img
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), FormatError> {
    let fields: Vec<usize> = line
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect::<Option<Vec<usize>>>()
        .ok_or_else(|| FormatError::BadHeader(line.trim().to_string()))?;

    let [height, width, channels] = fields[..] else {
        return Err(FormatError::BadHeader(line.trim().to_string()));
    };

    if channels != CHANNELS {
        return Err(FormatError::ChannelCount(channels));
    }

    Ok((height, width))
}

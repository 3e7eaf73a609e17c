use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_rgba_png(
    output: &Path,
    cols: u32,
    rows: u32,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder.write_image(data, cols, rows, ExtendedColorType::Rgba8)?;
    Ok(())
}

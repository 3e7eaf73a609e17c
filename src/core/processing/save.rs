use std::path::Path;
use tracing::info;

use crate::core::processing::resize::resize_rgba_image;
use crate::error::Error;
use crate::io::source::SourceImage;
use crate::io::writers::png::write_rgba_png;
use crate::types::ResizeFilter;

/// Load the image at `input`, resize it to exactly `width` x `height`, and
/// write the result as a PNG at `output`.
///
/// The source is opened fresh for every call; no handle outlives one
/// convert-and-save operation. Fails when the source is unreadable or the
/// destination is unwritable; the caller decides whether to continue.
pub fn convert_and_save(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroSize {
            size: width.min(height),
        }
        .into());
    }

    let source = SourceImage::open(input)?;
    let (original_cols, original_rows) = (source.width, source.height);

    let resized = if original_cols == width && original_rows == height {
        source.into_pixels()
    } else {
        resize_rgba_image(
            source.pixels(),
            original_cols,
            original_rows,
            width,
            height,
            filter,
        )?
    };

    write_rgba_png(output, width, height, &resized)?;
    info!("Converted {:?} -> {:?} ({}x{})", input, output, width, height);
    Ok(())
}

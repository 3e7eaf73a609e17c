use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

use crate::types::ResizeFilter;

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resize an interleaved RGBA8 buffer to exactly `target_cols` x `target_rows`.
///
/// Aspect ratio is not preserved; icon targets are square and the source is
/// stretched to fit.
pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResizeFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if original_cols == target_cols && original_rows == target_rows {
        return Ok(data.to_vec());
    }

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(cols: u32, rows: u32, pixel: [u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity((cols * rows * 4) as usize);
        for _ in 0..cols * rows {
            data.extend_from_slice(&pixel);
        }
        data
    }

    #[test]
    fn output_has_exact_target_dimensions() {
        let src = solid_rgba(7, 5, [10, 20, 30, 255]);
        let out = resize_rgba_image(&src, 7, 5, 16, 16, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out.len(), 16 * 16 * 4);
    }

    #[test]
    fn upscaling_reaches_target_dimensions() {
        let src = solid_rgba(8, 8, [200, 100, 50, 255]);
        let out = resize_rgba_image(&src, 8, 8, 128, 128, ResizeFilter::Bilinear).unwrap();
        assert_eq!(out.len(), 128 * 128 * 4);
    }

    #[test]
    fn matching_dimensions_pass_through() {
        let src = solid_rgba(48, 48, [1, 2, 3, 4]);
        let out = resize_rgba_image(&src, 48, 48, 48, 48, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn nearest_preserves_solid_color() {
        let src = solid_rgba(64, 64, [200, 100, 50, 255]);
        let out = resize_rgba_image(&src, 64, 64, 16, 16, ResizeFilter::Nearest).unwrap();
        for pixel in out.chunks_exact(4) {
            assert_eq!(pixel, [200, 100, 50, 255]);
        }
    }
}

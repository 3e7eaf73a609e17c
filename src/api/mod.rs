//! High-level, ergonomic library API: generate single icons to files or
//! in-memory buffers, plus a whole-set helper that walks the size table.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating iconforge.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::IconParams;
use crate::core::processing::resize::resize_rgba_image;
use crate::core::processing::save::convert_and_save;
use crate::error::{Error, Result};
use crate::io::source::SourceImage;
use crate::types::OutputFormat;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA8 pixels, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Outcome of a whole-set run
#[derive(Debug, Clone, Default)]
pub struct IconReport {
    pub written: usize,
    pub errors: usize,
    /// Successfully written icons as (edge length, output path) pairs
    pub outputs: Vec<(u32, PathBuf)>,
}

/// File name a square icon of the given edge length is written under,
/// e.g. `icon48.png`.
pub fn icon_file_name(size: u32, format: OutputFormat) -> String {
    format!("icon{}.{}", size, format.extension())
}

/// Resize the source at `input` to one square icon held in memory (no disk
/// output).
pub fn generate_icon_to_buffer(input: &Path, size: u32, params: &IconParams) -> Result<IconImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    let source = SourceImage::open(input)?;
    let (cols, rows) = (source.width, source.height);
    let rgba = if cols == size && rows == size {
        source.into_pixels()
    } else {
        resize_rgba_image(source.pixels(), cols, rows, size, size, params.filter)
            .map_err(|e| Error::conversion(size, e))?
    };

    Ok(IconImage {
        width: size,
        height: size,
        rgba,
    })
}

/// Resize the source at `input` to one square icon written at `output`.
pub fn generate_icon_to_path(
    input: &Path,
    output: &Path,
    size: u32,
    params: &IconParams,
) -> Result<()> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    convert_and_save(input, output, size, size, params.filter)
        .map_err(|e| Error::conversion(size, e))
}

/// Generate the full icon set from `params.sizes` into `output_dir`,
/// creating the directory if absent.
///
/// With `continue_on_error` set, a failed size is logged and counted while
/// the remaining sizes still run; otherwise the first error is returned.
pub fn generate_icon_set(
    input: &Path,
    output_dir: &Path,
    params: &IconParams,
    continue_on_error: bool,
) -> Result<IconReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = IconReport::default();

    for &size in &params.sizes {
        let output = output_dir.join(icon_file_name(size, params.format));
        match generate_icon_to_path(input, &output, size, params) {
            Ok(()) => {
                report.written += 1;
                report.outputs.push((size, output));
            }
            Err(e) => {
                warn!("Error converting {:?} to {}x{}: {}", input, size, size, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    info!(
        "Icon set complete: written={} errors={}",
        report.written, report.errors
    );
    Ok(report)
}

/// Size-label to output-path mapping for the written icons, in the shape a
/// consuming extension manifest's `default_icon` entry expects.
pub fn manifest_entries(report: &IconReport) -> BTreeMap<String, String> {
    report
        .outputs
        .iter()
        .map(|(size, path)| (size.to_string(), path.to_string_lossy().into_owned()))
        .collect()
}

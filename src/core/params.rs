use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, ResizeFilter};

/// Conversion parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconParams {
    pub format: OutputFormat,
    pub filter: ResizeFilter,
    /// Square icon edge lengths to emit, in pixels
    pub sizes: Vec<u32>,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            filter: ResizeFilter::Lanczos3,
            sizes: vec![16, 48, 128],
        }
    }
}

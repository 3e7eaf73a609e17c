#![doc = r#"
iconforge — a source-image to browser-extension icon set generator.

This crate turns one source image into the fixed set of square PNG icons a
browser-extension manifest expects (16x16, 48x48, 128x128 by default), with
a selectable resampling filter. It powers the iconforge CLI and can be
embedded in your own Rust applications.

Quick start: generate the icon set into a directory
---------------------------------------------------
```rust,no_run
use std::path::Path;
use iconforge::{generate_icon_set, IconParams};

fn main() -> iconforge::Result<()> {
    let params = IconParams::default(); // PNG, Lanczos3, sizes 16/48/128

    let report = generate_icon_set(
        Path::new("icons/icon.png"),
        Path::new("icons"),
        &params,
        true, // continue_on_error: log failed sizes, keep going
    )?;

    println!("written={} errors={}", report.written, report.errors);
    Ok(())
}
```

Process in-memory to `IconImage`
--------------------------------
```rust,no_run
use std::path::Path;
use iconforge::{generate_icon_to_buffer, IconParams};

fn main() -> iconforge::Result<()> {
    let icon = generate_icon_to_buffer(Path::new("icons/icon.png"), 48, &IconParams::default())?;

    // `icon.rgba` holds interleaved RGBA8 pixels, 48 * 48 * 4 bytes.
    assert_eq!((icon.width, icon.height), (48, 48));
    Ok(())
}
```

Error handling
--------------
All public functions return `iconforge::Result<T>`; match on
`iconforge::Error` to handle specific cases. A per-icon conversion fails
with `Error::ConversionFailed` when the source is unreadable or the
destination is unwritable.

```rust,no_run
use std::path::Path;
use iconforge::{generate_icon_to_path, Error, IconParams};

fn main() {
    let params = IconParams::default();
    match generate_icon_to_path(
        Path::new("/bad/path.png"),
        Path::new("icons/icon16.png"),
        16,
        &params,
    ) {
        Ok(()) => {}
        Err(Error::ConversionFailed { size, reason }) => {
            eprintln!("{size}x{size} failed: {reason}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `OutputFormat`, `ResizeFilter`).
- [`io`] — source image reader and PNG writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::IconParams;
pub use crate::error::{Error, Result};
pub use crate::types::{OutputFormat, ResizeFilter};

// Readers
pub use crate::io::source::{SourceError, SourceImage};

// High-level API re-exports
pub use crate::api::{
    IconImage, IconReport, generate_icon_set, generate_icon_to_buffer, generate_icon_to_path,
    icon_file_name, manifest_entries,
};

#![doc = r#"
logotrim — make near-white logo backgrounds transparent and trim to content
============================================================================

logotrim loads a raster image, replaces every pixel whose red, green and blue
channels are all strictly above a threshold (235 by default) with transparent
white, crops the result to the bounding box of the pixels that are still
visible, and writes it losslessly with its alpha channel intact.

If nothing stays visible the image keeps its original size.

Quick start
-----------
```rust,no_run
use std::path::Path;
use logotrim::{process_logo, ProcessingParams};

fn main() -> logotrim::Result<()> {
    let report = process_logo(
        Path::new("artwork/logo.png"),
        Path::new("public/icon.png"),
        &ProcessingParams::default(),
    )?;
    println!("{}x{} -> {}x{}", report.source_width, report.source_height, report.width, report.height);
    Ok(())
}
```

In-memory processing
--------------------
```rust
use image::{Rgba, RgbaImage};
use logotrim::{process_image, ProcessingParams};

let mut img = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 255]));
img.put_pixel(1, 1, Rgba([10, 20, 30, 255]));

let logo = process_image(img, &ProcessingParams::default());
assert_eq!(logo.image.dimensions(), (1, 1));
assert_eq!(logo.report.cleared_pixels, 15);
```

Error handling
--------------
All fallible functions return `logotrim::Result<T>`. A missing input is its own
variant, so callers can tell it apart from a failed run:

```rust,no_run
use std::path::Path;
use logotrim::{process_logo, Error, ProcessingParams};

match process_logo(Path::new("in.png"), Path::new("out.png"), &ProcessingParams::default()) {
    Ok(report) => println!("cropped: {}", report.cropped()),
    Err(Error::InputNotFound { path }) => eprintln!("nothing at {}", path.display()),
    Err(other) => eprintln!("failed: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `BoundingBox`, `OutputFormat` and the named threshold constants.
- [`io`] — decoding and the PNG/TIFF writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::ProcessingParams;
pub use crate::core::processing::pipeline::{ProcessReport, ProcessedLogo};
pub use error::{Error, Result};
pub use types::{
    BoundingBox, DEFAULT_NEAR_WHITE_THRESHOLD, OutputFormat, Rgba8, TRANSPARENT_WHITE,
};

pub use api::{process_image, process_logo, process_logo_to_buffer, save_logo};

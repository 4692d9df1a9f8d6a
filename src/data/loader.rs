use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, ImageReader};

use super::model::ImageBuffer;

/// Extensions offered in the open dialog and accepted by [`load_file`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an image from disk and convert it to RGBA8.  Dispatch by extension.
///
/// Supported formats:
/// * `.png`
/// * `.jpg` / `.jpeg`
pub fn load_file(path: &Path) -> Result<ImageBuffer> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let format = match ext.as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        other => bail!("Unsupported file extension: .{other}"),
    };

    let mut reader = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    reader.set_format(format);
    let decoded = reader
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;

    Ok(ImageBuffer::from_rgba_image(decoded.into_rgba8()))
}

/// Write `buffer` to `path` as an uncompressed bitmap.
pub fn save_bmp(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    buffer
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Bmp)
        .with_context(|| format!("writing bitmap to {}", path.display()))
}

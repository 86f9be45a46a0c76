use std::{io::Cursor, path::Path};

use anyhow::Context;
use image::{DynamicImage, ImageFormat};

use crate::{
    foundation::error::{ScanError, ScanResult},
    frames::frame::Frame,
};

/// Decode one image file into an RGBA8 [`Frame`] labelled with its file name.
pub fn load_frame(path: &Path) -> ScanResult<Frame> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Frame::new(img.to_rgba8()).with_label(label))
}

/// Decode every path in order. Stops at the first failure.
#[tracing::instrument(skip_all, fields(count = paths.len()))]
pub fn load_frames<P: AsRef<Path>>(paths: &[P]) -> ScanResult<Vec<Frame>> {
    paths.iter().map(|p| load_frame(p.as_ref())).collect()
}

/// Image already encoded for a specific output path, not yet written.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Format picked from the output path's extension.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encoded file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encode `img` in memory for `path`, choosing the format from the extension.
///
/// Fails with [`ScanError::Validation`] when the extension is unknown or the format cannot hold
/// the image's colour type. Nothing touches the filesystem.
pub fn encode_image(img: &DynamicImage, path: &Path) -> ScanResult<EncodedImage> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        ScanError::validation(format!(
            "unsupported output format for '{}': {e}",
            path.display()
        ))
    })?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| {
            ScanError::validation(format!(
                "cannot encode {:?} image as {format:?} for '{}': {e}",
                img.color(),
                path.display()
            ))
        })?;
    Ok(EncodedImage { format, bytes })
}

/// Write a previously encoded image, creating missing parent directories first.
pub fn write_encoded(encoded: &EncodedImage, path: &Path) -> ScanResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, encoded.bytes())
        .with_context(|| format!("write image '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), format = ?encoded.format(), "saved image");
    Ok(())
}

/// Encode `img` to `path`, choosing the format from the extension.
///
/// The file is only created once encoding has succeeded.
pub fn save_image(img: &DynamicImage, path: &Path) -> ScanResult<()> {
    let encoded = encode_image(img, path)?;
    write_encoded(&encoded, path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ScanResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frames/io.rs"]
mod tests;

use image::RgbaImage;

use crate::foundation::{
    core::Size,
    error::{ScanError, ScanResult},
};

/// Bytes per pixel for every frame held by Scanimate (straight-alpha RGBA8).
pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
/// One decoded input image, always stored as straight-alpha RGBA8.
pub struct Frame {
    label: Option<String>,
    pixels: RgbaImage,
}

impl Frame {
    /// Wrap an RGBA8 buffer.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            label: None,
            pixels,
        }
    }

    /// Attach a human-readable label (usually the source file name).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label given at load time, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Size {
        let (width, height) = self.pixels.dimensions();
        Size::new(width, height)
    }

    /// Borrow the pixel buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl From<RgbaImage> for Frame {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

/// Ordered, non-empty collection of equally sized frames.
///
/// Order determines the interleave cycle. Construction is the only place the size invariant is
/// checked; every other API can rely on it.
#[derive(Clone, Debug)]
pub struct FrameSet {
    frames: Vec<Frame>,
    size: Size,
}

impl FrameSet {
    /// Validate and take ownership of `frames`.
    ///
    /// Errors:
    /// - [`ScanError::EmptyFrameSet`] when `frames` is empty
    /// - [`ScanError::DimensionMismatch`] for the first frame whose size differs from frame 0
    /// - [`ScanError::Validation`] when frame 0 has a zero width or height
    pub fn new(frames: Vec<Frame>) -> ScanResult<Self> {
        let size = check_uniform(frames.iter().map(Frame::size))?;
        Ok(Self { frames, size })
    }

    /// Convenience constructor for unlabeled buffers.
    pub fn from_images(images: impl IntoIterator<Item = RgbaImage>) -> ScanResult<Self> {
        Self::new(images.into_iter().map(Frame::new).collect())
    }

    /// Shared size of every frame.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of frames (always >= 1).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow the frames in cycle order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate frames in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Give the frames back.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSet {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Check that every size equals the first one and return it.
pub(crate) fn check_uniform(sizes: impl IntoIterator<Item = Size>) -> ScanResult<Size> {
    let mut sizes = sizes.into_iter();
    let first = sizes.next().ok_or(ScanError::EmptyFrameSet)?;
    if first.is_empty() {
        return Err(ScanError::validation(format!(
            "frame 0 has an empty size ({first})"
        )));
    }
    for (i, s) in sizes.enumerate() {
        if s != first {
            return Err(ScanError::dimension_mismatch(i + 1, first, s));
        }
    }
    Ok(first)
}

#[cfg(test)]
#[path = "../../tests/unit/frames/frame.rs"]
mod tests;

use std::{fmt, num::NonZeroU32, str::FromStr};

use crate::foundation::error::{ScanError, ScanResult};

/// Pixel dimensions of a frame or output image.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Construct a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length of the axis that strips advance along.
    pub fn extent_along(self, direction: Direction) -> u32 {
        match direction {
            Direction::Vertical => self.width,
            Direction::Horizontal => self.height,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Number of consecutive pixels assigned to one frame before cycling to the next.
///
/// Always positive. Widths at or beyond the image extent are allowed; the whole output then comes
/// from frame 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct StripWidth(NonZeroU32);

impl StripWidth {
    /// Validate a raw strip width.
    ///
    /// Fails with [`ScanError::InvalidStripWidth`] when `px <= 0`. Values above `u32::MAX`
    /// saturate, which is indistinguishable from any other width wider than the image.
    pub fn new(px: i64) -> ScanResult<Self> {
        if px <= 0 {
            return Err(ScanError::InvalidStripWidth(px));
        }
        let clamped = u32::try_from(px).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped)
            .map(Self)
            .ok_or(ScanError::InvalidStripWidth(px))
    }

    /// Width in pixels.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Index of the strip containing pixel position `pos` along the strip axis.
    pub fn band_of(self, pos: u32) -> u32 {
        pos / self.get()
    }

    /// Source frame for pixel position `pos` when cycling through `frame_count` frames.
    pub fn source_index(self, pos: u32, frame_count: usize) -> usize {
        debug_assert!(frame_count > 0);
        (self.band_of(pos) as usize) % frame_count
    }
}

impl Default for StripWidth {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl TryFrom<i64> for StripWidth {
    type Error = ScanError;

    fn try_from(px: i64) -> ScanResult<Self> {
        Self::new(px)
    }
}

impl From<StripWidth> for u32 {
    fn from(w: StripWidth) -> u32 {
        w.get()
    }
}

impl fmt::Display for StripWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.get())
    }
}

/// Orientation of the interleaved strips.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Column bands; the grille slides left/right.
    #[default]
    Vertical,
    /// Row bands; the grille slides up/down.
    Horizontal,
}

impl Direction {
    /// Stable lowercase name used in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ScanError;

    fn from_str(s: &str) -> ScanResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ScanError::validation(format!(
                "unknown direction '{other}' (expected 'vertical' or 'horizontal')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

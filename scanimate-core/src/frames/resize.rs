use std::{fmt, str::FromStr};

use image::imageops::{self, FilterType};

use crate::{
    foundation::{
        core::Size,
        error::{ScanError, ScanResult},
    },
    frames::frame::Frame,
};

/// How frames of differing sizes are reconciled before interleaving.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeStrategy {
    /// Leave frames untouched; mismatched sizes fail later with `DimensionMismatch`.
    #[default]
    Strict,
    /// Resample every frame to the size of frame 0.
    First,
    /// Resample every frame to the smallest width and the smallest height in the set.
    Min,
}

impl ResizeStrategy {
    /// Stable lowercase name used in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::First => "first",
            Self::Min => "min",
        }
    }

    /// Common size the strategy would resample `sizes` to, or `None` for [`Self::Strict`].
    pub fn target_size(self, sizes: &[Size]) -> Option<Size> {
        match self {
            Self::Strict => None,
            Self::First => sizes.first().copied(),
            Self::Min => {
                let width = sizes.iter().map(|s| s.width).min()?;
                let height = sizes.iter().map(|s| s.height).min()?;
                Some(Size::new(width, height))
            }
        }
    }
}

impl fmt::Display for ResizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeStrategy {
    type Err = ScanError;

    fn from_str(s: &str) -> ScanResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "first" => Ok(Self::First),
            "min" => Ok(Self::Min),
            other => Err(ScanError::validation(format!(
                "unknown resize strategy '{other}' (expected 'strict', 'first' or 'min')"
            ))),
        }
    }
}

/// Bring all frames to one size according to `strategy` (Lanczos3 resampling).
///
/// Frames already at the target size are passed through without copying.
pub fn unify_sizes(frames: Vec<Frame>, strategy: ResizeStrategy) -> ScanResult<Vec<Frame>> {
    if frames.is_empty() {
        return Err(ScanError::EmptyFrameSet);
    }
    let sizes: Vec<Size> = frames.iter().map(Frame::size).collect();
    let Some(target) = strategy.target_size(&sizes) else {
        return Ok(frames);
    };
    if target.is_empty() {
        return Err(ScanError::validation(format!(
            "cannot resize frames to an empty size ({target})"
        )));
    }

    Ok(frames
        .into_iter()
        .map(|frame| {
            if frame.size() == target {
                return frame;
            }
            tracing::debug!(
                label = frame.label().unwrap_or("<unnamed>"),
                from = %frame.size(),
                to = %target,
                "resizing frame"
            );
            let resized = imageops::resize(
                frame.pixels(),
                target.width,
                target.height,
                FilterType::Lanczos3,
            );
            match frame.label() {
                Some(label) => Frame::new(resized).with_label(label),
                None => Frame::new(resized),
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/frames/resize.rs"]
mod tests;

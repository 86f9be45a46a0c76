use std::{fmt, str::FromStr};

use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

use crate::foundation::error::{ScanError, ScanResult};

/// Pixel format written for the interleaved base image.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Keep the alpha channel.
    #[default]
    Rgba,
    /// Drop alpha without compositing.
    Rgb,
    /// Composite over opaque white, then drop alpha.
    #[serde(rename = "white-bg", alias = "white-background")]
    WhiteBackground,
}

impl OutputMode {
    /// Resolve the two boolean CLI switches. White background wins when both are set.
    pub fn from_flags(force_rgb: bool, white_bg: bool) -> Self {
        match (force_rgb, white_bg) {
            (_, true) => Self::WhiteBackground,
            (true, false) => Self::Rgb,
            (false, false) => Self::Rgba,
        }
    }

    /// Stable lowercase name used in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgba => "rgba",
            Self::Rgb => "rgb",
            Self::WhiteBackground => "white-bg",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ScanError;

    fn from_str(s: &str) -> ScanResult<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "rgba" => Ok(Self::Rgba),
            "rgb" => Ok(Self::Rgb),
            "white-bg" | "white-background" => Ok(Self::WhiteBackground),
            other => Err(ScanError::validation(format!(
                "unknown output mode '{other}' (expected 'rgba', 'rgb' or 'white-bg')"
            ))),
        }
    }
}

/// Convert the interleaved RGBA base into the requested output format.
pub fn finish(img: RgbaImage, mode: OutputMode) -> DynamicImage {
    match mode {
        OutputMode::Rgba => DynamicImage::ImageRgba8(img),
        OutputMode::Rgb => DynamicImage::ImageRgba8(img).into_rgb8().into(),
        OutputMode::WhiteBackground => DynamicImage::ImageRgb8(composite_on_white(&img)),
    }
}

/// Straight-alpha "over" onto opaque white.
pub fn composite_on_white(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        Rgb([over_white(r, a), over_white(g, a), over_white(b, a)])
    })
}

fn over_white(c: u8, a: u8) -> u8 {
    let c = u32::from(c);
    let a = u32::from(a);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/interlace/finish.rs"]
mod tests;

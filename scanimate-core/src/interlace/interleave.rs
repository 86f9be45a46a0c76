use image::RgbaImage;

use crate::{
    foundation::{
        core::{Direction, Size, StripWidth},
        error::ScanResult,
    },
    frames::frame::{CHANNELS, FrameSet, check_uniform},
};

/// One contiguous run of pixels along the strip axis, taken from a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// First pixel position (inclusive).
    pub start: u32,
    /// Last pixel position (exclusive). The final band is cut short by the image edge.
    pub end: u32,
    /// Index of the source frame.
    pub source: usize,
}

/// Split `extent` pixels into bands of `strip` pixels cycling through `frame_count` frames.
///
/// Band `k` covers `[k * strip, min((k + 1) * strip, extent))` and comes from frame
/// `k mod frame_count`.
pub fn band_layout(extent: u32, strip: StripWidth, frame_count: usize) -> Vec<Band> {
    debug_assert!(frame_count > 0);
    let step = strip.get();
    let mut bands = Vec::with_capacity(extent.div_ceil(step) as usize);
    let mut start = 0u32;
    while start < extent {
        let end = start.saturating_add(step).min(extent);
        bands.push(Band {
            start,
            end,
            source: strip.source_index(start, frame_count),
        });
        start = end;
    }
    bands
}

/// Interleave vertical strips of `frames` into one image.
///
/// Column `x` of the output is column `x` of frame `(x / strip) mod N`, all rows and channels.
/// Output has the same size as the inputs.
pub fn interleave(frames: &FrameSet, strip: StripWidth) -> RgbaImage {
    interleave_with(frames, strip, Direction::Vertical)
}

/// Interleave `frames` with strips running in `direction`.
///
/// [`Direction::Horizontal`] applies the same cycle to rows: row `y` comes from frame
/// `(y / strip) mod N`.
pub fn interleave_with(frames: &FrameSet, strip: StripWidth, direction: Direction) -> RgbaImage {
    let images: Vec<&RgbaImage> = frames.iter().map(|f| f.pixels()).collect();
    compose(&images, frames.size(), strip, direction)
}

/// Interleave loose buffers, checking the frame-set invariants first.
///
/// Fails with `EmptyFrameSet` or `DimensionMismatch` before any pixel is copied.
pub fn interleave_images(
    images: &[RgbaImage],
    strip: StripWidth,
    direction: Direction,
) -> ScanResult<RgbaImage> {
    let size = check_uniform(images.iter().map(|img| {
        let (w, h) = img.dimensions();
        Size::new(w, h)
    }))?;
    let refs: Vec<&RgbaImage> = images.iter().collect();
    Ok(compose(&refs, size, strip, direction))
}

fn compose(
    images: &[&RgbaImage],
    size: Size,
    strip: StripWidth,
    direction: Direction,
) -> RgbaImage {
    let stride = size.width as usize * CHANNELS;
    let mut out = RgbaImage::new(size.width, size.height);
    let bands = band_layout(size.extent_along(direction), strip, images.len());

    match direction {
        Direction::Vertical => {
            for (y, row) in out.chunks_exact_mut(stride).enumerate() {
                let row_start = y * stride;
                for band in &bands {
                    let a = band.start as usize * CHANNELS;
                    let b = band.end as usize * CHANNELS;
                    let src = images[band.source].as_raw();
                    row[a..b].copy_from_slice(&src[row_start + a..row_start + b]);
                }
            }
        }
        Direction::Horizontal => {
            let dst: &mut [u8] = &mut out;
            for band in &bands {
                let a = band.start as usize * stride;
                let b = band.end as usize * stride;
                dst[a..b].copy_from_slice(&images[band.source].as_raw()[a..b]);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/interlace/interleave.rs"]
mod tests;

use image::{Rgba, RgbaImage};

use crate::foundation::{
    core::{Direction, Size, StripWidth},
    error::{ScanError, ScanResult},
};

/// Opaque band of the grille (straight-alpha black).
pub const GRILLE_OPAQUE: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Transparent slit of the grille through which one frame is visible.
pub const GRILLE_SLIT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Alternating slit/opaque bands of `strip` pixels, slit first at column 0.
pub fn make_grille(width: u32, height: u32, strip: StripWidth) -> ScanResult<RgbaImage> {
    make_periodic_grille(Size::new(width, height), strip, 2, Direction::Vertical)
}

/// Grille with one slit of `strip` pixels every `strip * frame_count` pixels.
///
/// Everything else is opaque black. With `frame_count == 2` this is [`make_grille`]. A single
/// frame yields a fully transparent mask.
pub fn make_periodic_grille(
    size: Size,
    strip: StripWidth,
    frame_count: usize,
    direction: Direction,
) -> ScanResult<RgbaImage> {
    if size.is_empty() {
        return Err(ScanError::validation(format!(
            "grille size must be non-empty, got {size}"
        )));
    }
    if frame_count == 0 {
        return Err(ScanError::EmptyFrameSet);
    }

    let is_slit = |pos: u32| strip.source_index(pos, frame_count) == 0;
    let mask = match direction {
        Direction::Vertical => RgbaImage::from_fn(size.width, size.height, |x, _| {
            if is_slit(x) { GRILLE_SLIT } else { GRILLE_OPAQUE }
        }),
        Direction::Horizontal => RgbaImage::from_fn(size.width, size.height, |_, y| {
            if is_slit(y) { GRILLE_SLIT } else { GRILLE_OPAQUE }
        }),
    };
    Ok(mask)
}

/// Distance in pixels between two consecutive slits.
pub fn grille_period(strip: StripWidth, frame_count: usize) -> u64 {
    u64::from(strip.get()) * frame_count as u64
}

#[cfg(test)]
#[path = "../../tests/unit/interlace/grille.rs"]
mod tests;

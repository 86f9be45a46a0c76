//! Scanimate builds "scanimation" base images: several animation frames interleaved into one
//! picture as narrow strips, viewed through a matching striped grille.
//!
//! # Pipeline overview
//!
//! 1. **Discover**: list frame files in a directory, in natural file-name order (`1, 2, 10`)
//! 2. **Load**: decode each file into a straight-alpha RGBA8 [`Frame`]
//! 3. **Unify** (optional): resample frames to a common size ([`ResizeStrategy`])
//! 4. **Validate**: build a [`FrameSet`] (non-empty, equal sizes)
//! 5. **Interleave**: column `x` of the output comes from frame `(x / strip) mod N`
//! 6. **Finish + save**: pick the output pixel format ([`OutputMode`]) and encode, plus an
//!    optional grille mask
//!
//! Steps 5 and 6 are pure functions ([`interleave`], [`make_grille`]); all filesystem access
//! lives in the discovery and IO helpers and in [`run_job`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same frames and strip width always produce byte-identical output.
//! - **Validate then write**: every input error is raised before the first output file is opened.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod frames;
mod interlace;
mod job;

pub use foundation::core::{Direction, Size, StripWidth};
pub use foundation::error::{ScanError, ScanResult};
pub use frames::discover::{DEFAULT_EXTENSIONS, collect_frame_files, natural_cmp, parse_extensions};
pub use frames::frame::{CHANNELS, Frame, FrameSet};
pub use frames::io::{
    EncodedImage, encode_image, ensure_parent_dir, load_frame, load_frames, save_image,
    write_encoded,
};
pub use frames::resize::{ResizeStrategy, unify_sizes};
pub use interlace::finish::{OutputMode, composite_on_white, finish};
pub use interlace::grille::{
    GRILLE_OPAQUE, GRILLE_SLIT, grille_period, make_grille, make_periodic_grille,
};
pub use interlace::interleave::{Band, band_layout, interleave, interleave_images, interleave_with};
pub use job::manifest::{DEFAULT_BASE_OUTPUT, JobManifest, ScanJob};
pub use job::pipeline::{JobReport, Scanimation, compose_scanimation, run_batch, run_job};

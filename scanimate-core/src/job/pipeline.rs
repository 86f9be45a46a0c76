use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::Context;
use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Direction, Size, StripWidth},
        error::{ScanError, ScanResult},
    },
    frames::{
        discover::collect_frame_files,
        frame::FrameSet,
        io::{encode_image, load_frames, write_encoded},
        resize::unify_sizes,
    },
    interlace::{
        finish::{OutputMode, finish},
        grille::{grille_period, make_periodic_grille},
        interleave::interleave_with,
    },
    job::manifest::ScanJob,
};

/// In-memory result of one job, ready to be encoded.
#[derive(Clone, Debug)]
pub struct Scanimation {
    /// Interleaved base image in the requested output format.
    pub base: DynamicImage,
    /// Matching grille mask, always RGBA.
    pub mask: Option<RgbaImage>,
}

/// Interleave `frames` and optionally build the matching periodic grille.
///
/// Pure: nothing is read or written.
pub fn compose_scanimation(
    frames: &FrameSet,
    strip: StripWidth,
    direction: Direction,
    mode: OutputMode,
    with_mask: bool,
) -> ScanResult<Scanimation> {
    let base = finish(interleave_with(frames, strip, direction), mode);
    let mask = if with_mask {
        Some(make_periodic_grille(
            frames.size(),
            strip,
            frames.len(),
            direction,
        )?)
    } else {
        None
    };
    Ok(Scanimation { base, mask })
}

/// Summary of a finished job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobReport {
    /// Frame files in the order they were interleaved.
    pub files: Vec<PathBuf>,
    /// Output size.
    pub size: Size,
    /// Strip width used.
    pub strip_width: StripWidth,
    /// Strip orientation used.
    pub direction: Direction,
    /// Where the base image was written.
    pub base_path: PathBuf,
    /// Where the mask was written, if requested.
    pub mask_path: Option<PathBuf>,
    /// Slit period of the mask in pixels, if one was written.
    pub grille_period: Option<u64>,
}

impl JobReport {
    /// Number of interleaved frames.
    pub fn frame_count(&self) -> usize {
        self.files.len()
    }
}

/// Discover, load, validate, interleave and save one job.
///
/// Every check runs and both images are fully built before the first file is written, so a
/// failing job never leaves a partial output behind.
#[tracing::instrument(skip(job), fields(dir = %job.frame_dir.display()))]
pub fn run_job(job: &ScanJob) -> ScanResult<JobReport> {
    job.validate()?;

    let files = collect_frame_files(&job.frame_dir, &job.extensions, job.recursive)?;
    if files.is_empty() {
        tracing::warn!("no frame files matched");
        return Err(ScanError::EmptyFrameSet);
    }
    if files.len() == 1 {
        tracing::warn!("only one frame found; the base image will equal that frame");
    }
    for f in &files {
        tracing::debug!(file = %f.display(), "frame");
    }

    let frames = unify_sizes(load_frames(&files)?, job.resize)?;
    let set = FrameSet::new(frames)?;
    let out = compose_scanimation(
        &set,
        job.strip_width,
        job.direction,
        job.output_mode,
        job.generate_grille(),
    )?;

    // Both outputs are encoded before either is written.
    let base = encode_image(&out.base, &job.out_base)?;
    let mask = match (out.mask, job.out_mask.as_ref()) {
        (Some(mask), Some(path)) => Some((
            encode_image(&DynamicImage::ImageRgba8(mask), path)?,
            path,
        )),
        _ => None,
    };

    write_encoded(&base, &job.out_base)?;
    tracing::info!(
        path = %job.out_base.display(),
        size = %set.size(),
        frames = set.len(),
        strip = %job.strip_width,
        direction = %job.direction,
        "base saved"
    );

    let mut period = None;
    if let Some((encoded, path)) = mask {
        write_encoded(&encoded, path)?;
        let p = grille_period(job.strip_width, set.len());
        tracing::info!(path = %path.display(), period = p, "mask saved");
        period = Some(p);
    }

    Ok(JobReport {
        files,
        size: set.size(),
        strip_width: job.strip_width,
        direction: job.direction,
        base_path: job.out_base.clone(),
        mask_path: job.out_mask.clone(),
        grille_period: period,
    })
}

/// Run independent jobs on a rayon pool; results come back in job order.
///
/// Fails up front when `threads` is `Some(0)` or two jobs would write the same file. Individual
/// job failures are reported per entry and do not stop the others.
#[tracing::instrument(skip(jobs), fields(jobs = jobs.len()))]
pub fn run_batch(
    jobs: &[ScanJob],
    threads: Option<usize>,
) -> ScanResult<Vec<ScanResult<JobReport>>> {
    check_distinct_outputs(jobs)?;
    let pool = build_thread_pool(threads)?;
    Ok(pool.install(|| jobs.par_iter().map(run_job).collect()))
}

fn check_distinct_outputs(jobs: &[ScanJob]) -> ScanResult<()> {
    let mut seen = HashSet::new();
    for path in jobs
        .iter()
        .flat_map(|j| std::iter::once(&j.out_base).chain(j.out_mask.as_ref()))
    {
        if !seen.insert(output_key(path)?) {
            return Err(ScanError::validation(format!(
                "output '{}' is written by more than one job",
                path.display()
            )));
        }
    }
    Ok(())
}

/// Absolute, lexically normalized form of an output path, used to detect two jobs writing the
/// same file under different spellings (`out/a.png` vs `./out/a.png`). Symlinks are not resolved.
pub(crate) fn output_key(path: &Path) -> ScanResult<PathBuf> {
    let abs = std::path::absolute(path)
        .with_context(|| format!("resolve output path '{}'", path.display()))?;
    let mut key = PathBuf::new();
    for c in abs.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                key.pop();
            }
            other => key.push(other),
        }
    }
    Ok(key)
}

fn build_thread_pool(threads: Option<usize>) -> ScanResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScanError::validation("batch 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ScanError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/job/pipeline.rs"]
mod tests;

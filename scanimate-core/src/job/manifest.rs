use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    foundation::{
        core::{Direction, StripWidth},
        error::{ScanError, ScanResult},
    },
    frames::resize::ResizeStrategy,
    interlace::finish::OutputMode,
    job::pipeline::output_key,
};

/// Default output file name for the interleaved base image.
pub const DEFAULT_BASE_OUTPUT: &str = "scanimation_base.png";

/// Everything needed to turn one frame directory into a base image (and optional grille).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanJob {
    /// Directory scanned for frames.
    #[serde(default = "default_frame_dir")]
    pub frame_dir: PathBuf,
    /// Descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,
    /// Accepted file extensions; empty means the built-in image list.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Pixels per band.
    #[serde(default)]
    pub strip_width: StripWidth,
    /// Band orientation.
    #[serde(default)]
    pub direction: Direction,
    /// Size reconciliation for frames of differing sizes.
    #[serde(default)]
    pub resize: ResizeStrategy,
    /// Pixel format of the base image.
    #[serde(default)]
    pub output_mode: OutputMode,
    /// Base image output path.
    #[serde(default = "default_out_base")]
    pub out_base: PathBuf,
    /// Grille mask output path; no mask is produced when unset.
    #[serde(default)]
    pub out_mask: Option<PathBuf>,
}

fn default_frame_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_out_base() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_OUTPUT)
}

impl Default for ScanJob {
    fn default() -> Self {
        Self {
            frame_dir: default_frame_dir(),
            recursive: false,
            extensions: Vec::new(),
            strip_width: StripWidth::default(),
            direction: Direction::default(),
            resize: ResizeStrategy::default(),
            output_mode: OutputMode::default(),
            out_base: default_out_base(),
            out_mask: None,
        }
    }
}

impl ScanJob {
    /// Whether a grille mask is written alongside the base image.
    pub fn generate_grille(&self) -> bool {
        self.out_mask.is_some()
    }

    /// Checks that need no filesystem access beyond resolving the current directory.
    pub fn validate(&self) -> ScanResult<()> {
        if let Some(mask) = &self.out_mask
            && output_key(mask)? == output_key(&self.out_base)?
        {
            return Err(ScanError::validation(format!(
                "base and mask outputs must differ (both '{}')",
                self.out_base.display()
            )));
        }
        Ok(())
    }

    /// Rebase every relative path onto `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.frame_dir = rebase(self.frame_dir);
        self.out_base = rebase(self.out_base);
        self.out_mask = self.out_mask.map(rebase);
        self
    }
}

/// A list of independent jobs, usually read from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobManifest {
    /// Jobs in submission order.
    pub jobs: Vec<ScanJob>,
}

impl JobManifest {
    /// Parse a manifest from a JSON reader. Paths are kept as written.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScanResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScanError::validation(format!("parse job manifest JSON: {e}")))
    }

    /// Parse a manifest file; relative paths inside it resolve against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScanError::validation(format!("open job manifest '{}': {e}", path.display()))
        })?;
        let manifest = Self::from_reader(BufReader::new(f))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self {
            jobs: manifest
                .jobs
                .into_iter()
                .map(|job| job.resolve_relative_to(root))
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/manifest.rs"]
mod tests;

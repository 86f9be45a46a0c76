use std::{
    cmp::Ordering,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{ScanError, ScanResult};

/// Extensions picked up when no explicit list is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"];

/// Split a comma-separated extension list (`"png, .JPG,,webp"`) into normalized entries.
pub fn parse_extensions(csv: &str) -> Vec<String> {
    normalize_extensions(csv.split(',')).into_iter().collect()
}

fn normalize_extensions<S: AsRef<str>>(exts: impl IntoIterator<Item = S>) -> BTreeSet<String> {
    exts.into_iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Find frame files under `dir` and return them in natural file-name order.
///
/// Only regular files whose extension is in `extensions` (case-insensitive, leading dot ignored)
/// are returned. An empty `extensions` slice means [`DEFAULT_EXTENSIONS`].
#[tracing::instrument(skip(extensions))]
pub fn collect_frame_files(
    dir: &Path,
    extensions: &[String],
    recursive: bool,
) -> ScanResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScanError::validation(format!(
            "frame directory not found: '{}'",
            dir.display()
        )));
    }

    let exts = if extensions.is_empty() {
        normalize_extensions(DEFAULT_EXTENSIONS)
    } else {
        normalize_extensions(extensions)
    };

    let mut files = Vec::new();
    walk(dir, &exts, recursive, &mut files)?;
    files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)).then_with(|| a.cmp(b)));

    tracing::debug!(count = files.len(), "collected frame files");
    Ok(files)
}

fn walk(
    dir: &Path,
    exts: &BTreeSet<String>,
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> ScanResult<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat '{}'", path.display()))?;

        // Symlinked directories are not followed.
        if file_type.is_dir() {
            if recursive {
                walk(&path, exts, recursive, out)?;
            }
            continue;
        }
        if path.is_file() && has_extension(&path, exts) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, exts: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.contains(&e.to_ascii_lowercase()))
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default()
}

/// Compare two names the way a person would order numbered files.
///
/// Names are split into digit and non-digit runs. Digit runs compare by numeric value (so `2`
/// sorts before `10`) and come before text runs; text runs compare case-insensitively. Names that
/// are still equal fall back to plain byte order, which keeps the ordering total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = Chunks(a);
    let mut cb = Chunks(b);
    loop {
        match (ca.next(), cb.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = cmp_chunk(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a>(&'a str);

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.0.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .0
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.0.len());
        let (head, rest) = self.0.split_at(end);
        self.0 = rest;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    }
}

fn cmp_chunk(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        (Chunk::Text(x), Chunk::Text(y)) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/discover.rs"]
mod tests;

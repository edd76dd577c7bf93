use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::copier;

/// The staging directory holding the result of the last copy invocation.
///
/// At most one staged set exists at a time; staging a new set replaces the
/// previous one wholesale. No locking is performed between concurrent
/// invocations.
pub struct Staging {
    dir: PathBuf,
}

impl Staging {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether anything has been staged.
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Removes the staging directory. Succeeds when it does not exist.
    pub fn clear(&self) -> Result<(), String> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!(
                "lcp: cannot clear staging directory '{}': {}",
                self.dir.display(),
                e
            )),
        }
    }

    /// Replaces the staged set with copies of `sources`.
    ///
    /// Every source is stat-checked up front, so a copy that would fail on a
    /// missing path leaves the previous staged set intact. Items are copied
    /// into a scratch sibling directory which is then renamed into place,
    /// avoiding a window where the staging directory is partially populated.
    pub fn stage(&self, sources: &[PathBuf]) -> Result<(), String> {
        for source in sources {
            fs::metadata(source)
                .map_err(|e| format!("lcp: cannot stat '{}': {}", source.display(), e))?;
        }

        let parent = self
            .dir
            .parent()
            .ok_or_else(|| format!("lcp: invalid staging directory '{}'", self.dir.display()))?;

        fs::create_dir_all(parent).map_err(|e| {
            format!("lcp: cannot create directory '{}': {}", parent.display(), e)
        })?;

        // Scratch dir is cleaned up on drop if any copy below fails.
        let scratch = tempfile::Builder::new()
            .prefix(".lcp-staging-")
            .tempdir_in(parent)
            .map_err(|e| format!("lcp: cannot create scratch directory: {e}"))?;

        for source in sources {
            let name = source.file_name().ok_or_else(|| {
                format!("lcp: cannot copy '{}': path has no base name", source.display())
            })?;
            copier::copy(source, &scratch.path().join(name))?;
        }

        self.clear()?;
        let scratch = scratch.keep();
        fs::rename(&scratch, &self.dir).map_err(|e| {
            format!(
                "lcp: cannot move staged files into '{}': {}",
                self.dir.display(),
                e
            )
        })
    }

    /// Every non-directory path under the staging directory.
    pub fn files(&self) -> Result<Vec<PathBuf>, String> {
        let mut files = Vec::new();
        walk(&self.dir, &mut files)?;
        Ok(files)
    }
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("lcp: cannot read directory '{}': {}", dir.display(), e))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| format!("lcp: error reading directory '{}': {}", dir.display(), e))?;

        let file_type = entry
            .file_type()
            .map_err(|e| format!("lcp: cannot stat '{}': {}", entry.path().display(), e))?;

        if file_type.is_dir() {
            walk(&entry.path(), files)?;
        } else {
            files.push(entry.path());
        }
    }

    Ok(())
}

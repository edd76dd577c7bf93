use std::path::PathBuf;

use crate::staging::Staging;

/// Stages the given paths, replacing any previously staged set.
pub fn run(paths: &[PathBuf], staging: &Staging, quiet: bool) -> Result<(), String> {
    if paths.is_empty() {
        return Err(String::from("lcp: nothing provided to copy"));
    }

    staging.stage(paths)?;

    if !quiet {
        for (index, path) in paths.iter().enumerate() {
            eprintln!("{} copied: {}", index + 1, path.display());
        }
    }

    Ok(())
}

use std::fs;
use std::path::Path;

/// Copies `source` to `destination`, recursing into directories.
///
/// Regular files are copied together with their permission bits. Directories
/// are created at the destination with the source's permissions and every
/// direct entry is copied with the same rule. Entries already present under
/// the destination that have no source counterpart are left untouched.
///
/// The first stat, read, write or chmod failure aborts the whole copy;
/// whatever was copied up to that point stays on disk.
pub fn copy(source: &Path, destination: &Path) -> Result<(), String> {
    let metadata = fs::metadata(source)
        .map_err(|e| format!("lcp: cannot stat '{}': {}", source.display(), e))?;

    if metadata.is_dir() {
        copy_dir(source, destination, &metadata)
    } else {
        copy_file(source, destination)
    }
}

fn copy_file(source: &Path, destination: &Path) -> Result<(), String> {
    // fs::copy writes the content and then applies the source's permissions
    fs::copy(source, destination).map(|_| ()).map_err(|e| {
        format!(
            "lcp: cannot copy '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        )
    })
}

fn copy_dir(source: &Path, destination: &Path, metadata: &fs::Metadata) -> Result<(), String> {
    let created = !destination.is_dir();

    fs::create_dir_all(destination).map_err(|e| {
        format!(
            "lcp: cannot create directory '{}': {}",
            destination.display(),
            e
        )
    })?;

    // A pre-existing destination keeps its own mode; only directories we
    // actually create inherit the source's permissions.
    if created {
        fs::set_permissions(destination, metadata.permissions()).map_err(|e| {
            format!(
                "lcp: cannot set permissions on '{}': {}",
                destination.display(),
                e
            )
        })?;
    }

    let entries = fs::read_dir(source)
        .map_err(|e| format!("lcp: cannot read directory '{}': {}", source.display(), e))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| format!("lcp: error reading directory '{}': {}", source.display(), e))?;

        copy(&entry.path(), &destination.join(entry.file_name()))?;
    }

    Ok(())
}

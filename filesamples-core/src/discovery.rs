//! File discovery module for finding media files to describe.
//!
//! Only the top level of a media directory is scanned. Every entry except a
//! sub-directory is returned regardless of extension. Symbolic links are kept
//! without being followed, so a dangling link still reaches the collector.


use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds the media files in the specified directory.
///
/// Entries are sorted by file name so that repeated runs over an unchanged
/// directory yield the same order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The discovered files (possibly empty)
/// * `Err(CoreError::PathError)` - If the directory cannot be listed
///
/// # Examples
///
/// ```rust,no_run
/// use filesamples_core::find_media_files;
/// use std::path::Path;
///
/// let files = find_media_files(Path::new("website/files/video")).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_media_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to read media directory '{}': {}",
            input_dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| {
            CoreError::PathError(format!(
                "Failed to enumerate media directory '{}': {}",
                input_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            CoreError::PathError(format!(
                "Failed to read entry type of '{}': {}",
                path.display(),
                e
            ))
        })?;

        if file_type.is_dir() {
            log::debug!("Skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_find_media_files_sorted_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path();

        File::create(input_dir.join("b.mp4")).unwrap();
        File::create(input_dir.join("a.mkv")).unwrap();
        File::create(input_dir.join("notes.txt")).unwrap();
        fs::create_dir(input_dir.join("subdir")).unwrap();
        File::create(input_dir.join("subdir").join("nested.mp4")).unwrap();

        let files = find_media_files(input_dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.mkv", "b.mp4", "notes.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_media_files_keeps_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path();

        File::create(input_dir.join("real.wav")).unwrap();
        std::os::unix::fs::symlink(input_dir.join("gone.wav"), input_dir.join("link.wav")).unwrap();
        fs::create_dir(input_dir.join("covers")).unwrap();
        std::os::unix::fs::symlink(input_dir.join("covers"), input_dir.join("covers-link")).unwrap();

        let names: Vec<_> = find_media_files(input_dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["covers-link", "link.wav", "real.wav"]);
    }

    #[test]
    fn test_find_media_files_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_media_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_find_media_files_nonexistent_dir() {
        let result = find_media_files(Path::new("surely_this_does_not_exist_42"));
        match result {
            Err(CoreError::PathError(msg)) => assert!(msg.contains("surely_this_does_not_exist_42")),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}

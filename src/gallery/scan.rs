/// Thumbnail directory listing
///
/// Lists the files directly inside the thumbnail directory. Enumeration
/// order from the filesystem is arbitrary, so names are sorted to keep
/// the generated gallery stable between runs.
///
/// Only a root directory that cannot be read is fatal. An entry whose
/// metadata cannot be read (e.g. a dangling symlink) is still listed.

use crate::error::{GalleryError, Result};
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// List the file names in `dir` (not recursive), sorted by name
pub async fn list_thumbnails_async(dir: PathBuf) -> Result<Vec<String>> {
    // WalkDir is blocking
    task::spawn_blocking(move || list_thumbnails(&dir)).await?
}

/// Blocking implementation of the directory listing
pub fn list_thumbnails(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(GalleryError::ReadDirectory {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                if let Some(name) = unreadable_entry_name(&err) {
                    warn!("Listing unreadable entry {}: {}", name, err);
                    names.push(name);
                } else {
                    warn!("Skipping unreadable entry: {}", err);
                }
                continue;
            }
        };

        // Only files (a directory named "x.png" is not a thumbnail)
        if !entry.file_type().is_file() {
            debug!("Skipping non-file entry {}", entry.path().display());
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!("Skipping non UTF-8 file name {:?}", entry.file_name()),
        }
    }

    // Sorted here rather than by WalkDir, which orders failed entries first
    names.sort();

    debug!("Found {} files in {}", names.len(), dir.display());
    Ok(names)
}

/// Name of an entry that was listed but could not be stat'ed.
/// Symlink loops are not thumbnails and yield None.
fn unreadable_entry_name(err: &walkdir::Error) -> Option<String> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    err.path()?.file_name()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b (Custom).jpg"), b"").unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let names = list_thumbnails(dir.path()).unwrap();
        assert_eq!(names, vec!["a.png", "b (Custom).jpg", "notes.txt"]);
    }

    #[test]
    fn test_directories_and_nested_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();
        fs::write(dir.path().join("folder.png").join("nested.png"), b"").unwrap();
        fs::write(dir.path().join("top.gif"), b"").unwrap();

        let names = list_thumbnails(dir.path()).unwrap();
        assert_eq!(names, vec!["top.gif"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_thumbnails(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = list_thumbnails(&missing).unwrap_err();
        assert!(matches!(err, GalleryError::ReadDirectory { path, .. } if path == missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("stale.png"))
            .unwrap();
        fs::write(dir.path().join("z.jpg"), b"").unwrap();

        let names = list_thumbnails(dir.path()).unwrap();
        assert_eq!(names, vec!["a.png", "stale.png", "z.jpg"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"\xff.png")), b"").unwrap();
        fs::write(dir.path().join("ok.png"), b"").unwrap();

        let names = list_thumbnails(dir.path()).unwrap();
        assert_eq!(names, vec!["ok.png"]);
    }

    #[tokio::test]
    async fn test_async_listing_matches_blocking() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.webp"), b"").unwrap();

        let names = list_thumbnails_async(dir.path().to_path_buf()).await.unwrap();
        assert_eq!(names, vec!["x.webp"]);
    }
}

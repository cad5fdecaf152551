//! Recursive candidate discovery under a catalog root.
//!
//! No extension filtering: every regular file is offered to the parser,
//! which decides what is a cartridge image.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lazy, single-pass sequence of files (and symlinks to files) under a root, in
/// filesystem traversal order.
///
/// Entries that cannot be read (permission errors, a missing root) are
/// logged and skipped.
pub struct CandidatePaths {
    walker: walkdir::IntoIter,
}

impl Iterator for CandidatePaths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.walker.next()? {
                Ok(entry) if entry.file_type().is_file() => return Some(entry.into_path()),
                // Not followed, so a link to a directory is never descended
                Ok(entry) if entry.path_is_symlink() && entry.path().is_file() => {
                    return Some(entry.into_path());
                }
                Ok(_) => continue,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "?".to_string());
                    log::warn!("Skipping unreadable entry {}: {}", path, e);
                }
            }
        }
    }
}

/// Walk `root` recursively. Symlinks to files are yielded as-is; symlinks
/// to directories are not followed.
pub fn scan(root: &Path) -> CandidatePaths {
    CandidatePaths {
        walker: WalkDir::new(root).follow_links(false).into_iter(),
    }
}

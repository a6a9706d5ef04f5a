//! Local path handling for uploads
//!
//! Depth-first discovery of the files under a directory, and derivation of
//! public ids from local paths.

use crate::models::ResourceType;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily walk `dir` depth-first, yielding every regular file in file name
/// order. Directories and symlinks are skipped using the walk's own
/// (unfollowed) file type. The walk yields an error at the first entry it
/// cannot read; callers are expected to stop there.
pub fn walk_files(dir: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    let root = dir.to_path_buf();

    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(Error::Walk {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone()),
                source: e,
            })),
        })
}

/// Public id for a local file: the parent directory name joined with the
/// file name. Images drop their extension, raw files keep it.
///
/// `/tmp/images/logo.png` as an image gives `images/logo`;
/// `/tmp/css/default.css` as raw gives `css/default.css`.
pub fn public_id_for(path: &Path, resource_type: ResourceType) -> String {
    let name = match resource_type {
        ResourceType::Image => path.file_stem(),
        ResourceType::Raw => path.file_name(),
    }
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();

    match path.parent().and_then(Path::file_name) {
        Some(parent) => format!("{}/{}", parent.to_string_lossy(), name),
        None => name,
    }
}

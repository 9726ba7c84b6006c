//! Directory walkers.
//!
//! Both walkers list files only (directories are traversed, not
//! reported) and treat a missing root as an empty result rather than an
//! error, so callers can probe optional directories without an existence
//! check. `deep == false` restricts either walker to the root's immediate
//! files.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Depth-first file listing under `root`.
pub fn walk_depth(root: impl AsRef<Path>, deep: bool) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Ok(Vec::new());
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    debug!(path = %root.display(), deep, "Walking directory depth-first");

    let max_depth = if deep { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Breadth-first file listing under `root`.
///
/// Level order is the point of this variant: all files of a directory
/// level appear before any file of the next level.
pub fn walk_breadth(root: impl AsRef<Path>, deep: bool) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Ok(Vec::new());
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    debug!(path = %root.display(), deep, "Walking directory breadth-first");

    let mut files = Vec::new();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let mut subdirs = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            } else if path.is_dir() {
                subdirs.push(path);
            }
        }
        if !deep {
            break;
        }
        // Keep sibling directories in a stable order for level-ordered output.
        subdirs.sort();
        queue.extend(subdirs);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Layout:
    ///   root/a.txt
    ///   root/b.txt
    ///   root/sub/c.txt
    ///   root/sub/deeper/d.txt
    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("sub").join("deeper")).unwrap();
        std::fs::write(root.join("a.txt"), "a").unwrap();
        std::fs::write(root.join("b.txt"), "b").unwrap();
        std::fs::write(root.join("sub").join("c.txt"), "c").unwrap();
        std::fs::write(root.join("sub").join("deeper").join("d.txt"), "d").unwrap();
        dir
    }

    #[test]
    fn test_walk_depth_shallow() {
        let dir = fixture();
        let mut files = walk_depth(dir.path(), false).unwrap();
        files.sort();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_walk_depth_deep() {
        let dir = fixture();
        let files = walk_depth(dir.path(), true).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.iter().any(|p| p.ends_with("deeper/d.txt")));
    }

    #[test]
    fn test_walk_breadth_shallow() {
        let dir = fixture();
        let mut files = walk_breadth(dir.path(), false).unwrap();
        files.sort();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_walk_breadth_is_level_ordered() {
        let dir = fixture();
        let files = walk_breadth(dir.path(), true).unwrap();
        assert_eq!(files.len(), 4);

        let depth_of = |p: &PathBuf| p.strip_prefix(dir.path()).unwrap().components().count();
        let depths: Vec<_> = files.iter().map(depth_of).collect();
        let mut sorted = depths.clone();
        sorted.sort_unstable();
        assert_eq!(depths, sorted, "files must appear level by level");
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(walk_depth(&missing, true).unwrap().is_empty());
        assert!(walk_breadth(&missing, true).unwrap().is_empty());
    }

    #[test]
    fn test_file_root_returns_itself() {
        let dir = fixture();
        let file = dir.path().join("a.txt");
        assert_eq!(walk_depth(&file, true).unwrap(), vec![file.clone()]);
        assert_eq!(walk_breadth(&file, false).unwrap(), vec![file]);
    }
}

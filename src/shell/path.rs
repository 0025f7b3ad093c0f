//! Search-path lookup
//!
//! Walks a `:`-separated directory list left to right and returns the first
//! directory holding an entry whose name matches exactly:
//! - `/usr/local/bin:/usr/bin` + `ls` -> `/usr/bin/ls`
//! - Empty segments (`a::b`) are ignored
//! - Unreadable directories are recorded and skipped, never fatal

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::InaccessibleDir;

/// Separator between directories in a search path
pub const SEPARATOR: char = ':';

/// Result of walking a search path for one name.
#[derive(Debug, Default)]
pub struct Search {
    /// `dir/name` for the first directory containing `name`
    pub found: Option<PathBuf>,
    /// Directories that could not be read, in the order they were tried
    pub inaccessible: Vec<InaccessibleDir>,
}

/// Non-empty directories of a search path, in order.
pub fn directories(search_path: &str) -> impl Iterator<Item = &str> {
    search_path.split(SEPARATOR).filter(|d| !d.is_empty())
}

/// Find `name` in the directories of `search_path`. First match wins.
pub fn search(name: &str, search_path: &str) -> Search {
    let mut outcome = Search::default();

    for dir in directories(search_path) {
        let dir = Path::new(dir);
        match dir_contains(dir, name) {
            Ok(true) => {
                outcome.found = Some(dir.join(name));
                break;
            }
            Ok(false) => {}
            Err(source) => {
                debug!(dir = %dir.display(), error = %source, "skipping unreadable search directory");
                outcome.inaccessible.push(InaccessibleDir {
                    dir: dir.to_path_buf(),
                    source,
                });
            }
        }
    }

    outcome
}

/// Locate the program to launch for `name`.
///
/// Names containing a `/` are taken as paths and not searched for.
pub fn locate(name: &str, search_path: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    if name.contains('/') {
        return Some(PathBuf::from(name));
    }
    search(name, search_path).found
}

fn dir_contains(dir: &Path, name: &str) -> io::Result<bool> {
    let wanted = OsStr::new(name);
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        if entry.file_name() == wanted {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use crate::shell::test_support::{make_unique_temp_dir, touch};
    use super::*;

    fn join<P: AsRef<Path>>(dirs: &[P]) -> String {
        dirs.iter()
            .map(|d| d.as_ref().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(":")
    }

    #[test]
    fn test_directories_skip_empty_segments() {
        let dirs: Vec<&str> = directories(":/a::/b:").collect();
        assert_eq!(dirs, vec!["/a", "/b"]);
    }

    #[test]
    fn test_finds_in_single_dir() {
        let dir = make_unique_temp_dir("single");
        touch(&dir, "tool");

        let outcome = search("tool", &join(&[&dir]));
        assert_eq!(outcome.found, Some(dir.join("tool")));
        assert!(outcome.inaccessible.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_first_match_wins() {
        let first = make_unique_temp_dir("first");
        let second = make_unique_temp_dir("second");
        touch(&first, "tool");
        touch(&second, "tool");

        let outcome = search("tool", &join(&[&first, &second]));
        assert_eq!(outcome.found, Some(first.join("tool")));

        let outcome = search("tool", &join(&[&second, &first]));
        assert_eq!(outcome.found, Some(second.join("tool")));

        let _ = fs::remove_dir_all(&first);
        let _ = fs::remove_dir_all(&second);
    }

    #[test]
    fn test_exact_name_only() {
        let dir = make_unique_temp_dir("exact");
        touch(&dir, "toolbox");
        touch(&dir, "Tool");

        let outcome = search("tool", &join(&[&dir]));
        assert!(outcome.found.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_not_found_scans_every_dir() {
        let a = make_unique_temp_dir("nf_a");
        let b = make_unique_temp_dir("nf_b");
        touch(&a, "other");
        let missing = a.join("does_not_exist");

        let outcome = search("nonexistent_xyz", &join(&[&a, &missing, &b]));
        assert!(outcome.found.is_none());
        assert_eq!(outcome.inaccessible.len(), 1);
        assert_eq!(outcome.inaccessible[0].dir, missing);

        let _ = fs::remove_dir_all(&a);
        let _ = fs::remove_dir_all(&b);
    }

    #[test]
    fn test_unreadable_dir_is_skipped() {
        let good = make_unique_temp_dir("skip");
        touch(&good, "tool");
        let missing = good.join("gone");

        let outcome = search("tool", &join(&[&missing, &good]));
        assert_eq!(outcome.found, Some(good.join("tool")));
        assert_eq!(outcome.inaccessible.len(), 1);
        assert_eq!(
            outcome.inaccessible[0].source.kind(),
            io::ErrorKind::NotFound
        );

        let _ = fs::remove_dir_all(&good);
    }

    #[test]
    fn test_empty_search_path() {
        let outcome = search("ls", "");
        assert!(outcome.found.is_none());
        assert!(outcome.inaccessible.is_empty());
    }

    #[test]
    fn test_locate_paths_are_not_searched() {
        assert_eq!(locate("./run.sh", ""), Some(PathBuf::from("./run.sh")));
        assert_eq!(locate("/bin/sh", ""), Some(PathBuf::from("/bin/sh")));
        assert_eq!(locate("", "/bin"), None);
    }

    #[test]
    fn test_locate_uses_search() {
        let dir = make_unique_temp_dir("locate");
        touch(&dir, "tool");

        assert_eq!(locate("tool", &join(&[&dir])), Some(dir.join("tool")));
        assert_eq!(locate("absent", &join(&[&dir])), None);

        let _ = fs::remove_dir_all(&dir);
    }
}

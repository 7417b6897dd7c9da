//! Find a gamepad among the evdev nodes in the input directory.
//!
//! Gamepads following the Linux gamepad protocol (Documentation/input/gamepad.rst)
//! always report BTN_SOUTH (aka BTN_A / BTN_GAMEPAD), so that is what we probe for.
//!
//! With several gamepads connected, which one is found first depends on
//! directory iteration order and is not stable across systems or runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use evdevil::event::Key;
use evdevil::Evdev;

use crate::error::DiscoveryError;

pub const DEFAULT_INPUT_DIR: &str = "/dev/input";

/// An evdev node seen while scanning, for `list`.
#[derive(Debug)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: Option<String>,
    pub gamepad: bool,
}

/// Return the first event node in `dir` that looks like a gamepad.
pub fn find_gamepad(dir: &Path) -> Result<PathBuf, DiscoveryError> {
    for path in event_nodes(dir)? {
        match probe(&path) {
            Ok(true) => {
                log::debug!("{} supports BTN_SOUTH", path.display());
                return Ok(path);
            }
            Ok(false) => log::debug!("{} is not a gamepad", path.display()),
            Err(e) => log::debug!("Skipping {}: {}", path.display(), e),
        }
    }
    Err(DiscoveryError::NotFound {
        dir: dir.to_path_buf(),
    })
}

/// Every event node in `dir`, sorted by path, with its name and gamepad flag.
pub fn list(dir: &Path) -> Result<Vec<Candidate>, DiscoveryError> {
    let mut candidates: Vec<Candidate> = event_nodes(dir)?
        .into_iter()
        .map(|path| match Evdev::open(&path) {
            Ok(dev) => Candidate {
                name: dev.name().ok(),
                gamepad: has_south_button(&dev).unwrap_or(false),
                path,
            },
            Err(e) => {
                log::warn!("Cannot open {}: {}", path.display(), e);
                Candidate {
                    path,
                    name: None,
                    gamepad: false,
                }
            }
        })
        .collect();
    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}

/// Open `path` just long enough to check its key capabilities.
pub fn probe(path: &Path) -> io::Result<bool> {
    let dev = Evdev::open(path)?;
    has_south_button(&dev)
}

fn has_south_button(dev: &Evdev) -> io::Result<bool> {
    Ok(dev.supported_keys()?.contains(Key::BTN_SOUTH))
}

fn event_nodes(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    Ok(entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_event_node(path))
        .collect())
}

/// `by-id`, `by-path`, `mouse0`, `js0` etc. are skipped.
fn is_event_node(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains("event"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn event_node_names() {
        assert!(is_event_node(Path::new("/dev/input/event0")));
        assert!(is_event_node(Path::new("/dev/input/event17")));
        assert!(!is_event_node(Path::new("/dev/input/by-path")));
        assert!(!is_event_node(Path::new("/dev/input/mouse0")));
        assert!(!is_event_node(Path::new("/dev/input/js0")));
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let err = find_gamepad(Path::new("/nonexistent/input")).unwrap_err();
        assert!(matches!(err, DiscoveryError::ReadDir { .. }));
    }

    #[test]
    fn directory_without_gamepads_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("by-path")).unwrap();
        File::create(dir.path().join("mouse0")).unwrap();
        // A regular file opens fine but fails the capability ioctl.
        File::create(dir.path().join("event0")).unwrap();

        let err = find_gamepad(dir.path()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound { .. }));
        assert!(err.to_string().contains("no gamepad found"));
    }

    #[test]
    fn list_only_reports_event_nodes() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("event3")).unwrap();
        File::create(dir.path().join("event1")).unwrap();
        File::create(dir.path().join("mice")).unwrap();

        let candidates = list(dir.path()).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["event1", "event3"]);
        assert!(candidates.iter().all(|c| !c.gamepad));
    }
}

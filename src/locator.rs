use std::path::{Path, PathBuf};

const ICON_FILE_NAME: &str = "icon.png";

/// Takes a located icon file and makes it the program's displayed icon.
/// One implementation per windowing platform; see `WindowTarget` for winit.
pub trait IconTarget {
    fn apply_icon(&self, path: &Path);
}

/// Build the ordered list of locations probed for the icon asset.
///
/// `argv0` is the program's own invocation path, used as-is. A bare name has
/// an empty parent, so the executable-relative candidates collapse onto the
/// cwd-relative ones; the list stays four entries either way.
pub fn candidate_paths(argv0: &str) -> Vec<PathBuf> {
    let exe_dir = Path::new(argv0).parent().unwrap_or(Path::new(""));
    vec![
        exe_dir.join(ICON_FILE_NAME),
        exe_dir.join("resources").join(ICON_FILE_NAME),
        // cwd-relative, for running from a source tree
        Path::new("resources").join(ICON_FILE_NAME),
        PathBuf::from(ICON_FILE_NAME),
    ]
}

/// First candidate that exists on disk, or `None` when the program has no
/// icon to show. Only reads the filesystem, never writes.
pub fn locate_icon(argv0: &str) -> Option<PathBuf> {
    first_existing(candidate_paths(argv0), |p| {
        log::debug!("Probing for icon at {}", p.display());
        p.exists()
    })
}

fn first_existing<F>(candidates: Vec<PathBuf>, mut exists: F) -> Option<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    candidates.into_iter().find(|p| exists(p))
}

/// Locate the icon near `argv0` and hand it to `target`.
///
/// A missing icon is a normal outcome, not an error: a warning is logged and
/// nothing else happens.
pub fn set_icon<T: IconTarget>(argv0: &str, target: &T) {
    match locate_icon(argv0) {
        Some(path) => {
            log::info!("Using icon from: {}", path.display());
            target.apply_icon(&path);
        }
        None => {
            log::warn!("Icon file not found in any of the expected locations");
        }
    }
}

use std::path::Path;
use winit::window::Window;

use crate::icon::{load_icon, LoadedIcon};
use crate::locator::IconTarget;

/// The winit implementation of `IconTarget`: decodes the located file and
/// installs it as the window's icon.
pub struct WindowTarget<'a> {
    window: &'a Window,
}

impl<'a> WindowTarget<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl IconTarget for WindowTarget<'_> {
    fn apply_icon(&self, path: &Path) {
        // A file that exists but fails to decode leaves the default system
        // icon in place; startup continues either way.
        match load_icon(path).and_then(LoadedIcon::into_window_icon) {
            Ok(icon) => self.window.set_window_icon(Some(icon)),
            Err(e) => {
                log::warn!("Failed to set window icon from {}: {}", path.display(), e);
            }
        }
    }
}

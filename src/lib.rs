//! Find an application's icon on disk and apply it to the program's window.
//!
//! The search runs over a fixed, ordered candidate list: `icon.png` next to
//! the executable, then in a `resources` directory next to the executable,
//! then `resources/icon.png` and `icon.png` relative to the current working
//! directory. The first existing file wins. A program with no icon anywhere
//! is not an error; `set_icon` logs a warning and leaves the default system
//! icon in place.
//!
//! Typical startup wiring:
//!
//! ```no_run
//! # use winit::{event_loop::EventLoop, window::WindowBuilder};
//! use window_icon::{set_icon, WindowTarget};
//!
//! let event_loop = EventLoop::new().unwrap();
//! let window = WindowBuilder::new().build(&event_loop).unwrap();
//! let argv0 = std::env::args().next().unwrap_or_default();
//! set_icon(&argv0, &WindowTarget::new(&window));
//! ```

pub mod icon;
pub mod locator;
pub mod window;

pub use icon::{load_icon, LoadedIcon};
pub use locator::{candidate_paths, locate_icon, set_icon, IconTarget};
pub use window::WindowTarget;

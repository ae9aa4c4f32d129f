//! Window system abstraction
//!
//! The session only needs three things from the OS: find a top-level window
//! owned by a process, read its rectangle, and move it. Native backends live
//! in `flashfit-desktop`.

use crate::types::{Placement, Rect, WindowHandle};
use crate::Result;

/// Access to the platform's top-level windows
pub trait WindowSystem {
    /// Find the main window of process `pid`, optionally requiring an exact title
    fn find_window(&self, pid: u32, title: Option<&str>) -> Result<Option<WindowHandle>>;

    /// Current outer rectangle of a window, in screen coordinates
    fn window_rect(&self, handle: WindowHandle) -> Result<Rect>;

    /// Move and resize a window, raising it to the top of the z-order
    fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> Result<()>;
}

impl<T: WindowSystem + ?Sized> WindowSystem for &T {
    fn find_window(&self, pid: u32, title: Option<&str>) -> Result<Option<WindowHandle>> {
        (**self).find_window(pid, title)
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<Rect> {
        (**self).window_rect(handle)
    }

    fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> Result<()> {
        (**self).set_placement(handle, placement)
    }
}

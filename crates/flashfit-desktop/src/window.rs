//! Native window management

#[cfg(windows)]
pub use win32::Win32WindowSystem;

#[cfg(not(windows))]
pub use unsupported::UnsupportedWindowSystem;

/// Window system for the platform being built
#[cfg(windows)]
pub type NativeWindowSystem = Win32WindowSystem;

/// Window system for the platform being built
#[cfg(not(windows))]
pub type NativeWindowSystem = UnsupportedWindowSystem;

#[cfg(windows)]
mod win32 {
    use std::ptr;

    use flashfit_core::{Error, Placement, Rect, Result, WindowHandle, WindowSystem};
    use tracing::{debug, trace};
    use windows_sys::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, RECT, TRUE};
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
        GetWindowThreadProcessId, IsWindowVisible, SetWindowPos, GW_OWNER,
    };

    /// Top-level windows through the Win32 API
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Win32WindowSystem;

    impl Win32WindowSystem {
        pub fn new() -> Self {
            Self
        }
    }

    /// State shared with the `EnumWindows` callback
    struct Search<'a> {
        pid: u32,
        title: Option<&'a str>,
        found: HWND,
    }

    unsafe extern "system" fn match_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
        let search = &mut *(lparam as *mut Search<'_>);

        let mut owner_pid = 0u32;
        GetWindowThreadProcessId(hwnd, &mut owner_pid);
        if owner_pid != search.pid {
            return TRUE;
        }

        // Skip hidden helper windows and owned popups
        if IsWindowVisible(hwnd) == FALSE || !GetWindow(hwnd, GW_OWNER).is_null() {
            return TRUE;
        }

        if let Some(title) = search.title {
            let actual = window_title(hwnd);
            trace!(%actual, "Candidate window");
            if actual != title {
                return TRUE;
            }
        }

        search.found = hwnd;
        FALSE
    }

    unsafe fn window_title(hwnd: HWND) -> String {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
        String::from_utf16_lossy(&buf[..copied.max(0) as usize])
    }

    fn os_error(call: &str) -> Error {
        Error::WindowSystem(format!("{} failed: {}", call, std::io::Error::last_os_error()))
    }

    fn hwnd(handle: WindowHandle) -> HWND {
        handle.0 as HWND
    }

    impl WindowSystem for Win32WindowSystem {
        fn find_window(&self, pid: u32, title: Option<&str>) -> Result<Option<WindowHandle>> {
            let mut search = Search { pid, title, found: ptr::null_mut() };

            // Returns FALSE when the callback stops early, which is the success case
            unsafe {
                EnumWindows(Some(match_window), &mut search as *mut Search<'_> as LPARAM);
            }

            if search.found.is_null() {
                debug!(pid, "No matching top-level window");
                Ok(None)
            } else {
                Ok(Some(WindowHandle(search.found as isize)))
            }
        }

        fn window_rect(&self, handle: WindowHandle) -> Result<Rect> {
            let mut rect = RECT { left: 0, top: 0, right: 0, bottom: 0 };
            if unsafe { GetWindowRect(hwnd(handle), &mut rect) } == FALSE {
                return Err(os_error("GetWindowRect"));
            }
            Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
        }

        fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> Result<()> {
            // Null insert-after handle is HWND_TOP
            let ok = unsafe {
                SetWindowPos(
                    hwnd(handle),
                    ptr::null_mut(),
                    placement.x,
                    placement.y,
                    placement.width,
                    placement.height,
                    0,
                )
            };
            if ok == FALSE {
                return Err(os_error("SetWindowPos"));
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_unknown_pid_has_no_window() {
            let windows = Win32WindowSystem::new();
            assert_eq!(windows.find_window(u32::MAX - 1, None).unwrap(), None);
        }

        #[test]
        fn test_invalid_handle_errors() {
            let windows = Win32WindowSystem::new();
            let err = windows.window_rect(WindowHandle(0)).unwrap_err();
            assert_eq!(err.error_code(), "WINDOW_SYSTEM");
        }
    }
}

#[cfg(not(windows))]
mod unsupported {
    use flashfit_core::{Error, Placement, Rect, Result, WindowHandle, WindowSystem};

    /// Placeholder for platforms without foreign window control
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UnsupportedWindowSystem;

    impl UnsupportedWindowSystem {
        pub fn new() -> Self {
            Self
        }
    }

    impl WindowSystem for UnsupportedWindowSystem {
        fn find_window(&self, _pid: u32, _title: Option<&str>) -> Result<Option<WindowHandle>> {
            Err(Error::UnsupportedPlatform)
        }

        fn window_rect(&self, _handle: WindowHandle) -> Result<Rect> {
            Err(Error::UnsupportedPlatform)
        }

        fn set_placement(&self, _handle: WindowHandle, _placement: &Placement) -> Result<()> {
            Err(Error::UnsupportedPlatform)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_every_call_is_unsupported() {
            let windows = UnsupportedWindowSystem::new();
            assert!(matches!(windows.find_window(1, None), Err(Error::UnsupportedPlatform)));
            assert!(matches!(windows.window_rect(WindowHandle(1)), Err(Error::UnsupportedPlatform)));

            let placement = Placement { x: 0, y: 0, width: 1, height: 1 };
            assert!(matches!(
                windows.set_placement(WindowHandle(1), &placement),
                Err(Error::UnsupportedPlatform)
            ));
        }
    }
}

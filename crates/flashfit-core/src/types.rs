//! Core geometry and window types

use serde::Serialize;

/// Screen-space rectangle, edges in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle of the given size anchored at the origin
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Edge distance, widened so extreme edges cannot overflow
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width(), self.height(), self.left, self.top)
    }
}

/// Per-edge size of the non-client chrome around a window's content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BorderOffsets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl BorderOffsets {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Combined left and right chrome
    pub fn horizontal(&self) -> i64 {
        i64::from(self.left) + i64::from(self.right)
    }

    /// Combined title bar and bottom chrome
    pub fn vertical(&self) -> i64 {
        i64::from(self.top) + i64::from(self.bottom)
    }
}

/// Known window manager layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsPreset {
    Win10,
    Win11,
}

impl OsPreset {
    /// Match a lowercased command-line token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "/win10" => Some(Self::Win10),
            "/win11" => Some(Self::Win11),
            _ => None,
        }
    }

    /// Standard window chrome for this OS
    pub fn borders(&self) -> BorderOffsets {
        match self {
            Self::Win10 | Self::Win11 => BorderOffsets::new(8, 8, 51, 8),
        }
    }

    /// Height of the taskbar docked at the bottom of the screen
    pub fn taskbar_height(&self) -> i32 {
        match self {
            Self::Win10 => 40,
            Self::Win11 => 48,
        }
    }
}

/// Final outer window position and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Opaque OS window identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size() {
        let rect = Rect::new(100, 50, 900, 650);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert_eq!(rect.to_string(), "800x600+100+50");
    }

    #[test]
    fn test_presets() {
        assert_eq!(OsPreset::from_token("/win10"), Some(OsPreset::Win10));
        assert_eq!(OsPreset::from_token("/win11"), Some(OsPreset::Win11));
        assert_eq!(OsPreset::from_token("/win7"), None);

        assert_eq!(OsPreset::Win11.borders().horizontal(), 16);
        assert_eq!(OsPreset::Win11.borders().vertical(), 59);
        assert_eq!(OsPreset::Win10.taskbar_height(), 40);
        assert_eq!(OsPreset::Win11.taskbar_height(), 48);
    }

    #[test]
    fn test_extreme_edges_do_not_overflow() {
        let rect = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(rect.width(), u32::MAX as i64);
        assert_eq!(rect.height(), u32::MAX as i64);

        let borders = BorderOffsets::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        assert_eq!(borders.horizontal(), 2 * i32::MAX as i64);
        assert_eq!(borders.vertical(), 2 * i32::MIN as i64);
    }
}

//! Aspect-ratio preserving fit of a window into a display area

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BorderOffsets, Placement, Rect};

/// Compute the largest placement of `window` inside `display` that keeps the
/// client area's aspect ratio, centered along the axis with slack.
///
/// `window` is the current outer window rectangle. Chrome given by `borders`
/// is excluded from the ratio and added back to the resulting size.
pub fn fit(window: Rect, display: Rect, borders: BorderOffsets) -> Result<Placement> {
    let w = window.width() - borders.horizontal();
    let h = window.height() - borders.vertical();
    if w <= 0 || h <= 0 {
        return Err(Error::DegenerateWindow { width: w, height: h });
    }

    let max_w = display.width() - borders.horizontal();
    let max_h = display.height() - borders.vertical();
    if max_w <= 0 || max_h <= 0 {
        return Err(Error::InvalidDisplayArea { width: max_w, height: max_h });
    }

    let ar = w as f64 / h as f64;
    let max_ar = max_w as f64 / max_h as f64;

    let (nw, nh, x_off, y_off) = if ar > max_ar {
        let nh = (max_w as f64 / ar) as i64;
        (max_w, nh, 0, (max_h - nh) / 2)
    } else {
        let nw = (max_h as f64 * ar) as i64;
        (nw, max_h, (max_w - nw) / 2, 0)
    };

    // Edges may sit anywhere in i32 range, so the result can fall outside it
    let to_screen = |v: i64| {
        i32::try_from(v).map_err(|_| Error::InvalidDisplayArea { width: max_w, height: max_h })
    };
    let placement = Placement {
        x: to_screen(i64::from(display.left) + x_off)?,
        y: to_screen(i64::from(display.top) + y_off)?,
        width: to_screen(nw + borders.horizontal())?,
        height: to_screen(nh + borders.vertical())?,
    };

    debug!(
        client = %format!("{}x{}", w, h),
        fitted = %format!("{}x{}", nw, nh),
        aspect = ar,
        display_aspect = max_ar,
        %placement,
        "Computed fit"
    );

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_window_is_width_bound() {
        // 800x400 client into 1000x1000: scale to 1000x500, centered vertically
        let placement = fit(
            Rect::from_size(800, 400),
            Rect::from_size(1000, 1000),
            BorderOffsets::default(),
        )
        .unwrap();
        assert_eq!(placement, Placement { x: 0, y: 250, width: 1000, height: 500 });
    }

    #[test]
    fn test_tall_window_is_height_bound() {
        let placement = fit(
            Rect::from_size(400, 300),
            Rect::from_size(1920, 1080),
            BorderOffsets::default(),
        )
        .unwrap();
        assert_eq!(placement, Placement { x: 240, y: 0, width: 1440, height: 1080 });
    }

    #[test]
    fn test_matching_ratio_fills_display() {
        let placement = fit(
            Rect::new(50, 50, 690, 410),
            Rect::new(100, 20, 1380, 740),
            BorderOffsets::default(),
        )
        .unwrap();
        assert_eq!(placement, Placement { x: 100, y: 20, width: 1280, height: 720 });
    }

    #[test]
    fn test_equal_ratio_is_height_bound() {
        // Width bound would give trunc(1 / (1 / 99)) = 98 rows; height bound keeps all 99
        let placement = fit(
            Rect::from_size(1, 99),
            Rect::new(10, 10, 11, 109),
            BorderOffsets::default(),
        )
        .unwrap();
        assert_eq!(placement, Placement { x: 10, y: 10, width: 1, height: 99 });
    }

    #[test]
    fn test_borders_excluded_from_ratio() {
        // Win10 chrome around a 640x480 client, 1920x1040 usable display
        let borders = BorderOffsets::new(8, 8, 51, 8);
        let window = Rect::new(200, 100, 200 + 640 + 16, 100 + 480 + 59);
        let placement = fit(window, Rect::from_size(1920, 1040), borders).unwrap();

        // max client 1904x981, height bound: 981 * 4/3 = 1308
        assert_eq!(placement.height, 981 + 59);
        assert_eq!(placement.width, 1308 + 16);
        assert_eq!(placement.x, (1904 - 1308) / 2);
        assert_eq!(placement.y, 0);
    }

    #[test]
    fn test_fractional_sizes_truncate() {
        // 3:1 client into 100x100: 100 / 3 = 33.33 -> 33, offset (100 - 33) / 2 = 33
        let placement = fit(
            Rect::from_size(300, 100),
            Rect::from_size(100, 100),
            BorderOffsets::default(),
        )
        .unwrap();
        assert_eq!(placement, Placement { x: 0, y: 33, width: 100, height: 33 });
    }

    #[test]
    fn test_degenerate_inputs() {
        let borders = BorderOffsets::new(8, 8, 51, 8);
        let err = fit(Rect::from_size(16, 100), Rect::from_size(1920, 1080), borders).unwrap_err();
        assert!(matches!(err, Error::DegenerateWindow { width: 0, .. }));

        let err = fit(Rect::from_size(640, 480), Rect::default(), borders).unwrap_err();
        assert!(matches!(err, Error::InvalidDisplayArea { .. }));
    }

    #[test]
    fn test_extreme_display_edges() {
        // Display spans the whole i32 range: width 2^32 - 1 is computed without overflow
        let display = Rect::new(i32::MIN, 0, i32::MAX, 100);
        let placement = fit(Rect::from_size(100, 100), display, BorderOffsets::default()).unwrap();
        assert_eq!(placement, Placement { x: -51, y: 0, width: 100, height: 100 });

        // Filling that display needs a width no screen coordinate can hold
        let err = fit(display, display, BorderOffsets::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidDisplayArea { width: 4_294_967_295, height: 100 }));
    }

    #[test]
    fn test_extreme_borders() {
        let borders = BorderOffsets::new(i32::MAX, i32::MAX, 0, 0);
        let err = fit(Rect::from_size(640, 480), Rect::from_size(1920, 1080), borders).unwrap_err();
        assert!(matches!(err, Error::DegenerateWindow { .. }));
    }
}

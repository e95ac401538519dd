//! Inspector-aware camera offset
//!
//! The inspector panel can occlude a fly-to target, so the target is shifted
//! laterally by half the panel width. The amount depends only on layout
//! numbers that are passed in explicitly, which keeps the function testable
//! without a layout engine, and it is recomputed on every call rather than
//! memoized across layout changes.

use pm_host::DisplayMode;

/// Width assumed for the inspector before it has rendered.
pub const INSPECTOR_FALLBACK_WIDTH: f64 = 360.0;
/// Viewport width at and above which the inspector sits on the right.
pub const XL_BREAKPOINT: f64 = 1280.0;

/// Live layout numbers the offset depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub viewport_width: f64,
    /// Measured inspector width, when the panel is rendered.
    pub inspector_width: Option<f64>,
}

/// Supplies layout metrics at the moment a camera command is built.
pub trait LayoutProbe {
    fn metrics(&self) -> LayoutMetrics;
}

/// Lateral pixel shift that keeps a fly-to target clear of the inspector.
///
/// Inline mode never shifts. In fullscreen the target moves by half the
/// inspector width: negative (left) on wide viewports where the panel is on
/// the right, positive (right) on narrower ones where it is on the left.
pub fn inspector_offset_px(mode: DisplayMode, metrics: LayoutMetrics) -> i32 {
    if mode != DisplayMode::Fullscreen {
        return 0;
    }
    let width = metrics.inspector_width.unwrap_or(INSPECTOR_FALLBACK_WIDTH);
    let half = (width / 2.0).round() as i32;
    if metrics.viewport_width >= XL_BREAKPOINT {
        -half
    } else {
        half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_mode_never_offsets() {
        let metrics = LayoutMetrics {
            viewport_width: 1600.0,
            inspector_width: Some(400.0),
        };
        assert_eq!(inspector_offset_px(DisplayMode::Inline, metrics), 0);
    }

    #[test]
    fn wide_viewport_shifts_left() {
        let metrics = LayoutMetrics {
            viewport_width: 1280.0,
            inspector_width: Some(400.0),
        };
        assert_eq!(inspector_offset_px(DisplayMode::Fullscreen, metrics), -200);
    }

    #[test]
    fn narrow_viewport_shifts_right() {
        let metrics = LayoutMetrics {
            viewport_width: 1279.0,
            inspector_width: Some(400.0),
        };
        assert_eq!(inspector_offset_px(DisplayMode::Fullscreen, metrics), 200);
    }

    #[test]
    fn unrendered_panel_uses_fallback_width() {
        let metrics = LayoutMetrics {
            viewport_width: 1440.0,
            inspector_width: None,
        };
        assert_eq!(inspector_offset_px(DisplayMode::Fullscreen, metrics), -180);
    }

    #[test]
    fn half_width_is_rounded() {
        let metrics = LayoutMetrics {
            viewport_width: 1000.0,
            inspector_width: Some(361.0),
        };
        assert_eq!(inspector_offset_px(DisplayMode::Fullscreen, metrics), 181);
    }
}

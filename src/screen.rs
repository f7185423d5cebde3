//! Display metrics, read fresh by the caller before each geometry request.

use crate::constraint::{Position, Rect, Size};
use crate::rotation::{RotationAngle, compute_scale};

/// Metrics of the display the window lives on.
///
/// Displays change after startup (resolution switches, docks, monitors
/// plugged in), so a `ScreenInfo` is a snapshot for one call. Nothing in this
/// crate keeps one around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScreenInfo {
    /// Area available to application windows, excluding system chrome.
    pub usable: Rect,
    /// Physical pixel size of the screen.
    pub size: Size,
}

impl ScreenInfo {
    pub const fn new(usable: Rect, size: Size) -> Self {
        Self { usable, size }
    }

    /// A screen with no reserved chrome: the usable area is the whole screen.
    pub const fn full(size: Size) -> Self {
        Self {
            usable: Rect::new(0, 0, size.width, size.height),
            size,
        }
    }

    /// Size of the usable area.
    pub const fn usable_size(&self) -> Size {
        self.usable.size()
    }

    /// Physical `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.size.aspect_ratio()
    }

    /// Top-left that centers a window of `size` on the physical screen,
    /// flooring half pixels.
    pub fn centered(&self, size: Size) -> Position {
        let left = (self.size.width as i64 - size.width as i64).div_euclid(2);
        let top = (self.size.height as i64 - size.height as i64).div_euclid(2);
        Position::new(left as i32, top as i32)
    }

    /// [`compute_scale`] with the window ratio defaulting to this screen's
    /// physical ratio.
    pub fn rotation_scale(
        &self,
        fullscreen: bool,
        angle: RotationAngle,
        video_ratio: f64,
        window_ratio: Option<f64>,
    ) -> f64 {
        let window_ratio = window_ratio.unwrap_or_else(|| self.aspect_ratio());
        compute_scale(fullscreen, angle, video_ratio, window_ratio)
    }
}

//! Orchestrator that runs the engine and drives a window host.
//!
//! ```
//! use zenwindow::{Rect, ScreenInfo, Size, WindowCommand, WindowRectService};
//!
//! let mut service = WindowRectService::new(Vec::<WindowCommand>::new());
//! let screen = ScreenInfo::full(Size::new(1920, 1080));
//!
//! let rect = service.fit_to_video(
//!     Size::new(1280, 720),
//!     false,
//!     Rect::new(600, 337, 720, 405),
//!     None,
//!     &screen,
//! );
//! assert_eq!(rect, Rect::new(320, 179, 1280, 720));
//! assert_eq!(service.host().len(), 3); // size, position, aspect ratio
//! ```

use crate::config::EngineConfig;
use crate::constraint::{Rect, Size};
use crate::plan::{WindowHost, WindowPlan, WindowTransition, compute_window_rect, plan_window_update};
use crate::rotation::RotationAngle;
use crate::screen::ScreenInfo;

/// Runs geometry requests against fresh screen metrics and dispatches the
/// resulting commands to an owned [`WindowHost`].
///
/// Holds no geometry state between calls: rotation history and the window
/// rect remembered across fullscreen belong to the caller.
#[derive(Debug)]
pub struct WindowRectService<H> {
    host: H,
    config: EngineConfig,
}

impl<H: WindowHost> WindowRectService<H> {
    /// Service with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, EngineConfig::default())
    }

    pub fn with_config(host: H, config: EngineConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Toggle fullscreen and restore the window geometry if needed.
    ///
    /// Returns the new rect, or `None` when the window geometry was left
    /// unchanged. See [`plan_window_update`] for the rules.
    pub fn update_for_transition(
        &mut self,
        transition: &WindowTransition<'_>,
        screen: &ScreenInfo,
    ) -> Option<Rect> {
        let plan = plan_window_update(transition, screen, &self.config);
        plan.apply(&mut self.host);
        plan.rect
    }

    /// Resize and move the window for `video` and lock its aspect ratio.
    ///
    /// `max_size` defaults to the usable screen size.
    pub fn fit_to_video(
        &mut self,
        video: Size,
        video_existed: bool,
        old_rect: Rect,
        max_size: Option<Size>,
        screen: &ScreenInfo,
    ) -> Rect {
        let rect = compute_window_rect(video, video_existed, old_rect, max_size, screen, &self.config);
        log::debug!("fit {video:?} (playing: {video_existed}) from {old_rect:?} to {rect:?}");
        WindowPlan::resize(rect).apply(&mut self.host);
        rect
    }

    /// Scale factor for the rendered video surface. `window_ratio` defaults to
    /// the physical screen's ratio.
    pub fn scale_for(
        &self,
        fullscreen: bool,
        angle: RotationAngle,
        video_ratio: f64,
        window_ratio: Option<f64>,
        screen: &ScreenInfo,
    ) -> f64 {
        screen.rotation_scale(fullscreen, angle, video_ratio, window_ratio)
    }
}

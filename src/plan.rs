//! Fullscreen transitions, window commands, and the host interface.
//!
//! The engine never touches a window. [`plan_window_update`] and
//! [`compute_window_rect`] return values; a [`WindowPlan`] turns them into an
//! ordered list of [`WindowCommand`]s that a [`WindowHost`] carries out.

use crate::config::EngineConfig;
use crate::constraint::{Position, Rect, Size, SizeOptions, resolve_position, resolve_size};
use crate::rotation::{RotationAngle, orientation_changed};
use crate::screen::ScreenInfo;

/// View identifier of the idle landing screen.
pub const LANDING_VIEW: &str = "landing-view";

/// A single command for the window host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowCommand {
    /// Enter (`true`) or leave (`false`) fullscreen.
    SetFullScreen(bool),
    /// Resize the window.
    SetSize(Size),
    /// Move the window's top-left corner.
    SetPosition(Position),
    /// Lock the window's aspect ratio (`width / height`) for user resizes.
    SetAspectRatio(f64),
}

/// The window being driven.
///
/// Commands are fire-and-forget: no acknowledgement, no retry. Callers issue
/// size before position, and position before the aspect-ratio lock, so the
/// lock applies to the final size.
pub trait WindowHost {
    fn set_full_screen(&mut self, fullscreen: bool);
    fn set_size(&mut self, size: Size);
    fn set_position(&mut self, position: Position);
    fn set_aspect_ratio(&mut self, ratio: f64);

    /// Dispatch one command to the matching method.
    fn apply(&mut self, command: WindowCommand) {
        match command {
            WindowCommand::SetFullScreen(fullscreen) => self.set_full_screen(fullscreen),
            WindowCommand::SetSize(size) => self.set_size(size),
            WindowCommand::SetPosition(position) => self.set_position(position),
            WindowCommand::SetAspectRatio(ratio) => self.set_aspect_ratio(ratio),
        }
    }
}

impl<H: WindowHost + ?Sized> WindowHost for &mut H {
    fn set_full_screen(&mut self, fullscreen: bool) {
        (**self).set_full_screen(fullscreen);
    }

    fn set_size(&mut self, size: Size) {
        (**self).set_size(size);
    }

    fn set_position(&mut self, position: Position) {
        (**self).set_position(position);
    }

    fn set_aspect_ratio(&mut self, ratio: f64) {
        (**self).set_aspect_ratio(ratio);
    }
}

/// Records commands instead of executing them.
#[cfg(feature = "alloc")]
impl WindowHost for alloc::vec::Vec<WindowCommand> {
    fn set_full_screen(&mut self, fullscreen: bool) {
        self.push(WindowCommand::SetFullScreen(fullscreen));
    }

    fn set_size(&mut self, size: Size) {
        self.push(WindowCommand::SetSize(size));
    }

    fn set_position(&mut self, position: Position) {
        self.push(WindowCommand::SetPosition(position));
    }

    fn set_aspect_ratio(&mut self, ratio: f64) {
        self.push(WindowCommand::SetAspectRatio(ratio));
    }
}

/// A fullscreen toggle and the context needed to restore the window after it.
///
/// ```
/// use zenwindow::{Position, RotationAngle, Size, WindowTransition};
///
/// let t = WindowTransition::exit_fullscreen()
///     .view("play-view")
///     .rotation(RotationAngle::Deg0, RotationAngle::Deg90)
///     .last_size(Size::new(720, 1280))
///     .position(Position::new(600, 0));
/// assert!(!t.fullscreen);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowTransition<'a> {
    /// Target state: `true` enters fullscreen, `false` leaves it.
    pub fullscreen: bool,
    /// View the UI is showing, e.g. [`LANDING_VIEW`].
    pub view: Option<&'a str>,
    /// Rotation now. Absent counts as unrotated.
    pub angle: Option<RotationAngle>,
    /// Rotation when fullscreen was entered.
    pub last_angle: Option<RotationAngle>,
    /// Window size when fullscreen was entered.
    pub last_size: Option<Size>,
    /// Window position when fullscreen was entered.
    pub position: Option<Position>,
}

impl<'a> WindowTransition<'a> {
    pub fn enter_fullscreen() -> Self {
        Self {
            fullscreen: true,
            ..Self::default()
        }
    }

    pub fn exit_fullscreen() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: &'a str) -> Self {
        self.view = Some(view);
        self
    }

    /// Current rotation and the rotation when fullscreen was entered.
    pub fn rotation(mut self, angle: RotationAngle, last_angle: RotationAngle) -> Self {
        self.angle = Some(angle);
        self.last_angle = Some(last_angle);
        self
    }

    pub fn last_size(mut self, size: Size) -> Self {
        self.last_size = Some(size);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    fn on_landing_view(&self) -> bool {
        self.view == Some(LANDING_VIEW)
    }
}

/// Outcome of a geometry request: the new rect, if any, and what to tell
/// the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowPlan {
    /// Fullscreen state to set, if the request was a fullscreen toggle.
    pub fullscreen: Option<bool>,
    /// New window rect. `None` means no geometry change, not a failure.
    pub rect: Option<Rect>,
    /// Lock the window to the new rect's aspect ratio.
    pub lock_aspect: bool,
}

impl WindowPlan {
    /// Resize and move to `rect`, locking its aspect ratio.
    pub const fn resize(rect: Rect) -> Self {
        Self {
            fullscreen: None,
            rect: Some(rect),
            lock_aspect: true,
        }
    }

    /// Commands in dispatch order: fullscreen, size, position, aspect ratio.
    pub fn commands(&self) -> impl Iterator<Item = WindowCommand> + use<> {
        let fullscreen = self.fullscreen.map(WindowCommand::SetFullScreen);
        let size = self.rect.map(|r| WindowCommand::SetSize(r.size()));
        let position = self.rect.map(|r| WindowCommand::SetPosition(r.position()));
        let aspect = self
            .rect
            .filter(|_| self.lock_aspect)
            .map(|r| WindowCommand::SetAspectRatio(r.size().aspect_ratio()));
        [fullscreen, size, position, aspect].into_iter().flatten()
    }

    /// Send every command to `host`.
    pub fn apply<H: WindowHost + ?Sized>(&self, host: &mut H) {
        for command in self.commands() {
            log::trace!("window command {command:?}");
            host.apply(command);
        }
    }
}

/// Decide how the window changes for a fullscreen toggle.
///
/// - Entering fullscreen only sets fullscreen; the display sizes the window.
/// - Leaving fullscreen on the landing view restores the configured landing
///   size, centered on the physical screen.
/// - Leaving fullscreen on a content view after the rotation switched between
///   portrait-like and landscape-like angles transposes the remembered window
///   size, re-resolves it against the minimum and the usable screen, and
///   re-centers it on where the window was.
/// - Anything else leaves geometry alone (`rect` is `None`).
pub fn plan_window_update(
    transition: &WindowTransition<'_>,
    screen: &ScreenInfo,
    config: &EngineConfig,
) -> WindowPlan {
    let mut plan = WindowPlan {
        fullscreen: Some(transition.fullscreen),
        rect: None,
        lock_aspect: false,
    };
    if transition.fullscreen {
        log::debug!("entering fullscreen");
        return plan;
    }

    if transition.on_landing_view() {
        let size = config.landing_size;
        let rect = Rect::from_parts(screen.centered(size), size);
        log::debug!("leaving fullscreen on landing view: {rect:?}");
        plan.rect = Some(rect);
        return plan;
    }

    let (Some(last_size), Some(position)) = (transition.last_size, transition.position) else {
        log::debug!("leaving fullscreen without a remembered window: no geometry change");
        return plan;
    };
    if !orientation_changed(transition.angle, transition.last_angle) {
        log::debug!("leaving fullscreen, orientation unchanged: no geometry change");
        return plan;
    }

    let size = resolve_size(
        config.min_size,
        screen.usable_size(),
        last_size.transposed(),
        SizeOptions::default(),
    );
    // The remembered window had the transposed extent; centering on it keeps
    // the window where fullscreen was entered.
    let before = Rect::from_parts(position, size.transposed());
    let rect = Rect::from_parts(resolve_position(before, screen.usable, size), size);
    log::debug!(
        "leaving fullscreen after rotation {:?} -> {:?}: {last_size:?} -> {rect:?}",
        transition.last_angle,
        transition.angle
    );
    plan.rect = Some(rect);
    plan.lock_aspect = true;
    plan
}

/// Resize the window for `video` outside fullscreen transitions (video load,
/// resize intent, playback start).
///
/// `max_size` defaults to the usable screen size. Once a video is playing the
/// usable screen size replaces `max_size` as the hard limit (see
/// [`resolve_size`]). Feeding the result back as `old_rect` returns it
/// unchanged.
pub fn compute_window_rect(
    video: Size,
    video_existed: bool,
    old_rect: Rect,
    max_size: Option<Size>,
    screen: &ScreenInfo,
    config: &EngineConfig,
) -> Rect {
    let screen_size = screen.usable_size();
    let max = max_size.unwrap_or(screen_size);
    let options = SizeOptions {
        video_existed,
        screen_size: Some(screen_size),
    };
    let size = resolve_size(config.min_size, max, video, options);
    let position = resolve_position(old_rect, screen.usable, size);
    Rect::from_parts(position, size)
}

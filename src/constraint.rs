//! Window size and position constraints.
//!
//! Resolves a window size from a video's native size against minimum, maximum
//! and screen limits while holding the video's aspect ratio, then places the
//! resized window so it keeps its previous center and stays inside the usable
//! screen area. Pure arithmetic, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenwindow::{Rect, Size, SizeOptions, resolve_position, resolve_size};
//!
//! let size = resolve_size(
//!     Size::new(320, 180),
//!     Size::new(1280, 720),
//!     Size::new(1920, 1080),
//!     SizeOptions::default(),
//! );
//! assert_eq!(size, Size::new(1280, 720));
//!
//! let screen = Rect::new(0, 0, 1920, 1080);
//! let before = Rect::new(100, 100, 640, 360);
//! let pos = resolve_position(before, screen, size);
//! // Centered on (420, 280), pushed right/down to stay on screen.
//! assert_eq!((pos.left, pos.top), (0, 0));
//! ```

use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting zero on either axis.
    ///
    /// The solvers assume positive sizes and do not check; use this at the
    /// boundary where sizes arrive from outside (decoder metadata, host reports).
    pub fn checked(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension);
        }
        Ok(Self { width, height })
    }

    /// `width / height`. Always derived, never cached.
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Swap width and height.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Top-left corner of a window in screen coordinates.
///
/// Signed: usable areas on secondary displays can start left of or above
/// the primary display's origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub left: i32,
    pub top: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}

/// Axis-aligned rectangle in screen coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Combine a position and a size.
    pub const fn from_parts(position: Position, size: Size) -> Self {
        Self {
            left: position.left,
            top: position.top,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.left as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }

    /// Exact center point. Not rounded: odd extents land on half pixels.
    pub fn center(&self) -> (f64, f64) {
        (
            self.left as f64 + self.width as f64 / 2.0,
            self.top as f64 + self.height as f64 / 2.0,
        )
    }

    /// Whether `other` lies entirely inside `self` (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Optional inputs to [`resolve_size`].
///
/// Absent fields take the defaults of a first load: no video playing, and no
/// screen limit beyond the maximum size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeOptions {
    /// A video is already playing in the window.
    pub video_existed: bool,
    /// Usable screen size. Replaces the maximum once a video is playing.
    pub screen_size: Option<Size>,
}

impl SizeOptions {
    /// Options for switching videos mid-playback on a screen of `screen_size`.
    pub const fn playing(screen_size: Size) -> Self {
        Self {
            video_existed: true,
            screen_size: Some(screen_size),
        }
    }

    pub fn video_existed(mut self, video_existed: bool) -> Self {
        self.video_existed = video_existed;
        self
    }

    pub fn screen_size(mut self, screen_size: Size) -> Self {
        self.screen_size = Some(screen_size);
        self
    }
}

/// Resolve a window size for `video` within `min` and `max`, holding the
/// video's aspect ratio.
///
/// Constraints apply in priority order:
///
/// 1. When a video is already playing and the candidate is at least as wide as
///    `max`, height is re-derived from `max.width`. Only width is tested here.
/// 2. The candidate is fitted inside the effective maximum (the screen size
///    once a video is playing, otherwise `max`) if it reaches it on either axis.
/// 3. The candidate is grown to cover `min` if `min` reaches it on either axis.
///    The minimum wins over the maximum.
/// 4. Both axes are rounded once, at the end.
///
/// `video` must have positive dimensions. Zero sizes are not checked and
/// produce meaningless (but non-panicking) output.
pub fn resolve_size(min: Size, max: Size, video: Size, options: SizeOptions) -> Size {
    let ratio = video.aspect_ratio();
    let by_width = |width: f64| (width, width / ratio);
    let by_height = |height: f64| (height * ratio, height);

    let mut candidate = extent(video);

    if options.video_existed && candidate.0 >= max.width as f64 {
        candidate = by_width(max.width as f64);
    }

    let effective_max = match options.screen_size {
        Some(screen) if options.video_existed => screen,
        _ => max,
    };
    let (max_w, max_h) = extent(effective_max);
    if candidate.0 >= max_w || candidate.1 >= max_h {
        candidate = if candidate.0 / candidate.1 > max_w / max_h {
            by_width(max_w)
        } else {
            by_height(max_h)
        };
    }

    let (min_w, min_h) = extent(min);
    if min_w >= candidate.0 || min_h >= candidate.1 {
        candidate = if min_w / min_h > candidate.0 / candidate.1 {
            by_width(min_w)
        } else {
            by_height(min_h)
        };
    }

    Size::new(round_px(candidate.0), round_px(candidate.1))
}

/// Place a window of `new_size` so it keeps the center of `current`, then
/// clamp it into `bounds` one axis at a time.
///
/// `current` is the rect the window occupied before resizing. When `new_size`
/// is larger than `bounds` on an axis, that axis snaps to the bounds origin.
pub fn resolve_position(current: Rect, bounds: Rect, new_size: Size) -> Position {
    let (center_x, center_y) = current.center();
    let left = Float::floor(center_x - new_size.width as f64 / 2.0) as i32;
    let top = Float::floor(center_y - new_size.height as f64 / 2.0) as i32;
    Position::new(
        clamp_axis(bounds.left, bounds.width, left, new_size.width),
        clamp_axis(bounds.top, bounds.height, top, new_size.height),
    )
}

/// Caller-side validation error.
///
/// The solvers themselves never fail; these come from the checked
/// constructors used to validate input before it reaches them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A size has zero width or height.
    ZeroDimension,
    /// Rotation angle is not a multiple of 90 degrees.
    InvalidAngle(i32),
    /// A configured size is smaller than the minimum window size.
    MinExceedsMax,
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "size has a zero dimension"),
            Self::InvalidAngle(deg) => {
                write!(f, "rotation of {deg} degrees is not a multiple of 90")
            }
            Self::MinExceedsMax => write!(f, "minimum window size exceeds a configured size"),
        }
    }
}

impl core::error::Error for GeometryError {}

// ============================================================================
// Internal geometry
// ============================================================================

fn extent(size: Size) -> (f64, f64) {
    (size.width as f64, size.height as f64)
}

fn round_px(v: f64) -> u32 {
    Float::round(v) as u32
}

fn clamp_axis(origin: i32, length: u32, pos: i32, extent: u32) -> i32 {
    // Far edge first so an oversized window lands on the origin every time.
    let far = origin as i64 + length as i64;
    let pos = (pos as i64).min(far - extent as i64);
    pos.max(origin as i64) as i32
}

//! Rotation angles, orientation classes, and the scale factor for rotated video.
//!
//! A rotated video is drawn by transforming the video surface inside a window
//! whose own size does not follow the rotation. When the content is turned a
//! quarter turn, its visual width and height trade places, so the surface has
//! to be scaled to keep filling the frame without distortion.

use crate::constraint::{GeometryError, Size};

/// Rotation of video content relative to the window's natural orientation,
/// clockwise in quarter turns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationAngle {
    /// Not rotated.
    #[default]
    Deg0,
    /// 90° clockwise.
    Deg90,
    /// 180°.
    Deg180,
    /// 270° clockwise (90° counter-clockwise).
    Deg270,
}

/// Grouping of rotation angles by which way the content's long edge points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrientationClass {
    /// 0° and 180°: content axes line up with the window.
    Landscape,
    /// 90° and 270°: content axes are swapped relative to the window.
    Portrait,
}

impl RotationAngle {
    /// All four angles in clockwise order.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Create from degrees. Any multiple of 90 is accepted and normalized
    /// into `0..360`, so `-90` and `630` both give [`Deg270`](Self::Deg270).
    pub fn from_degrees(degrees: i32) -> Result<Self, GeometryError> {
        if degrees % 90 != 0 {
            return Err(GeometryError::InvalidAngle(degrees));
        }
        Ok(Self::ALL[(degrees.rem_euclid(360) / 90) as usize])
    }

    /// Angle in degrees (0, 90, 180 or 270).
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Rotate a further 90° clockwise.
    pub const fn rotated_cw(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    pub const fn class(self) -> OrientationClass {
        match self {
            Self::Deg90 | Self::Deg270 => OrientationClass::Portrait,
            Self::Deg0 | Self::Deg180 => OrientationClass::Landscape,
        }
    }

    /// Whether this angle swaps the content's width and height.
    pub const fn swaps_axes(self) -> bool {
        matches!(self.class(), OrientationClass::Portrait)
    }

    /// Visual size of content with native size `size` after this rotation.
    pub const fn transform_size(self, size: Size) -> Size {
        if self.swaps_axes() {
            size.transposed()
        } else {
            size
        }
    }
}

impl TryFrom<i32> for RotationAngle {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

/// Whether the orientation class differs between `angle` and `last_angle`.
///
/// A missing current angle counts as unrotated. A missing previous angle means
/// there is nothing to compare against, so nothing changed.
pub fn orientation_changed(angle: Option<RotationAngle>, last_angle: Option<RotationAngle>) -> bool {
    match last_angle {
        Some(last) => angle.unwrap_or_default().class() != last.class(),
        None => false,
    }
}

/// Scale factor for the rendered video surface.
///
/// `video_ratio` is the video's `width / height`; `window_ratio` is the
/// rendering surface's `width / height` (callers normally pass the physical
/// screen's ratio, see [`ScreenInfo::rotation_scale`](crate::ScreenInfo::rotation_scale)).
///
/// Unrotated and half-turned content needs no compensation. For quarter turns
/// the direction depends on who follows whom: in fullscreen the surface
/// orientation is fixed by the display, so the window's own shape decides;
/// in a window the window already conforms to the video, so the video's shape
/// decides.
///
/// ```
/// use zenwindow::{RotationAngle, compute_scale};
///
/// // Portrait video, windowed, rotated a quarter turn.
/// assert_eq!(compute_scale(false, RotationAngle::Deg90, 0.5, 16.0 / 9.0), 2.0);
/// ```
pub fn compute_scale(fullscreen: bool, angle: RotationAngle, video_ratio: f64, window_ratio: f64) -> f64 {
    if !angle.swaps_axes() {
        return 1.0;
    }
    if fullscreen {
        if window_ratio < 1.0 {
            video_ratio
        } else {
            1.0 / video_ratio
        }
    } else if video_ratio < 1.0 {
        1.0 / video_ratio
    } else {
        video_ratio
    }
}

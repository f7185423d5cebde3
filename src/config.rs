//! Engine configuration.
//!
//! Defaults match a 16:9 player: a 320×180 minimum window and a 720×405
//! landing window. With the `serde` feature the config deserializes from any
//! serde format; missing fields keep their defaults.

use crate::constraint::{GeometryError, Size};

/// Smallest window the player allows.
pub const DEFAULT_MIN_SIZE: Size = Size::new(320, 180);

/// Window size of the idle landing view.
pub const DEFAULT_LANDING_SIZE: Size = Size::new(720, 405);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Lower bound for every resolved window size.
    pub min_size: Size,
    /// Fixed window size restored when leaving fullscreen on the landing view.
    pub landing_size: Size,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            landing_size: DEFAULT_LANDING_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn landing_size(mut self, landing_size: Size) -> Self {
        self.landing_size = landing_size;
        self
    }

    /// Check the sizes are usable: non-zero, and the landing window no
    /// smaller than the minimum.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.min_size.is_empty() || self.landing_size.is_empty() {
            return Err(GeometryError::ZeroDimension);
        }
        if self.landing_size.width < self.min_size.width
            || self.landing_size.height < self.min_size.height
        {
            return Err(GeometryError::MinExceedsMax);
        }
        Ok(())
    }
}

//! Window geometry for video playback: size constraints, center-preserving
//! placement, and rotation compensation.
//!
//! Pure geometry with no window system calls and no allocations in the core;
//! `no_std` compatible. Results are handed to a [`WindowHost`] by the caller.
//!
//! # Modules
//!
//! - [`constraint`]: Size resolution against min/max/screen, center-preserving placement
//! - [`rotation`]: Rotation angles, orientation classes, rotated-content scale factor
//! - [`screen`]: Per-call display metrics
//! - [`config`]: Engine configuration (minimum window size, landing rect)
//! - [`plan`]: Fullscreen transitions, window commands, the host interface
//! - [`service`]: Orchestrator that runs the engine and dispatches to a host

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod constraint;
pub mod plan;
pub mod rotation;
pub mod screen;
pub mod service;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports
pub use config::EngineConfig;
pub use constraint::{
    GeometryError, Position, Rect, Size, SizeOptions, resolve_position, resolve_size,
};
pub use plan::{
    LANDING_VIEW, WindowCommand, WindowHost, WindowPlan, WindowTransition, compute_window_rect,
    plan_window_update,
};
pub use rotation::{OrientationClass, RotationAngle, compute_scale};
pub use screen::ScreenInfo;
pub use service::WindowRectService;

//! Size negotiation between the host and the clock widget.
//!
//! Each axis is resolved on its own from the constraint the host hands down.

use crate::config::{WRAP_CONTENT_HEIGHT, WRAP_CONTENT_WIDTH};

/// How the host constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The widget must be exactly `size` pixels.
    Exact,
    /// The widget may be at most `size` pixels.
    AtMost,
    /// The host places no constraint; `size` is ignored.
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub const fn exact(size: u32) -> Self {
        Self { mode: MeasureMode::Exact, size }
    }

    pub const fn at_most(size: u32) -> Self {
        Self { mode: MeasureMode::AtMost, size }
    }

    pub const fn unspecified() -> Self {
        Self { mode: MeasureMode::Unspecified, size: 0 }
    }
}

/// Resolves one axis against its wrap-content default.
pub fn resolve_axis(spec: MeasureSpec, default: u32) -> u32 {
    match spec.mode {
        MeasureMode::Exact => spec.size,
        MeasureMode::AtMost => spec.size.min(default),
        MeasureMode::Unspecified => default,
    }
}

pub fn resolve(
    width: MeasureSpec,
    height: MeasureSpec,
    default_width: u32,
    default_height: u32,
) -> (u32, u32) {
    (
        resolve_axis(width, default_width),
        resolve_axis(height, default_height),
    )
}

/// Resolves both axes with the widget's wrap-content size (100×100).
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
    resolve(width, height, WRAP_CONTENT_WIDTH, WRAP_CONTENT_HEIGHT)
}

//! Tolerances and policies for section summaries.
//!
//! Policy
//! - The principal-angle tolerance is a fixed constant: axis-symmetric
//!   detection must not drift between call sites.
//! - Everything that changes what a summary *means* (strictness, fiber
//!   measurement) lives in `SectionCfg` and is passed explicitly.

/// Absolute tolerance below which `|ixy|` and `|ix - iy|` mark an
/// axis-symmetric section (principal angle pinned to 0).
pub const ANGLE_TOL: f64 = 1e-8;
/// Default area threshold for degenerate sections.
pub(crate) const AREA_EPS: f64 = 1e-12;

/// How single-boundary principal extreme fibers are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FiberMode {
    /// Measure the point extents in the principal frame.
    #[default]
    Rotated,
    /// Measure the unrotated point extents (bit-compatible with the legacy
    /// tables, which never applied the rotation).
    Unrotated,
}

/// Summary configuration.
#[derive(Clone, Copy, Debug)]
pub struct SectionCfg {
    /// |area| below this is a degenerate section.
    pub area_eps: f64,
    /// Reject composite sections whose net area is not positive.
    pub strict: bool,
    pub fiber_mode: FiberMode,
}

impl Default for SectionCfg {
    fn default() -> Self {
        Self {
            area_eps: AREA_EPS,
            strict: false,
            fiber_mode: FiberMode::Rotated,
        }
    }
}

impl SectionCfg {
    #[inline]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

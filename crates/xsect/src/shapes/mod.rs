//! Parametric boundary generators for common structural shapes.
//!
//! Purpose
//! - Produce `Boundary` outlines (or lists of them, for built-up sections)
//!   from a handful of dimensions, plus `*_summary` shortcuts.
//! - Rounds and pipes also have closed-form properties.
//!
//! Conventions
//! - Single-boundary shapes go through `section_summary`; built-ups through
//!   `multi_section_summary`. Thickness parameters are `Option<f64>`:
//!   `None` means solid (round, polygon) or "same as the other leg" (angles).

mod built_up;
mod polygon;
mod profiles;
mod round;

pub use built_up::{cruciform_points, cruciform_summary, double_angle_points, double_angle_summary};
pub use polygon::{polygon_points, polygon_summary};
pub use profiles::{
    angle_points, angle_summary, i_beam_points, i_beam_summary, t_beam_points, t_beam_summary,
};
pub use round::{
    round_area, round_gyradius, round_inertia, round_points, round_sect_mod, round_summary,
    RoundArc,
};

#[cfg(test)]
mod tests;

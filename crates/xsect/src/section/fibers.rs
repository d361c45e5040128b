//! Extreme fibers and elastic section moduli.
//!
//! Extreme fibers are returned flipped, `(c_y, c_x)`: the x-axis modulus
//! divides `ix` by the largest |y| offset and vice versa, so
//! `S = (ix, iy) ./ extreme_fibers`.

use nalgebra::Vector2;

use super::boundary::{centroid, inertias, rotate2, Boundary};
use super::cfg::FiberMode;

/// Largest |offset| from `origin` along each axis of a frame whose x-axis
/// points at `axis_angle` (default: the global frame). Returned flipped as
/// `(c_y, c_x)`.
///
/// Frame coordinates are the offsets rotated by `-axis_angle`.
pub(crate) fn flipped_extent<'a>(
    points: impl IntoIterator<Item = &'a Vector2<f64>>,
    origin: Vector2<f64>,
    axis_angle: Option<f64>,
) -> Vector2<f64> {
    let offsets: Vec<Vector2<f64>> = points.into_iter().map(|p| p - origin).collect();
    let offsets = match axis_angle {
        Some(a) => rotate2(&offsets, -a, Vector2::zeros()),
        None => offsets,
    };
    let m = offsets
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc.sup(&p.abs()));
    Vector2::new(m.y, m.x)
}

/// Extreme fibers from the centroidal x and y axes, `(c_y, c_x)`.
pub fn extreme_fibers(b: &Boundary) -> Vector2<f64> {
    flipped_extent(b.points(), centroid(b), None)
}

/// Extreme fibers from the principal axes, measured in the principal frame
/// (u-axis at the major principal angle).
pub fn principal_extreme_fibers(b: &Boundary) -> Vector2<f64> {
    let t = inertias(b, None);
    let alpha = t.principal_angles().x;
    flipped_extent(b.points(), centroid(b), Some(alpha))
}

/// Legacy principal extreme fibers: the extent of the *unrotated* points.
///
/// Numerically this equals `extreme_fibers`; kept as a separate entry point
/// so callers comparing against legacy tables can opt in explicitly.
pub fn principal_extreme_fibers_unrotated(b: &Boundary) -> Vector2<f64> {
    flipped_extent(b.points(), centroid(b), None)
}

pub fn principal_extreme_fibers_with(b: &Boundary, mode: FiberMode) -> Vector2<f64> {
    match mode {
        FiberMode::Rotated => principal_extreme_fibers(b),
        FiberMode::Unrotated => principal_extreme_fibers_unrotated(b),
    }
}

/// Elastic section moduli about the centroidal x and y axes.
pub fn elast_sect_mod(b: &Boundary) -> Vector2<f64> {
    inertias(b, None)
        .axial()
        .component_div(&extreme_fibers(b))
}

/// Elastic section moduli about the principal axes `(S_u, S_v)`.
pub fn principal_elast_sect_mod(b: &Boundary) -> Vector2<f64> {
    principal_elast_sect_mod_with(b, FiberMode::Rotated)
}

pub fn principal_elast_sect_mod_with(b: &Boundary, mode: FiberMode) -> Vector2<f64> {
    inertias(b, None)
        .principal_inertias()
        .component_div(&principal_extreme_fibers_with(b, mode))
}

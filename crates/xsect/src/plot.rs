//! Plot geometry for section diagrams (no drawing).
//!
//! Exposes what a renderer needs: closed outlines, the centroid, principal
//! angles, and axis segments sized from the extreme fibers.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::section::{
    centroid, extreme_fibers, multi_centroid, multi_extreme_fibers, multi_principal_angles,
    multi_principal_extreme_fibers, principal_angles, principal_extreme_fibers, Boundary,
    ANGLE_TOL,
};

/// Axis lines extend this far past the largest extreme fiber.
const AXIS_OVERSHOOT: f64 = 1.25;

pub type Segment = [[f64; 2]; 2];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub add: Vec<Vec<[f64; 2]>>,
    pub subtract: Vec<Vec<[f64; 2]>>,
    pub centroid: [f64; 2],
    pub principal_angles: [f64; 2],
    pub axis_half_length: f64,
    /// Centroidal x and y axes.
    pub primary_axes: Vec<Segment>,
    /// Empty for axis-aligned sections (principal axes coincide with x/y).
    pub principal_axes: Vec<Segment>,
}

fn outline(b: &Boundary) -> Vec<[f64; 2]> {
    b.points().iter().map(|p| [p.x, p.y]).collect()
}

fn segment(a: Vector2<f64>, b: Vector2<f64>) -> Segment {
    [[a.x, a.y], [b.x, b.y]]
}

fn build(
    add: &[Boundary],
    subtract: &[Boundary],
    o: Vector2<f64>,
    ang: Vector2<f64>,
    fibers: [Vector2<f64>; 2],
) -> PlotGeometry {
    let c = AXIS_OVERSHOOT * fibers[0].max().max(fibers[1].max());
    let primary_axes = vec![
        segment(o - Vector2::new(0.0, c), o + Vector2::new(0.0, c)),
        segment(o - Vector2::new(c, 0.0), o + Vector2::new(c, 0.0)),
    ];
    let principal_axes = if ang.x.abs().min(ang.y.abs()) >= ANGLE_TOL {
        [ang.x, ang.y]
            .iter()
            .map(|a| {
                let d = Vector2::new(a.cos(), a.sin()) * c;
                segment(o - d, o + d)
            })
            .collect()
    } else {
        Vec::new()
    };
    PlotGeometry {
        add: add.iter().map(outline).collect(),
        subtract: subtract.iter().map(outline).collect(),
        centroid: [o.x, o.y],
        principal_angles: [ang.x, ang.y],
        axis_half_length: c,
        primary_axes,
        principal_axes,
    }
}

pub fn section_plot_geometry(b: &Boundary) -> PlotGeometry {
    let fibers = [extreme_fibers(b), principal_extreme_fibers(b)];
    build(
        std::slice::from_ref(b),
        &[],
        centroid(b),
        principal_angles(b),
        fibers,
    )
}

pub fn multi_plot_geometry(add: &[Boundary], subtract: &[Boundary]) -> PlotGeometry {
    let fibers = [
        multi_extreme_fibers(add, subtract),
        multi_principal_extreme_fibers(add, subtract),
    ];
    build(
        add,
        subtract,
        multi_centroid(add, subtract),
        multi_principal_angles(add, subtract),
        fibers,
    )
}

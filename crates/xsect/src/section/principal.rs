//! Second-moment tensor and its principal-axis decomposition.
//!
//! The 2×2 symmetric inertia tensor `[[ix, -ixy], [-ixy, iy]]` is solved in
//! closed form (Mohr's circle): center `ij / 2`, radius
//! `sqrt(((ix - iy) / 2)² + ixy²)`.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::boundary::{area, inertias, Boundary};
use super::cfg::ANGLE_TOL;

/// Area moments about a fixed origin.
///
/// Invariant: `ij == ix + iy`. Per-boundary tensors have `ix, iy ≥ 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentTensor {
    pub ix: f64,
    pub iy: f64,
    pub ij: f64,
    pub ixy: f64,
}

impl MomentTensor {
    #[inline]
    pub fn new(ix: f64, iy: f64, ixy: f64) -> Self {
        Self {
            ix,
            iy,
            ij: ix + iy,
            ixy,
        }
    }

    /// `(ix, iy)`.
    #[inline]
    pub fn axial(&self) -> Vector2<f64> {
        Vector2::new(self.ix, self.iy)
    }

    #[inline]
    pub fn as_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.ix, -self.ixy, -self.ixy, self.iy)
    }

    /// Principal moments `(iu, iv)` with `iu ≥ iv`.
    pub fn principal_inertias(&self) -> Vector2<f64> {
        let avg = 0.5 * self.ij;
        let d = 0.5 * (self.ix - self.iy);
        let r = (d * d + self.ixy * self.ixy).sqrt();
        Vector2::new(avg + r, avg - r)
    }

    /// Principal angles `(alpha, alpha + π/2)` from the x-axis, radians.
    ///
    /// Axis-symmetric tensors (`|ixy|` and `|ix - iy|` below `ANGLE_TOL`)
    /// pin `alpha` to exactly 0.
    pub fn principal_angles(&self) -> Vector2<f64> {
        let diff = self.ix - self.iy;
        let alpha = if self.ixy.abs() < ANGLE_TOL && diff.abs() < ANGLE_TOL {
            0.0
        } else {
            0.5 * (-self.ixy).atan2(0.5 * diff)
        };
        Vector2::new(alpha, alpha + std::f64::consts::FRAC_PI_2)
    }
}

impl std::ops::Add for MomentTensor {
    type Output = MomentTensor;
    #[inline]
    fn add(self, rhs: MomentTensor) -> Self::Output {
        MomentTensor {
            ix: self.ix + rhs.ix,
            iy: self.iy + rhs.iy,
            ij: self.ij + rhs.ij,
            ixy: self.ixy + rhs.ixy,
        }
    }
}

impl std::ops::Sub for MomentTensor {
    type Output = MomentTensor;
    #[inline]
    fn sub(self, rhs: MomentTensor) -> Self::Output {
        MomentTensor {
            ix: self.ix - rhs.ix,
            iy: self.iy - rhs.iy,
            ij: self.ij - rhs.ij,
            ixy: self.ixy - rhs.ixy,
        }
    }
}

impl std::iter::Sum for MomentTensor {
    fn sum<I: Iterator<Item = MomentTensor>>(iter: I) -> Self {
        iter.fold(MomentTensor::default(), |acc, t| acc + t)
    }
}

/// `sqrt(inertia / area)` component-wise.
#[inline]
pub fn radii_of_gyration(inertia: Vector2<f64>, area: f64) -> Vector2<f64> {
    inertia.map(|i| (i / area).sqrt())
}

pub fn principal_inertias(b: &Boundary) -> Vector2<f64> {
    inertias(b, None).principal_inertias()
}

pub fn principal_angles(b: &Boundary) -> Vector2<f64> {
    inertias(b, None).principal_angles()
}

/// Radii of gyration about the centroidal x and y axes.
pub fn gyradii(b: &Boundary) -> Vector2<f64> {
    radii_of_gyration(inertias(b, None).axial(), area(b))
}

/// Radii of gyration about the principal axes.
pub fn principal_gyradii(b: &Boundary) -> Vector2<f64> {
    radii_of_gyration(principal_inertias(b), area(b))
}

//! Planar section properties of polygonal cross sections.
//!
//! Layout
//! - `section`: boundary integrals, principal transform, extreme fibers,
//!   composite aggregation and the `SectionSummary` record (the core).
//! - `shapes`: parametric outlines for rounds, pipes, polygons, angles,
//!   I/T-beams, cruciforms and double angles.
//! - `cross_section`: member record with a `meta` side-table.
//! - `lookup`: shape-table seam (`ShapeLookup`) and an in-memory table.
//! - `plot`: geometry a renderer needs; no drawing here.
//!
//! All computations are pure, synchronous `f64` arithmetic over immutable
//! inputs.

pub mod cross_section;
pub mod error;
pub mod lookup;
pub mod plot;
pub mod section;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cross_section::CrossSection;
pub use error::{Result, SectionError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cross_section::CrossSection;
    pub use crate::error::{Result, SectionError};
    pub use crate::lookup::{DbSelector, FieldValue, ShapeLookup, ShapeRecord, ShapeTable, UnitSystem};
    pub use crate::plot::{multi_plot_geometry, section_plot_geometry, PlotGeometry};
    pub use crate::section::{
        area, centroid, inertias, multi_section_summary, section_summary, Boundary,
        CompositeSection, FiberMode, MomentTensor, SectionCfg, SectionSummary,
    };
    pub use crate::shapes::*;
    pub use nalgebra::Vector2 as Vec2;
}

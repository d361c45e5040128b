//! Member cross-section record.
//!
//! A fixed-schema primary record (the known numeric properties) plus an
//! open `meta` side-table for everything else a source provides
//! (provenance, secondary properties, text fields).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SectionError};
use crate::lookup::{DbSelector, FieldValue, ShapeLookup, ShapeRecord};
use crate::section::{multi_section_summary, Boundary, SectionCfg, SectionSummary};

/// Properties of a structural member cross section.
///
/// `_z` refers to the weak principal axis, `inertia_t` to the torsional
/// constant. Unknown properties stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub name: String,
    pub area: f64,
    pub width: f64,
    pub height: f64,
    pub unit_weight: Option<f64>,
    pub inertia_x: Option<f64>,
    pub inertia_y: Option<f64>,
    pub inertia_z: Option<f64>,
    pub inertia_j: Option<f64>,
    pub inertia_t: Option<f64>,
    pub gyradius_x: Option<f64>,
    pub gyradius_y: Option<f64>,
    pub gyradius_z: Option<f64>,
    pub elast_sect_mod_x: Option<f64>,
    pub elast_sect_mod_y: Option<f64>,
    pub elast_sect_mod_z: Option<f64>,
    pub plast_sect_mod_x: Option<f64>,
    pub plast_sect_mod_y: Option<f64>,
    pub is_round: bool,
    pub meta: BTreeMap<String, FieldValue>,
}

impl CrossSection {
    /// Minimal record: name and area.
    pub fn new(name: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            area,
            ..Self::default()
        }
    }

    /// Record from a computed summary. Centroid and product of inertia go
    /// to `meta` (`x`, `y`, `inertia_xy`).
    pub fn from_summary(name: impl Into<String>, s: &SectionSummary, is_round: bool) -> Self {
        let mut meta = BTreeMap::new();
        meta.insert("x".to_string(), FieldValue::Number(s.x));
        meta.insert("y".to_string(), FieldValue::Number(s.y));
        meta.insert("inertia_xy".to_string(), FieldValue::Number(s.inertia_xy));
        Self {
            name: name.into(),
            area: s.area,
            width: s.width,
            height: s.height,
            inertia_x: Some(s.inertia_x),
            inertia_y: Some(s.inertia_y),
            inertia_z: Some(s.inertia_z),
            inertia_j: Some(s.inertia_j),
            gyradius_x: Some(s.gyradius_x),
            gyradius_y: Some(s.gyradius_y),
            gyradius_z: Some(s.gyradius_z),
            elast_sect_mod_x: Some(s.elast_sect_mod_x),
            elast_sect_mod_y: Some(s.elast_sect_mod_y),
            elast_sect_mod_z: Some(s.elast_sect_mod_z),
            is_round,
            meta,
            ..Self::default()
        }
    }

    /// Record from boundary points via the composite aggregator.
    pub fn from_points(
        name: impl Into<String>,
        add: &[Boundary],
        subtract: &[Boundary],
        is_round: bool,
        include_meta: bool,
        cfg: &SectionCfg,
    ) -> Result<Self> {
        let s = multi_section_summary(add, subtract, cfg)?;
        let mut xs = Self::from_summary(name, &s, is_round);
        if !include_meta {
            xs.meta.clear();
        }
        Ok(xs)
    }

    /// Record from a lookup row. Known fields fill the primary record, the
    /// rest land in `meta`.
    ///
    /// `area` is required. `inertia_j` is `inertia_x + inertia_y` when both
    /// exist; a `type` of `PIPE` marks the section round.
    pub fn from_record(record: ShapeRecord, include_meta: bool) -> Result<Self> {
        let mut rest = record;
        let mut num = |key: &str| rest.remove(key).and_then(|v| v.as_f64());
        let area = num("area").ok_or_else(|| SectionError::MissingField {
            field: "area".to_string(),
        })?;
        let mut xs = CrossSection {
            area,
            width: num("width").unwrap_or(0.0),
            height: num("height").unwrap_or(0.0),
            unit_weight: num("unit_weight"),
            inertia_x: num("inertia_x"),
            inertia_y: num("inertia_y"),
            inertia_z: num("inertia_z"),
            inertia_j: num("inertia_j"),
            inertia_t: num("inertia_t"),
            gyradius_x: num("gyradius_x"),
            gyradius_y: num("gyradius_y"),
            gyradius_z: num("gyradius_z"),
            elast_sect_mod_x: num("elast_sect_mod_x"),
            elast_sect_mod_y: num("elast_sect_mod_y"),
            elast_sect_mod_z: num("elast_sect_mod_z"),
            plast_sect_mod_x: num("plast_sect_mod_x"),
            plast_sect_mod_y: num("plast_sect_mod_y"),
            ..CrossSection::default()
        };
        if let (Some(ix), Some(iy)) = (xs.inertia_x, xs.inertia_y) {
            xs.inertia_j = Some(ix + iy);
        }
        xs.name = rest
            .get("name")
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
            .to_string();
        xs.is_round = rest
            .get("type")
            .and_then(FieldValue::as_str)
            .is_some_and(|t| t.eq_ignore_ascii_case("PIPE"));
        rest.remove("name");
        if include_meta {
            xs.meta = rest;
        }
        Ok(xs)
    }

    /// Record for `name` from a shape table.
    pub fn from_lookup<L: ShapeLookup + ?Sized>(
        lookup: &L,
        name: &str,
        sel: &DbSelector,
        include_meta: bool,
    ) -> Result<Self> {
        let rec = lookup.query(name, sel)?;
        Self::from_record(rec, include_meta)
    }
}

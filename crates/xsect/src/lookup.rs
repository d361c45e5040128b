//! Shape-table lookup: the reference-data seam.
//!
//! Purpose
//! - `ShapeLookup` abstracts "name → record of named fields" so the library
//!   never touches files or databases. Tables are keyed by a `DbSelector`
//!   (unit system + schema version).
//! - `ShapeTable` is the in-memory implementation; loaders (CSV, fixtures)
//!   fill it.
//!
//! Matching
//! - Names compare case-insensitively. Field names drop one trailing `_`
//!   (schema columns that collide with reserved words carry it).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SectionError};

/// Latest supported schema version.
pub const LATEST_DB_VERSION: &str = "15.0";
const SUPPORTED_VERSIONS: [&str; 1] = ["15.0"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

/// Which table to query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DbSelector {
    pub units: UnitSystem,
    /// `None` selects `LATEST_DB_VERSION`.
    pub version: Option<String>,
}

impl DbSelector {
    pub fn new(units: UnitSystem, version: Option<&str>) -> Self {
        Self {
            units,
            version: version.map(str::to_string),
        }
    }

    /// Table name, e.g. `aisc_imperial_15_0`. Unknown versions are a
    /// configuration error.
    pub fn table_name(&self) -> Result<String> {
        let v = self.version.as_deref().unwrap_or(LATEST_DB_VERSION);
        if !SUPPORTED_VERSIONS.contains(&v) {
            return Err(SectionError::UnsupportedDbVersion {
                version: v.to_string(),
            });
        }
        Ok(format!("aisc_{}_{}", self.units.as_str(), v.replace('.', "_")))
    }

    /// Every supported table name, for loaders.
    pub fn all_table_names() -> Vec<String> {
        let mut out = Vec::new();
        for v in SUPPORTED_VERSIONS {
            for u in [UnitSystem::Imperial, UnitSystem::Metric] {
                if let Ok(name) = DbSelector::new(u, Some(v)).table_name() {
                    out.push(name);
                }
            }
        }
        out
    }
}

/// A single field of a shape record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(x) => Some(*x),
            FieldValue::Text(_) => None,
        }
    }
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Number(x)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

pub type ShapeRecord = BTreeMap<String, FieldValue>;

/// Strip one trailing underscore from a column name.
pub fn normalize_field_name(name: &str) -> &str {
    name.strip_suffix('_').unwrap_or(name)
}

/// Read-only reference data keyed by shape name.
pub trait ShapeLookup {
    /// Record for `name`, or `ShapeNotFound`.
    fn query(&self, name: &str, sel: &DbSelector) -> Result<ShapeRecord>;

    /// Shape names, optionally restricted to a `type` (e.g. `"L"`, `"W"`).
    fn shape_names(&self, shape_type: Option<&str>, sel: &DbSelector) -> Result<Vec<String>>;
}

/// In-memory shape tables.
#[derive(Clone, Debug, Default)]
pub struct ShapeTable {
    tables: BTreeMap<String, Vec<ShapeRecord>>,
}

fn record_str<'a>(rec: &'a ShapeRecord, key: &str) -> Option<&'a str> {
    rec.get(key).and_then(FieldValue::as_str)
}

impl ShapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to `table`, normalizing its field names.
    pub fn insert(&mut self, table: &str, record: ShapeRecord) {
        let rec = record
            .into_iter()
            .map(|(k, v)| (normalize_field_name(&k).to_string(), v))
            .collect();
        self.tables.entry(table.to_string()).or_default().push(rec);
    }

    pub fn table_len(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, Vec::len)
    }

    fn rows(&self, sel: &DbSelector) -> Result<&[ShapeRecord]> {
        let table = sel.table_name()?;
        Ok(self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Records matching `pred`, in insertion order.
    pub fn filter<F>(&self, sel: &DbSelector, pred: F) -> Result<Vec<ShapeRecord>>
    where
        F: Fn(&ShapeRecord) -> bool,
    {
        Ok(self.rows(sel)?.iter().filter(|r| pred(r)).cloned().collect())
    }
}

impl ShapeLookup for ShapeTable {
    fn query(&self, name: &str, sel: &DbSelector) -> Result<ShapeRecord> {
        let want = name.to_uppercase();
        self.rows(sel)?
            .iter()
            .find(|r| record_str(r, "name").is_some_and(|n| n.to_uppercase() == want))
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(name = want.as_str(), "shape lookup miss");
                SectionError::ShapeNotFound { name: want }
            })
    }

    fn shape_names(&self, shape_type: Option<&str>, sel: &DbSelector) -> Result<Vec<String>> {
        let want = shape_type.map(str::to_uppercase);
        Ok(self
            .rows(sel)?
            .iter()
            .filter(|r| match &want {
                None => true,
                Some(t) => record_str(r, "type").is_some_and(|x| x.to_uppercase() == *t),
            })
            .filter_map(|r| record_str(r, "name").map(str::to_string))
            .collect())
    }
}

//! Load shape tables from CSV files with polars.
//!
//! A database directory holds one `<table>.csv` per supported selector
//! (e.g. `aisc_imperial_15_0.csv`). Missing files are skipped; each row
//! becomes a `ShapeRecord` (numbers as `Number`, everything else as `Text`,
//! nulls dropped).

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use xsect::lookup::{DbSelector, FieldValue, ShapeRecord, ShapeTable};

fn field_value(v: AnyValue<'_>) -> Option<FieldValue> {
    match v {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(FieldValue::Text(s.to_string())),
        AnyValue::StringOwned(s) => Some(FieldValue::Text(s.to_string())),
        AnyValue::Boolean(b) => Some(FieldValue::Number(if b { 1.0 } else { 0.0 })),
        other => other.extract::<f64>().map(FieldValue::Number),
    }
}

fn frame_records(df: &DataFrame) -> Result<Vec<ShapeRecord>> {
    let mut out = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut rec = ShapeRecord::new();
        for col in df.get_columns() {
            if let Some(v) = field_value(col.get(row)?) {
                rec.insert(col.name().to_string(), v);
            }
        }
        out.push(rec);
    }
    Ok(out)
}

pub fn read_csv_records(path: &Path) -> Result<Vec<ShapeRecord>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    frame_records(&df)
}

/// Every `<table>.csv` found under `dir`.
pub fn load_dir(dir: &Path) -> Result<ShapeTable> {
    let mut table = ShapeTable::new();
    for name in DbSelector::all_table_names() {
        let path = dir.join(format!("{name}.csv"));
        if !path.exists() {
            tracing::debug!(table = name.as_str(), "no csv for table");
            continue;
        }
        let records = read_csv_records(&path)?;
        tracing::info!(table = name.as_str(), rows = records.len(), "loaded shape table");
        for rec in records {
            table.insert(&name, rec);
        }
    }
    Ok(table)
}

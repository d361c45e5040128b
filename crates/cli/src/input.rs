//! JSON section input: `{"add": [[[x, y], ...], ...], "subtract": [...]}`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use xsect::section::Boundary;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    pub add: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    pub subtract: Vec<Vec<[f64; 2]>>,
}

fn boundaries(sets: &[Vec<[f64; 2]>]) -> xsect::Result<Vec<Boundary>> {
    sets.iter()
        .map(|pts| {
            let xy: Vec<(f64, f64)> = pts.iter().map(|p| (p[0], p[1])).collect();
            Boundary::from_xy(&xy)
        })
        .collect()
}

impl SectionInput {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Added and subtracted boundaries, each closed.
    pub fn boundaries(&self) -> xsect::Result<(Vec<Boundary>, Vec<Boundary>)> {
        Ok((boundaries(&self.add)?, boundaries(&self.subtract)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn subtract_defaults_to_empty() {
        let input: SectionInput =
            serde_json::from_str(r#"{"add": [[[0,0],[3,0],[3,5],[0,5]]]}"#).unwrap();
        assert!(input.subtract.is_empty());
        let (add, sub) = input.boundaries().unwrap();
        assert_eq!(add[0].points().len(), 5);
        assert!(sub.is_empty());
    }

    #[test]
    fn empty_boundary_is_rejected() {
        let input = SectionInput {
            add: vec![vec![]],
            subtract: vec![],
        };
        assert!(matches!(
            input.boundaries(),
            Err(xsect::SectionError::EmptyBoundary)
        ));
    }

    #[test]
    fn read_reports_path_on_bad_json() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        fs::write(&p, "{").unwrap();
        let err = SectionInput::read(&p).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}

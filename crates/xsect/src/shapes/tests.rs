use super::*;
use crate::section::{area, centroid, multi_section_summary, section_summary, SectionCfg};
use nalgebra::vector;
use std::f64::consts::PI;

fn approx(got: f64, want: f64, rel: f64) -> bool {
    (got - want).abs() <= rel * want.abs().max(1e-12)
}

#[test]
fn round_closed_forms() {
    assert!(approx(round_area(4.0, None), 4.0 * PI, 1e-12));
    assert!(approx(round_area(4.0, Some(1.0)), 3.0 * PI, 1e-12));
    assert!(approx(round_inertia(4.0, None), PI * 16.0 / 4.0, 1e-12));
    assert!(approx(round_inertia(4.0, Some(1.0)), PI * 15.0 / 4.0, 1e-12));
    assert!(approx(round_gyradius(4.0, None), 1.0, 1e-12));
    assert!(approx(round_gyradius(4.0, Some(1.0)), (0.25 * 15.0 / 3.0f64).sqrt(), 1e-12));
    assert!(approx(round_sect_mod(4.0, None), PI * 64.0 / 32.0, 1e-12));
    assert!(approx(round_sect_mod(4.0, Some(1.0)), PI * 240.0 / 128.0, 1e-12));
}

#[test]
fn round_summary_agrees_with_boundary_integration() {
    let cfg = SectionCfg::default();
    for thickness in [None, Some(1.0)] {
        let exact = round_summary(4.0, thickness, RoundArc::default(), &cfg).unwrap();
        let pts = round_points(4.0, thickness, RoundArc::default()).unwrap();
        let numeric = section_summary(&pts, &cfg).unwrap();
        let pairs = [
            (exact.area, numeric.area),
            (exact.inertia_x, numeric.inertia_x),
            (exact.inertia_y, numeric.inertia_y),
            (exact.gyradius_x, numeric.gyradius_x),
            (exact.gyradius_y, numeric.gyradius_y),
            (exact.elast_sect_mod_x, numeric.elast_sect_mod_x),
            (exact.elast_sect_mod_y, numeric.elast_sect_mod_y),
        ];
        for (e, n) in pairs {
            assert!(approx(n, e, 0.01), "{thickness:?}: {n} vs {e}");
        }
        assert_eq!(exact.width, 4.0);
        assert!(approx(numeric.width, 4.0, 0.01));
    }
}

#[test]
fn round_points_sampling() {
    let full = round_points(4.0, None, RoundArc::default()).unwrap();
    // ceil(2 * 2π / 0.01) samples plus the closing point
    assert_eq!(full.points().len(), 1258);
    assert_eq!(full.points()[0], vector![2.0, 0.0]);

    let quarter = RoundArc {
        stop: 0.5 * PI,
        ..RoundArc::default()
    };
    assert!(!quarter.is_full_ring());
    let s = round_summary(4.0, None, quarter, &SectionCfg::default()).unwrap();
    // open arcs close with a chord: circular segment of r = 2, θ = π/2
    assert!(approx(s.area, PI - 2.0, 0.01));
    let d = 8.0 * (PI / 4.0).sin().powi(3) / (3.0 * (PI / 2.0 - 1.0));
    assert!(approx(s.x, d * (PI / 4.0).cos(), 0.01));
    assert!((s.x - s.y).abs() < 1e-3);

    let bad = RoundArc {
        step: 0.0,
        ..RoundArc::default()
    };
    assert!(round_points(4.0, None, bad).is_err());

    let tiny = RoundArc {
        step: 1e-300,
        ..RoundArc::default()
    };
    assert!(matches!(
        round_points(4.0, None, tiny),
        Err(crate::SectionError::InvalidShape { .. })
    ));
    assert!(round_points(1e300, Some(1.0), RoundArc::default()).is_err());
}

#[test]
fn polygon_areas() {
    let cfg = SectionCfg::default();
    let cases = [
        (None, true, 2.5980762113533),
        (Some(0.1), true, 2.5980762113533 - 2.0327172275047),
        (None, false, 3.4641016151378),
        (Some(0.1), false, 3.4641016151378 - 2.8059223082616),
    ];
    for (t, inscribed, want) in cases {
        let s = polygon_summary(6, 1.0, t, inscribed, &cfg).unwrap();
        assert!(approx(s.area, want, 1e-9), "{t:?} {inscribed}: {}", s.area);
    }
    assert!(polygon_points(2, 1.0, None, true).is_err());
    let hex = polygon_points(6, 1.0, None, true).unwrap();
    assert!((hex.points()[0] - vector![0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn angle_default_thickness() {
    let a = angle_points(8.0, 6.0, 1.0, None);
    let b = angle_points(8.0, 6.0, 1.0, Some(1.0));
    assert_eq!(a, b);
    assert!(approx(area(&a), 13.0, 1e-12));
    let s = angle_summary(8.0, 6.0, 1.0, None, &SectionCfg::default()).unwrap();
    assert!(approx(s.width, 6.0, 1e-12) && approx(s.height, 8.0, 1e-12));
}

#[test]
fn i_beam_matches_w44x335() {
    let s = i_beam_summary(44.0, 15.9, 1.77, 1.03, &SectionCfg::default()).unwrap();
    // tabulated values include fillets, so allow a little slack
    let table = [
        (s.area, 98.5),
        (s.inertia_x, 31100.0),
        (s.inertia_y, 1200.0),
        (s.gyradius_x, 17.8),
        (s.gyradius_y, 3.49),
        (s.elast_sect_mod_x, 1410.0),
        (s.elast_sect_mod_y, 150.0),
    ];
    for (got, want) in table {
        assert!(approx(got, want, 0.015), "{got} vs {want}");
    }
    assert!(approx(s.x, 7.95, 1e-12) && approx(s.y, 22.0, 1e-12));
    assert!(s.inertia_xy.abs() < 1e-6);
}

#[test]
fn t_beam_centroid_from_flange_top() {
    let b = t_beam_points(22.0, 15.9, 1.77, 1.03);
    let c = centroid(&b);
    assert!(approx(c.x, 7.95, 1e-12));
    assert!(approx(22.0 - c.y, 5.57, 0.01));
    // WT22X167.5 tabulated values
    let s = t_beam_summary(22.0, 15.9, 1.77, 1.03, &SectionCfg::default()).unwrap();
    assert!(approx(s.inertia_x, 2170.0, 0.01));
    assert!(approx(s.inertia_y, 600.0, 0.015));
}

#[test]
fn cruciform_is_centered_and_symmetric() {
    let cfg = SectionCfg::default();
    let parts = cruciform_points(8.0, 8.0, 1.125, None, 0.5);
    assert_eq!(parts.len(), 4);
    let s = cruciform_summary(8.0, 8.0, 1.125, None, 0.5, &cfg).unwrap();
    assert!(approx(s.area, 4.0 * 16.7, 0.01));
    assert!(s.x.abs() < 1e-9 && s.y.abs() < 1e-9);
    assert!(approx(s.inertia_x, s.inertia_y, 1e-9));
    assert!(s.inertia_xy.abs() < 1e-6);
    assert!(approx(s.width, 16.5, 1e-12));
    // moved far away, the centroid follows
    let shift = vector![-734.2, 512.9];
    let moved: Vec<_> = parts.iter().map(|b| b.translated(shift)).collect();
    let m = multi_section_summary(&moved, &[], &cfg).unwrap();
    assert!((vector![m.x, m.y] - shift).norm() < 1e-6);
    assert!(approx(m.area, s.area, 1e-9));
}

#[test]
fn double_angle_matches_2l12x12() {
    let s = double_angle_summary(12.0, 12.0, 1.375, None, 0.75, &SectionCfg::default()).unwrap();
    // 2L12X12X1-3/8X3/4: A = 2 × 31.1, ȳ = 3.50
    assert!(approx(s.area, 62.2, 0.02));
    assert!(s.x.abs() < 1e-9);
    assert!(approx(s.y, 3.50, 0.02));
    assert_eq!(double_angle_points(12.0, 12.0, 1.375, None, 0.75).len(), 2);
}

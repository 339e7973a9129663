#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn usable_dpr_keeps_high_density_ratio() {
    assert_eq!(usable_dpr(2.0), 2.0);
    assert_eq!(usable_dpr(1.0), 1.0);
}

#[test]
fn usable_dpr_keeps_zoomed_out_ratio() {
    assert_eq!(usable_dpr(0.5), 0.5);
    assert_eq!(usable_dpr(0.9), 0.9);
}

#[test]
fn usable_dpr_replaces_unusable_values() {
    assert_eq!(usable_dpr(0.0), 1.0);
    assert_eq!(usable_dpr(-2.0), 1.0);
    assert_eq!(usable_dpr(f64::NAN), 1.0);
    assert_eq!(usable_dpr(f64::INFINITY), 1.0);
}

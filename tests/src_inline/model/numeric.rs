use super::*;

#[test]
fn test_clip01_bounds() {
    assert_eq!(clip01(-0.5), 0.0);
    assert_eq!(clip01(0.25), 0.25);
    assert_eq!(clip01(1.5), 1.0);
    assert_eq!(clip01(f64::NAN), 0.0);
    assert_eq!(clip01(f64::INFINITY), 1.0);
}

#[test]
fn test_finite_or() {
    assert_eq!(finite_or(f64::NAN, 0.3), 0.3);
    assert_eq!(finite_or(f64::NEG_INFINITY, 0.0), 0.0);
    assert_eq!(finite_or(0.7, 0.0), 0.7);
}

#[test]
fn test_ratio_zero_denominator() {
    assert_eq!(ratio(0, 0), 0.0);
    assert_eq!(ratio(3, 0), 3.0);
    assert_eq!(ratio(1, 2), 0.5);
}

#[test]
fn test_clamp_stars() {
    assert_eq!(clamp_stars(2), 2);
    assert_eq!(clamp_stars(7), 3);
}

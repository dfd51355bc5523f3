//! Degree-based trigonometry and angle range reduction.

/// Normalize an angle to [0, 360) degrees.
pub fn fix_angle(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Sine of an angle in degrees.
pub fn dsin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn dcos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn dtan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine, in degrees.
pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine, in degrees. NaN outside [-1, 1].
pub fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Two-argument arctangent, in degrees, range (-180, 180].
pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Arccotangent, in degrees: `atan(1/x)`.
pub fn darccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_angle_zero() {
        assert!((fix_angle(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn fix_angle_wraps() {
        assert!((fix_angle(360.0) - 0.0).abs() < 1e-15);
        assert!((fix_angle(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn fix_angle_negative() {
        assert!((fix_angle(-10.0) - 350.0).abs() < 1e-12);
        assert!((fix_angle(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn fix_angle_tiny_negative_stays_in_range() {
        let r = fix_angle(-1e-14);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn degree_trig() {
        assert!((dsin(30.0) - 0.5).abs() < 1e-12);
        assert!((dcos(60.0) - 0.5).abs() < 1e-12);
        assert!((dtan(45.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig() {
        assert!((darcsin(0.5) - 30.0).abs() < 1e-10);
        assert!((darccos(0.5) - 60.0).abs() < 1e-10);
        assert!((darctan2(1.0, -1.0) - 135.0).abs() < 1e-10);
    }

    #[test]
    fn arccos_out_of_domain_is_nan() {
        assert!(darccos(1.0001).is_nan());
    }

    #[test]
    fn arccot_one_is_45() {
        assert!((darccot(1.0) - 45.0).abs() < 1e-10);
        // Shadow factor 2 at zero zenith distance: acot(2) ~ 26.565 deg
        assert!((darccot(2.0) - 26.565_051_177).abs() < 1e-6);
    }
}

/// Cubic Hermite basis at `t`, with weights ordered `(p0, v0, v1, p1)`.
#[must_use]
pub fn cubic(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        1.0 - 3.0 * t2 + 2.0 * t3,
        t - 2.0 * t2 + t3,
        -t2 + t3,
        3.0 * t2 - 2.0 * t3,
    ]
}

/// First derivative of the cubic Hermite basis.
#[must_use]
pub fn cubic_d1(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        3.0 * t2 - 4.0 * t + 1.0,
        3.0 * t2 - 2.0 * t,
        -6.0 * t2 + 6.0 * t,
    ]
}

/// Second derivative of the cubic Hermite basis.
#[must_use]
pub fn cubic_d2(t: f64) -> [f64; 4] {
    [12.0 * t - 6.0, 6.0 * t - 4.0, 6.0 * t - 2.0, 6.0 - 12.0 * t]
}

/// Quintic Hermite basis at `t`, with weights ordered
/// `(p0, v0, a0, a1, v1, p1)`.
#[must_use]
pub fn quintic(t: f64) -> [f64; 6] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    [
        -6.0 * t5 + 15.0 * t4 - 10.0 * t3 + 1.0,
        -3.0 * t5 + 8.0 * t4 - 6.0 * t3 + t,
        -0.5 * t5 + 1.5 * t4 - 1.5 * t3 + 0.5 * t2,
        0.5 * t5 - t4 + 0.5 * t3,
        -3.0 * t5 + 7.0 * t4 - 4.0 * t3,
        6.0 * t5 - 15.0 * t4 + 10.0 * t3,
    ]
}

/// First derivative of the quintic Hermite basis.
#[must_use]
pub fn quintic_d1(t: f64) -> [f64; 6] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    [
        -30.0 * t4 + 60.0 * t3 - 30.0 * t2,
        -15.0 * t4 + 32.0 * t3 - 18.0 * t2 + 1.0,
        -2.5 * t4 + 6.0 * t3 - 4.5 * t2 + t,
        2.5 * t4 - 4.0 * t3 + 1.5 * t2,
        -15.0 * t4 + 28.0 * t3 - 12.0 * t2,
        30.0 * t4 - 60.0 * t3 + 30.0 * t2,
    ]
}

/// Second derivative of the quintic Hermite basis.
#[must_use]
pub fn quintic_d2(t: f64) -> [f64; 6] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -120.0 * t3 + 180.0 * t2 - 60.0 * t,
        -60.0 * t3 + 96.0 * t2 - 36.0 * t,
        -10.0 * t3 + 18.0 * t2 - 9.0 * t + 1.0,
        10.0 * t3 - 12.0 * t2 + 3.0 * t,
        -60.0 * t3 + 84.0 * t2 - 24.0 * t,
        120.0 * t3 - 180.0 * t2 + 60.0 * t,
    ]
}

/// Third derivative of the quintic Hermite basis.
#[must_use]
pub fn quintic_d3(t: f64) -> [f64; 6] {
    let t2 = t * t;
    [
        -360.0 * t2 + 360.0 * t - 60.0,
        -180.0 * t2 + 192.0 * t - 36.0,
        -30.0 * t2 + 36.0 * t - 9.0,
        30.0 * t2 - 24.0 * t + 3.0,
        -180.0 * t2 + 168.0 * t - 24.0,
        360.0 * t2 - 360.0 * t + 60.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_derivative(f: impl Fn(f64) -> f64, t: f64) -> f64 {
        let h = 1e-6;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn cubic_basis_endpoint_conditions() {
        assert_eq!(cubic(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cubic(1.0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cubic_d1(0.0), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(cubic_d1(1.0), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn quintic_basis_endpoint_conditions() {
        assert_eq!(quintic(0.0), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(quintic(1.0), [0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(quintic_d1(0.0), [0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(quintic_d1(1.0), [0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(quintic_d2(0.0), [0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(quintic_d2(1.0), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn quintic_derivatives_match_finite_differences() {
        for &t in &[0.13, 0.5, 0.87] {
            for i in 0..6 {
                let d1 = numeric_derivative(|s| quintic(s)[i], t);
                let d2 = numeric_derivative(|s| quintic_d1(s)[i], t);
                let d3 = numeric_derivative(|s| quintic_d2(s)[i], t);
                assert!((d1 - quintic_d1(t)[i]).abs() < 1e-6, "d1[{i}] at {t}");
                assert!((d2 - quintic_d2(t)[i]).abs() < 1e-6, "d2[{i}] at {t}");
                assert!((d3 - quintic_d3(t)[i]).abs() < 1e-5, "d3[{i}] at {t}");
            }
        }
    }

    #[test]
    fn cubic_derivatives_match_finite_differences() {
        for &t in &[0.2, 0.6] {
            for i in 0..4 {
                let d1 = numeric_derivative(|s| cubic(s)[i], t);
                let d2 = numeric_derivative(|s| cubic_d1(s)[i], t);
                assert!((d1 - cubic_d1(t)[i]).abs() < 1e-6);
                assert!((d2 - cubic_d2(t)[i]).abs() < 1e-6);
            }
        }
    }
}

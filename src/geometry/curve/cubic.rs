use crate::geometry::{Position, Transform, TransformWithVelocity};
use crate::math::{hermite, Vector2};

use super::Curve;

/// A cubic Hermite spline between two poses.
///
/// The curve interpolates both endpoint positions and leaves each endpoint
/// along its heading, with a tangent vector of the configured magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicHermiteSpline {
    p0: Vector2,
    p1: Vector2,
    v0: Vector2,
    v1: Vector2,
}

impl CubicHermiteSpline {
    /// Creates a spline whose tangent magnitudes both equal the distance
    /// between the endpoints.
    #[must_use]
    pub fn new(start: &Transform, end: &Transform) -> Self {
        Self::with_magnitudes(start, end, 0.0, 0.0)
    }

    /// Creates a spline with explicit tangent magnitudes.
    ///
    /// A magnitude of exactly 0 falls back to the endpoint distance.
    #[must_use]
    pub fn with_magnitudes(start: &Transform, end: &Transform, m0: f64, m1: f64) -> Self {
        Self::from_waypoints(
            &TransformWithVelocity::new(*start, m0),
            &TransformWithVelocity::new(*end, m1),
        )
    }

    /// Creates a spline from velocity-annotated waypoints.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_waypoints(start: &TransformWithVelocity, end: &TransformWithVelocity) -> Self {
        let p0 = start.transform.position();
        let p1 = end.transform.position();
        let d = p0.distance(&p1);

        let m0 = if start.velocity == 0.0 { d } else { start.velocity };
        let m1 = if end.velocity == 0.0 { d } else { end.velocity };

        let h0 = start.transform.rotation();
        let h1 = end.transform.rotation();

        Self {
            p0: p0.to_vector(),
            p1: p1.to_vector(),
            v0: Vector2::new(h0.cos(), h0.sin()) * m0,
            v1: Vector2::new(h1.cos(), h1.sin()) * m1,
        }
    }

    /// Returns the start point of the spline.
    #[must_use]
    pub fn start_position(&self) -> Position {
        self.p0.into()
    }

    /// Returns the end point of the spline.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.p1.into()
    }

    /// Tangent vector at `t = 0`.
    #[must_use]
    pub fn start_velocity(&self) -> Position {
        self.v0.into()
    }

    /// Tangent vector at `t = 1`.
    #[must_use]
    pub fn end_velocity(&self) -> Position {
        self.v1.into()
    }

    fn combine(&self, h: [f64; 4]) -> Position {
        (self.p0 * h[0] + self.v0 * h[1] + self.v1 * h[2] + self.p1 * h[3]).into()
    }
}

impl Curve for CubicHermiteSpline {
    fn position(&self, t: f64) -> Position {
        self.combine(hermite::cubic(t))
    }

    fn first_derivative(&self, t: f64) -> Position {
        self.combine(hermite::cubic_d1(t))
    }

    fn second_derivative(&self, t: f64) -> Position {
        self.combine(hermite::cubic_d2(t))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pose(x: f64, y: f64, heading: f64) -> Transform {
        Transform::from_xy_heading(x, y, heading)
    }

    #[test]
    fn interpolates_endpoints() {
        let spline = CubicHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(50.0, 30.0, 90.0));

        let start = spline.transform(0.0);
        assert_eq!(start.position(), Position::new(0.0, 0.0));
        assert_relative_eq!(start.rotation().degrees(), 0.0, epsilon = 1e-9);

        let end = spline.transform(1.0);
        assert_relative_eq!(end.position().x(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(end.position().y(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(end.rotation().degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_velocity_defaults_to_distance() {
        let a = pose(0.0, 0.0, 45.0);
        let b = pose(30.0, 40.0, -30.0);
        let spline = CubicHermiteSpline::new(&a, &b);
        assert_relative_eq!(spline.first_derivative(0.0).norm(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(spline.first_derivative(1.0).norm(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn explicit_magnitudes_are_used() {
        let spline =
            CubicHermiteSpline::with_magnitudes(&pose(0.0, 0.0, 0.0), &pose(10.0, 0.0, 0.0), 3.0, 0.0);
        assert_relative_eq!(spline.start_velocity().x(), 3.0);
        assert_relative_eq!(spline.end_velocity().x(), 10.0);
    }

    #[test]
    fn straight_line_has_zero_curvature() {
        let spline = CubicHermiteSpline::new(&pose(0.0, 0.0, 45.0), &pose(10.0, 10.0, 45.0));
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            assert!(spline.curvature(t).abs() < 1e-9, "curvature at {t}");
        }
    }

    #[test]
    fn left_turn_has_positive_curvature() {
        let spline = CubicHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(10.0, 10.0, 90.0));
        assert!(spline.curvature(0.5) > 0.0);
    }

    #[test]
    fn coincident_endpoints_do_not_panic() {
        let spline = CubicHermiteSpline::new(&pose(1.0, 1.0, 0.0), &pose(1.0, 1.0, 0.0));
        assert!(!spline.curvature(0.5).is_finite());
        assert_eq!(spline.position(0.5), Position::new(1.0, 1.0));
    }
}

use crate::geometry::{Position, Transform, TransformWithVelocityAndCurvature};
use crate::math::{hermite, Vector2};

use super::{curvature_derivative_from_derivatives, Curve};

/// A quintic Hermite spline between two poses.
///
/// In addition to endpoint positions and tangents, a quintic segment pins
/// the second derivative at both ends, which is what lets adjacent segments
/// share curvature at their common waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct QuinticHermiteSpline {
    p0: Vector2,
    p1: Vector2,
    v0: Vector2,
    v1: Vector2,
    a0: Vector2,
    a1: Vector2,
}

impl QuinticHermiteSpline {
    /// Creates a spline with distance-scaled tangents and zero acceleration.
    #[must_use]
    pub fn new(start: &Transform, end: &Transform) -> Self {
        Self::from_waypoints(&(*start).into(), &(*end).into())
    }

    /// Creates a spline from annotated waypoints.
    ///
    /// A velocity of 0 defaults to the endpoint distance `d`. A curvature `k`
    /// becomes an acceleration of magnitude `k * d^2`, laid out as
    /// `(sin(heading), cos(heading)) * k * d^2`. This mapping approximates the
    /// requested curvature; it does not reproduce it exactly at the endpoint.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_waypoints(
        start: &TransformWithVelocityAndCurvature,
        end: &TransformWithVelocityAndCurvature,
    ) -> Self {
        let p0 = start.position();
        let p1 = end.position();
        let d = p0.distance(&p1);

        let m0 = if start.velocity == 0.0 { d } else { start.velocity };
        let m1 = if end.velocity == 0.0 { d } else { end.velocity };
        let k0 = acceleration_from_curvature(start.curvature, d);
        let k1 = acceleration_from_curvature(end.curvature, d);

        let h0 = start.rotation();
        let h1 = end.rotation();

        Self {
            p0: p0.to_vector(),
            p1: p1.to_vector(),
            v0: Vector2::new(h0.cos(), h0.sin()) * m0,
            v1: Vector2::new(h1.cos(), h1.sin()) * m1,
            a0: Vector2::new(h0.sin(), h0.cos()) * k0,
            a1: Vector2::new(h1.sin(), h1.cos()) * k1,
        }
    }

    /// Creates a spline with distance-scaled tangents and explicit
    /// acceleration vectors.
    #[must_use]
    pub fn with_accelerations(start: &Transform, end: &Transform, a0: Position, a1: Position) -> Self {
        let d = start.position().distance(&end.position());
        let h0 = start.rotation();
        let h1 = end.rotation();
        Self::from_vectors(
            start.position(),
            end.position(),
            Position::new(h0.cos(), h0.sin()) * d,
            Position::new(h1.cos(), h1.sin()) * d,
            a0,
            a1,
        )
    }

    /// Creates a spline directly from its six control vectors.
    #[must_use]
    pub fn from_vectors(
        p0: Position,
        p1: Position,
        v0: Position,
        v1: Position,
        a0: Position,
        a1: Position,
    ) -> Self {
        Self {
            p0: p0.to_vector(),
            p1: p1.to_vector(),
            v0: v0.to_vector(),
            v1: v1.to_vector(),
            a0: a0.to_vector(),
            a1: a1.to_vector(),
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

    /// Returns the tangent vector at `t = 0`.
    #[must_use]
    pub fn start_velocity(&self) -> Position {
        self.v0.into()
    }

    /// Returns the tangent vector at `t = 1`.
    #[must_use]
    pub fn end_velocity(&self) -> Position {
        self.v1.into()
    }

    /// Returns the second derivative at `t = 0`.
    #[must_use]
    pub fn start_acceleration(&self) -> Position {
        self.a0.into()
    }

    /// Returns the second derivative at `t = 1`.
    #[must_use]
    pub fn end_acceleration(&self) -> Position {
        self.a1.into()
    }

    /// Third derivative with respect to `t`.
    #[must_use]
    pub fn third_derivative(&self, t: f64) -> Position {
        self.combine(hermite::quintic_d3(t))
    }

    /// Rate of change of curvature with respect to `t`.
    #[must_use]
    pub fn curvature_derivative(&self, t: f64) -> f64 {
        curvature_derivative_from_derivatives(
            &self.first_derivative(t),
            &self.second_derivative(t),
            &self.third_derivative(t),
        )
    }

    fn combine(&self, h: [f64; 6]) -> Position {
        (self.p0 * h[0]
            + self.v0 * h[1]
            + self.a0 * h[2]
            + self.a1 * h[3]
            + self.v1 * h[4]
            + self.p1 * h[5])
            .into()
    }
}

impl Curve for QuinticHermiteSpline {
    fn position(&self, t: f64) -> Position {
        self.combine(hermite::quintic(t))
    }

    fn first_derivative(&self, t: f64) -> Position {
        self.combine(hermite::quintic_d1(t))
    }

    fn second_derivative(&self, t: f64) -> Position {
        self.combine(hermite::quintic_d2(t))
    }
}

fn acceleration_from_curvature(curvature: f64, distance: f64) -> f64 {
    curvature * distance * distance
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::TransformWithCurvature;

    fn pose(x: f64, y: f64, heading: f64) -> Transform {
        Transform::from_xy_heading(x, y, heading)
    }

    #[test]
    fn interpolates_endpoints() {
        let spline = QuinticHermiteSpline::new(&pose(-20.0, 5.0, 30.0), &pose(40.0, 60.0, 120.0));

        let start = spline.transform(0.0);
        assert_relative_eq!(start.position().x(), -20.0, epsilon = 1e-9);
        assert_relative_eq!(start.position().y(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(start.rotation().degrees(), 30.0, epsilon = 1e-9);

        let end = spline.transform(1.0);
        assert_relative_eq!(end.position().x(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(end.position().y(), 60.0, epsilon = 1e-9);
        assert_relative_eq!(end.rotation().degrees(), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn default_tangent_magnitude_is_distance() {
        let spline = QuinticHermiteSpline::new(&pose(0.0, 0.0, 10.0), &pose(6.0, 8.0, 80.0));
        assert_relative_eq!(spline.first_derivative(0.0).norm(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(spline.first_derivative(1.0).norm(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn bare_transforms_have_zero_acceleration() {
        let spline = QuinticHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(10.0, 5.0, 45.0));
        assert_eq!(spline.second_derivative(0.0), Position::ORIGIN);
        assert_eq!(spline.second_derivative(1.0), Position::ORIGIN);
    }

    #[test]
    fn curvature_maps_to_acceleration() {
        let start = TransformWithCurvature::new(pose(0.0, 0.0, 0.0), 0.5);
        let end = TransformWithCurvature::new(pose(4.0, 0.0, 90.0), -0.25);
        let spline = QuinticHermiteSpline::from_waypoints(&start.into(), &end.into());

        // d = 4, so |a| = k * 16.
        let a0 = spline.start_acceleration();
        assert_relative_eq!(a0.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(a0.y(), 8.0, epsilon = 1e-12);

        let a1 = spline.end_acceleration();
        assert_relative_eq!(a1.x(), -4.0, epsilon = 1e-12);
        assert_relative_eq!(a1.y(), 0.0, epsilon = 1e-12);

        let dd0 = spline.second_derivative(0.0);
        assert_relative_eq!(dd0.y(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn straight_line_has_zero_curvature() {
        let spline = QuinticHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(100.0, 0.0, 0.0));
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!(spline.curvature(t).abs() < 1e-12);
            assert!(spline.curvature_derivative(t).abs() < 1e-12);
        }
    }

    #[test]
    fn curvature_derivative_matches_finite_difference() {
        let spline = QuinticHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(50.0, 40.0, 100.0));
        let h = 1e-6;
        for &t in &[0.2, 0.5, 0.8] {
            let numeric = (spline.curvature(t + h) - spline.curvature(t - h)) / (2.0 * h);
            assert_relative_eq!(spline.curvature_derivative(t), numeric, max_relative = 1e-4);
        }
    }

    #[test]
    fn explicit_accelerations_keep_distance_scaled_tangents() {
        let start = pose(0.0, 0.0, 0.0);
        let end = pose(3.0, 4.0, 90.0);
        let a0 = Position::new(1.0, 2.0);
        let a1 = Position::new(-3.0, 0.5);
        let spline = QuinticHermiteSpline::with_accelerations(&start, &end, a0, a1);

        assert_eq!(spline.second_derivative(0.0), a0);
        assert_eq!(spline.second_derivative(1.0), a1);

        // d = 5 at both ends, along each endpoint heading.
        let v0 = spline.first_derivative(0.0);
        assert_relative_eq!(v0.x(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(v0.y(), 0.0, epsilon = 1e-12);
        let v1 = spline.first_derivative(1.0);
        assert_relative_eq!(v1.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(v1.y(), 5.0, epsilon = 1e-12);

        assert_eq!(spline.position(0.0), start.position());
        assert_eq!(spline.position(1.0), end.position());
    }

    #[test]
    fn explicit_vectors_are_kept() {
        let spline = QuinticHermiteSpline::from_vectors(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(0.0, 2.0),
            Position::new(0.0, -2.0),
        );
        assert_eq!(spline.second_derivative(0.0), Position::new(0.0, 2.0));
        assert_eq!(spline.second_derivative(1.0), Position::new(0.0, -2.0));
    }
}

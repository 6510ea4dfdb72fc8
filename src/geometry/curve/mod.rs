mod cubic;
mod quintic;
mod segment;

pub use cubic::CubicHermiteSpline;
pub use quintic::QuinticHermiteSpline;
pub use segment::{Segment, SegmentKind};

use super::{Position, Rotation, Transform};

/// Trait for parametric curves in the plane.
///
/// The parameter `t` normally lies in `[0, 1]`, but implementations do not
/// clamp it. Evaluations are pure functions of `t`.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn position(&self, t: f64) -> Position;

    /// First derivative with respect to `t`.
    fn first_derivative(&self, t: f64) -> Position;

    /// Second derivative with respect to `t`.
    fn second_derivative(&self, t: f64) -> Position;

    /// Pose at `t`, headed along the tangent `atan2(dy/dt, dx/dt)`.
    fn transform(&self, t: f64) -> Transform {
        let d1 = self.first_derivative(t);
        Transform::new(
            self.position(t),
            Rotation::from_radians(d1.y().atan2(d1.x())),
        )
    }

    /// Signed curvature at `t`.
    ///
    /// NaN or infinite where the first derivative vanishes.
    fn curvature(&self, t: f64) -> f64 {
        curvature_from_derivatives(&self.first_derivative(t), &self.second_derivative(t))
    }
}

/// Planar curvature `(x'y'' - x''y') / (x'^2 + y'^2)^(3/2)`.
#[must_use]
pub fn curvature_from_derivatives(d1: &Position, d2: &Position) -> f64 {
    let speed_sq = d1.x() * d1.x() + d1.y() * d1.y();
    (d1.x() * d2.y() - d2.x() * d1.y()) / (speed_sq * speed_sq * speed_sq).sqrt()
}

/// Derivative of the curvature with respect to `t`, from the first three
/// derivatives of the curve.
#[must_use]
pub fn curvature_derivative_from_derivatives(d1: &Position, d2: &Position, d3: &Position) -> f64 {
    let speed_sq = d1.x() * d1.x() + d1.y() * d1.y();
    let cross = d1.x() * d2.y() - d2.x() * d1.y();
    let cross_rate = d1.x() * d3.y() - d3.x() * d1.y();
    let speed_rate = d1.x() * d2.x() + d1.y() * d2.y();
    cross_rate / speed_sq.powf(1.5) - 3.0 * cross * speed_rate / speed_sq.powf(2.5)
}

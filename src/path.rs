use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Curve, Position, Rotation, Segment, Transform, TransformWithParameter};
use crate::operations::planning::AdaptiveReplan;
use crate::operations::query::{ClosestPointOnCurve, SearchParams};

/// An ordered chain of spline segments exposed as one curve over `t ∈ [0, 1]`.
///
/// Segment `i` covers the global range `[i / n, (i + 1) / n]`. Out-of-range
/// parameters are clamped into `[0, 1]`, and a parameter that lands exactly on
/// a shared waypoint is served by the lower segment. Derivatives are taken
/// with respect to the segment-local parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    waypoints: Vec<Transform>,
}

impl Path {
    /// Creates a path from its segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(
                OperationError::InvalidInput("a path needs at least one segment".into()).into(),
            );
        }
        let waypoints = knot_transforms(&segments);
        debug!(segments = segments.len(), "built path");
        Ok(Self {
            segments,
            waypoints,
        })
    }

    /// Creates a single-segment path.
    #[must_use]
    pub fn from_segment(segment: impl Into<Segment>) -> Self {
        let segments = vec![segment.into()];
        let waypoints = knot_transforms(&segments);
        Self {
            segments,
            waypoints,
        }
    }

    /// Returns the segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The `n + 1` knot poses of the path, read back from the curve.
    #[must_use]
    pub fn waypoints(&self) -> &[Transform] {
        &self.waypoints
    }

    /// Returns the pose at `t = 0`.
    #[must_use]
    pub fn start_waypoint(&self) -> Transform {
        self.waypoints[0]
    }

    /// Returns the pose at `t = 1`.
    #[must_use]
    pub fn end_waypoint(&self) -> Transform {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Waypoints in reverse order, each turned around by 180 degrees.
    #[must_use]
    pub fn reversed_waypoints(&self) -> Vec<Transform> {
        let half_turn = Rotation::from_degrees(180.0);
        self.waypoints
            .iter()
            .rev()
            .map(|w| w.rotate_by(&half_turn))
            .collect()
    }

    /// Parameter of the point closest to `reference`, with default search
    /// parameters.
    #[must_use]
    pub fn closest_t(&self, reference: &Position) -> f64 {
        ClosestPointOnCurve::new(*reference).closest_t(self)
    }

    /// Pose and parameter of the point closest to `reference`, with default
    /// search parameters.
    #[must_use]
    pub fn closest_transform(&self, reference: &Position) -> TransformWithParameter {
        ClosestPointOnCurve::new(*reference).execute(self)
    }

    /// Builds a replacement waypoint list that starts at `new_start` and
    /// rejoins this path at the next waypoint ahead of it.
    ///
    /// See [`AdaptiveReplan`].
    #[must_use]
    pub fn generate_adaptive_path_waypoints(
        &self,
        new_start: &Transform,
        adapt_to_start_heading: bool,
    ) -> Vec<Transform> {
        AdaptiveReplan::new(*new_start, adapt_to_start_heading)
            .with_params(SearchParams::default())
            .execute(self)
    }

    /// Maps a global parameter to a segment and its local parameter.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn locate(&self, t: f64) -> (&Segment, f64) {
        let n = self.segments.len();
        let scaled = t.clamp(0.0, 1.0) * n as f64;
        let index = (scaled.ceil() as usize).saturating_sub(1).min(n - 1);
        (&self.segments[index], scaled - index as f64)
    }
}

impl Curve for Path {
    fn position(&self, t: f64) -> Position {
        let (segment, local) = self.locate(t);
        segment.position(local)
    }

    fn first_derivative(&self, t: f64) -> Position {
        let (segment, local) = self.locate(t);
        segment.first_derivative(local)
    }

    fn second_derivative(&self, t: f64) -> Position {
        let (segment, local) = self.locate(t);
        segment.second_derivative(local)
    }

    fn transform(&self, t: f64) -> Transform {
        let (segment, local) = self.locate(t);
        segment.transform(local)
    }

    fn curvature(&self, t: f64) -> f64 {
        let (segment, local) = self.locate(t);
        segment.curvature(local)
    }
}

fn knot_transforms(segments: &[Segment]) -> Vec<Transform> {
    let mut knots: Vec<Transform> = segments.iter().map(|s| s.transform(0.0)).collect();
    if let Some(last) = segments.last() {
        knots.push(last.transform(1.0));
    }
    knots
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{CubicHermiteSpline, QuinticHermiteSpline};

    fn pose(x: f64, y: f64, heading: f64) -> Transform {
        Transform::from_xy_heading(x, y, heading)
    }

    fn two_segment_path() -> Path {
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(100.0, 0.0, 0.0);
        let c = pose(200.0, 100.0, 90.0);
        Path::new(vec![
            QuinticHermiteSpline::new(&a, &b).into(),
            QuinticHermiteSpline::new(&b, &c).into(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(Path::new(Vec::new()).is_err());
    }

    #[test]
    fn global_parameter_spans_all_segments() {
        let path = two_segment_path();
        assert_eq!(path.position(0.0), Position::new(0.0, 0.0));
        assert_eq!(path.position(0.5), Position::new(100.0, 0.0));
        let end = path.position(1.0);
        assert_relative_eq!(end.x(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(end.y(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let path = two_segment_path();
        assert_eq!(path.position(-0.5), path.position(0.0));
        assert_eq!(path.position(1.7), path.position(1.0));
        assert_eq!(path.transform(2.0), path.transform(1.0));
    }

    #[test]
    fn shared_boundary_uses_lower_segment() {
        let path = two_segment_path();
        let lower = path.segments()[0].transform(1.0);
        assert_eq!(path.transform(0.5), lower);
        assert_eq!(path.curvature(0.5), path.segments()[0].curvature(1.0));
    }

    #[test]
    fn adjacent_segments_are_continuous() {
        let path = two_segment_path();
        let segments = path.segments();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].position(1.0), pair[1].position(0.0));
            assert_relative_eq!(
                pair[0].transform(1.0).rotation().degrees(),
                pair[1].transform(0.0).rotation().degrees(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn waypoints_are_segment_knots() {
        let path = two_segment_path();
        let waypoints = path.waypoints();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(path.start_waypoint().position(), Position::new(0.0, 0.0));
        assert_eq!(waypoints[1].position(), Position::new(100.0, 0.0));
        assert_relative_eq!(path.end_waypoint().rotation().degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn reversed_waypoints_turn_around() {
        let path = two_segment_path();
        let reversed = path.reversed_waypoints();
        assert_eq!(reversed.len(), 3);
        assert_eq!(reversed[0].position(), path.end_waypoint().position());
        assert_relative_eq!(reversed[0].rotation().degrees(), -90.0, epsilon = 1e-9);
        assert_relative_eq!(reversed[2].rotation().degrees().abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn mixed_segment_kinds() {
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(10.0, 10.0, 90.0);
        let c = pose(0.0, 20.0, 180.0);
        let path = Path::new(vec![
            CubicHermiteSpline::new(&a, &b).into(),
            QuinticHermiteSpline::new(&b, &c).into(),
        ])
        .unwrap();
        assert_eq!(path.segments()[0].kind(), crate::geometry::SegmentKind::Cubic);
        assert_eq!(path.segments()[1].kind(), crate::geometry::SegmentKind::Quintic);
        assert_eq!(path.position(0.5), Position::new(10.0, 10.0));
    }

    #[test]
    fn single_segment_path() {
        let spline = CubicHermiteSpline::new(&pose(0.0, 0.0, 0.0), &pose(5.0, 0.0, 0.0));
        let path = Path::from_segment(spline.clone());
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.position(0.3), spline.position(0.3));
    }
}

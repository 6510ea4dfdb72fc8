use crate::geometry::{
    CubicHermiteSpline, QuinticHermiteSpline, Segment, SegmentKind, TransformWithVelocity,
    TransformWithVelocityAndCurvature,
};

/// Builds one spline segment between two waypoints.
pub struct MakeSegment {
    start: TransformWithVelocityAndCurvature,
    end: TransformWithVelocityAndCurvature,
    kind: SegmentKind,
}

impl MakeSegment {
    /// Creates a new `MakeSegment` operation.
    ///
    /// Cubic segments ignore the curvature annotations.
    #[must_use]
    pub fn new(
        start: impl Into<TransformWithVelocityAndCurvature>,
        end: impl Into<TransformWithVelocityAndCurvature>,
        kind: SegmentKind,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind,
        }
    }

    /// Executes the operation, returning the segment.
    #[must_use]
    pub fn execute(&self) -> Segment {
        match self.kind {
            SegmentKind::Cubic => CubicHermiteSpline::from_waypoints(
                &TransformWithVelocity::new(self.start.transform, self.start.velocity),
                &TransformWithVelocity::new(self.end.transform, self.end.velocity),
            )
            .into(),
            SegmentKind::Quintic => {
                QuinticHermiteSpline::from_waypoints(&self.start, &self.end).into()
            }
        }
    }
}

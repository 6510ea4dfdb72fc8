use crate::geometry::{Curve, Position, SegmentKind, TransformWithVelocityAndCurvature};
use crate::path::Path;

slotmap::new_key_type! {
    /// Unique identifier for a spline in the spline store.
    pub struct SplineId;
}

/// Data associated with an editable spline.
///
/// `path` is always regenerated from `waypoints` and `kind`; the store never
/// lets the two drift apart.
#[derive(Debug, Clone)]
pub struct SplineData {
    kind: SegmentKind,
    waypoints: Vec<TransformWithVelocityAndCurvature>,
    path: Path,
}

impl SplineData {
    pub(super) fn new(
        kind: SegmentKind,
        waypoints: Vec<TransformWithVelocityAndCurvature>,
        path: Path,
    ) -> Self {
        Self {
            kind,
            waypoints,
            path,
        }
    }

    /// Returns the spline family used for every segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns the editable waypoints.
    #[must_use]
    pub fn waypoints(&self) -> &[TransformWithVelocityAndCurvature] {
        &self.waypoints
    }

    /// Returns the path regenerated from the waypoints.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name of the spline family.
    #[must_use]
    pub fn name(&self) -> String {
        self.kind.to_string()
    }

    /// Point halfway along the path parameter, used to anchor labels.
    #[must_use]
    pub fn center(&self) -> Position {
        self.path.position(0.5)
    }
}

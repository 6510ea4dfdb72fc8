use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{SegmentKind, TransformWithVelocityAndCurvature};
use crate::path::Path;

use super::MakeSegment;

/// Builds a [`Path`] through an ordered list of waypoints.
///
/// Consecutive waypoints are joined by one segment of the given kind, so `n`
/// waypoints give `n - 1` segments.
pub struct MakePath {
    waypoints: Vec<TransformWithVelocityAndCurvature>,
    kind: SegmentKind,
}

impl MakePath {
    /// Creates a new `MakePath` operation.
    #[must_use]
    pub fn new<W>(waypoints: impl IntoIterator<Item = W>, kind: SegmentKind) -> Self
    where
        W: Into<TransformWithVelocityAndCurvature>,
    {
        Self {
            waypoints: waypoints.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    /// Executes the operation, returning the path.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 waypoints were given.
    pub fn execute(&self) -> Result<Path> {
        if self.waypoints.len() < 2 {
            return Err(OperationError::InvalidInput(format!(
                "a path needs at least 2 waypoints, got {}",
                self.waypoints.len()
            ))
            .into());
        }
        debug!(waypoints = self.waypoints.len(), kind = %self.kind, "making path");
        let segments = self
            .waypoints
            .windows(2)
            .map(|pair| MakeSegment::new(pair[0], pair[1], self.kind).execute())
            .collect();
        Path::new(segments)
    }
}

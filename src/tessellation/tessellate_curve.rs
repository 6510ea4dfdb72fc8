use tracing::trace;

use crate::error::{Result, TessellationError};
use crate::geometry::Curve;

use super::{Polyline, TessellationParams};

/// Samples a curve into a polyline.
pub struct TessellateCurve {
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning `samples + 1` points from
    /// `t = 0` to `t = 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is 0.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<C: Curve>(&self, curve: &C) -> Result<Polyline> {
        let samples = self.params.samples;
        if samples == 0 {
            return Err(TessellationError::InvalidParameters(
                "samples must be at least 1".into(),
            )
            .into());
        }
        let points = (0..=samples)
            .map(|i| curve.position(i as f64 / samples as f64))
            .collect();
        trace!(samples, "tessellated curve");
        Ok(Polyline { points })
    }
}

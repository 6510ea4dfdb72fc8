mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::geometry::Position;

/// Parameters controlling curve sampling density.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of evenly spaced intervals over `t ∈ [0, 1]`.
    pub samples: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { samples: 1000 }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Position>,
}

impl Polyline {
    /// Sum of the chord lengths between consecutive vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

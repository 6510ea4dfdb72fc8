use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, Position, Transform, TransformWithParameter};

/// Resolution settings for the coarse-to-fine closest point search.
///
/// Round `j` samples the current bracket every `search_increment^-j`, so
/// `searches` rounds resolve the parameter to about `search_increment^-searches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    search_increment: u32,
    searches: u32,
}

impl SearchParams {
    /// Largest accepted `search_increment`.
    pub const MAX_SEARCH_INCREMENT: u32 = 1000;

    /// Largest accepted number of refinement rounds.
    pub const MAX_SEARCHES: u32 = 16;

    /// Creates validated search parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `search_increment` is outside
    /// `[2, MAX_SEARCH_INCREMENT]` or `searches` is outside `[1, MAX_SEARCHES]`.
    pub fn new(search_increment: u32, searches: u32) -> Result<Self> {
        if !(2..=Self::MAX_SEARCH_INCREMENT).contains(&search_increment) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "search_increment",
                value: f64::from(search_increment),
                min: 2.0,
                max: f64::from(Self::MAX_SEARCH_INCREMENT),
            }
            .into());
        }
        if !(1..=Self::MAX_SEARCHES).contains(&searches) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "searches",
                value: f64::from(searches),
                min: 1.0,
                max: f64::from(Self::MAX_SEARCHES),
            }
            .into());
        }
        Ok(Self {
            search_increment,
            searches,
        })
    }

    /// Returns the subdivision factor applied per round.
    #[must_use]
    pub fn search_increment(&self) -> u32 {
        self.search_increment
    }

    /// Returns the number of refinement rounds.
    #[must_use]
    pub fn searches(&self) -> u32 {
        self.searches
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            search_increment: 10,
            searches: 3,
        }
    }
}

/// Which side of the true closest point a shifted query may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftDirection {
    /// At or after the closest parameter (lookahead).
    #[default]
    Ahead,
    /// At or before the closest parameter.
    Behind,
}

/// Finds the point on a curve closest to a reference position.
///
/// With a distance shift the query instead looks for the point whose distance
/// to the reference equals the shift, on the requested side of the true
/// closest point. This is the lookahead query of pursuit-style followers.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointOnCurve {
    reference: Position,
    distance_shift: f64,
    direction: ShiftDirection,
    params: SearchParams,
}

impl ClosestPointOnCurve {
    /// Creates a new `ClosestPointOnCurve` query with default search
    /// parameters and no distance shift.
    #[must_use]
    pub fn new(reference: Position) -> Self {
        Self {
            reference,
            distance_shift: 0.0,
            direction: ShiftDirection::Ahead,
            params: SearchParams::default(),
        }
    }

    /// Looks for the point `distance_shift` away from the reference instead
    /// of the closest one.
    #[must_use]
    pub fn with_distance_shift(mut self, distance_shift: f64, direction: ShiftDirection) -> Self {
        self.distance_shift = distance_shift;
        self.direction = direction;
        self
    }

    /// Replaces the search parameters.
    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the pose found and its parameter.
    ///
    /// When the reference is within `distance_shift` of the curve end, the
    /// result is extrapolated past the end along the end heading and carries
    /// parameter 1.
    #[must_use]
    pub fn execute<C: Curve>(&self, curve: &C) -> TransformWithParameter {
        let end = curve.transform(1.0);
        let to_end = self.reference.distance(&end.position());
        if to_end <= self.distance_shift {
            let rotation = end.rotation();
            let overshoot = self.distance_shift - to_end;
            let position =
                end.position() + Position::new(rotation.cos(), rotation.sin()) * overshoot;
            return TransformWithParameter::new(Transform::new(position, rotation), 1.0);
        }

        let t = self.closest_t(curve);
        TransformWithParameter::new(curve.transform(t), t)
    }

    /// Executes the parameter search only, without the end extrapolation.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn closest_t<C: Curve>(&self, curve: &C) -> f64 {
        let reference = self.reference;
        let actual = grid_search(curve, self.params, |_, position| {
            Some(position.distance(&reference))
        });
        if self.distance_shift == 0.0 {
            return actual;
        }

        let shift = self.distance_shift;
        let direction = self.direction;
        grid_search(curve, self.params, |t, position| {
            let on_side = match direction {
                ShiftDirection::Ahead => t >= actual,
                ShiftDirection::Behind => t <= actual,
            };
            on_side.then(|| (position.distance(&reference) - shift).abs())
        })
    }
}

/// Coarse-to-fine search for the parameter minimizing `cost`.
///
/// `cost` returns `None` for samples that must be skipped. The best sample is
/// kept across rounds, so more rounds never yield a worse result.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn grid_search<C, F>(curve: &C, params: SearchParams, mut cost: F) -> f64
where
    C: Curve,
    F: FnMut(f64, Position) -> Option<f64>,
{
    let base = f64::from(params.search_increment);
    let mut best_t = 0.0;
    let mut best_cost = f64::INFINITY;
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut step = 1.0;

    for round in 1..=params.searches {
        step /= base;
        let count = ((hi - lo) / step).round() as u64;
        for k in 0..=count {
            let t = (lo + k as f64 * step).min(hi);
            if let Some(c) = cost(t, curve.position(t)) {
                if c < best_cost {
                    best_cost = c;
                    best_t = t;
                }
            }
        }
        lo = (best_t - step).max(0.0);
        hi = (best_t + step).min(1.0);
        trace!(round, best_t, best_cost, "closest point search round");
    }

    best_t
}

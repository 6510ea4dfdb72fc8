use tracing::debug;

use crate::geometry::{Curve, Transform};
use crate::operations::query::{ClosestPointOnCurve, SearchParams};
use crate::path::Path;

/// Rebuilds a path's waypoint list so that it starts from a drifted pose.
///
/// The new list starts at `new_start`, rejoins the original path at the
/// nearest waypoint lying ahead of the closest on-path point, and keeps every
/// waypoint after that one unchanged.
pub struct AdaptiveReplan {
    new_start: Transform,
    adapt_to_start_heading: bool,
    params: SearchParams,
}

impl AdaptiveReplan {
    /// Creates a new `AdaptiveReplan` operation.
    ///
    /// With `adapt_to_start_heading` the first waypoint keeps the heading of
    /// `new_start`; otherwise it takes the path heading at the closest
    /// on-path point.
    #[must_use]
    pub fn new(new_start: Transform, adapt_to_start_heading: bool) -> Self {
        Self {
            new_start,
            adapt_to_start_heading,
            params: SearchParams::default(),
        }
    }

    /// Replaces the parameters of every closest-point search.
    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the replacement waypoint list.
    #[must_use]
    pub fn execute(&self, path: &Path) -> Vec<Transform> {
        let query = ClosestPointOnCurve::new(self.new_start.position()).with_params(self.params);
        let reference_t = query.closest_t(path);
        let reference = path.transform(reference_t);

        let waypoints = path.waypoints();
        let mut chosen = waypoints.len() - 1;
        let mut chosen_distance = f64::INFINITY;
        for (index, waypoint) in waypoints.iter().enumerate() {
            let t = ClosestPointOnCurve::new(waypoint.position())
                .with_params(self.params)
                .closest_t(path);
            if t <= reference_t {
                continue;
            }
            let distance = waypoint.position().distance(&reference.position());
            if distance < chosen_distance {
                chosen_distance = distance;
                chosen = index;
            }
        }

        let start = if self.adapt_to_start_heading {
            self.new_start
        } else {
            self.new_start.with_rotation(reference.rotation())
        };
        debug!(reference_t, rejoin_index = chosen, "replanned path waypoints");

        let mut result = Vec::with_capacity(waypoints.len() - chosen + 1);
        result.push(start);
        result.extend_from_slice(&waypoints[chosen..]);
        result
    }
}

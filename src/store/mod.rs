mod spline;

pub use spline::{SplineData, SplineId};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{OperationError, Result, StoreError};
use crate::geometry::{SegmentKind, TransformWithVelocityAndCurvature};
use crate::operations::creation::MakePath;

/// Central arena that owns all editable splines.
///
/// Callers hold a [`SplineId`] and go through the store for every edit, so
/// each spline's path is regenerated whenever its waypoints change.
#[derive(Debug, Default)]
pub struct SplineStore {
    splines: SlotMap<SplineId, SplineData>,
}

impl SplineStore {
    /// Creates a new, empty spline store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a spline through `waypoints` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 waypoints are given.
    pub fn add_spline<W>(
        &mut self,
        kind: SegmentKind,
        waypoints: impl IntoIterator<Item = W>,
    ) -> Result<SplineId>
    where
        W: Into<TransformWithVelocityAndCurvature>,
    {
        let waypoints: Vec<TransformWithVelocityAndCurvature> =
            waypoints.into_iter().map(Into::into).collect();
        let path = MakePath::new(waypoints.iter().copied(), kind).execute()?;
        let id = self.splines.insert(SplineData::new(kind, waypoints, path));
        debug!(?id, %kind, "added spline");
        Ok(id)
    }

    /// Removes a spline and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline is not found in the store.
    pub fn remove_spline(&mut self, id: SplineId) -> Result<SplineData> {
        let data = self.splines.remove(id).ok_or_else(|| not_found(id))?;
        debug!(?id, "removed spline");
        Ok(data)
    }

    /// Returns a reference to the spline data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline is not found in the store.
    pub fn spline(&self, id: SplineId) -> Result<&SplineData> {
        Ok(self.splines.get(id).ok_or_else(|| not_found(id))?)
    }

    /// Returns an iterator over all splines and their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (SplineId, &SplineData)> {
        self.splines.iter()
    }

    /// Returns the number of splines in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.splines.len()
    }

    /// Returns `true` if the store holds no splines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }

    /// Inserts a waypoint before `index` (`index == len` appends) and
    /// regenerates the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline is not found or `index > len`.
    pub fn insert_waypoint(
        &mut self,
        id: SplineId,
        index: usize,
        waypoint: impl Into<TransformWithVelocityAndCurvature>,
    ) -> Result<()> {
        let mut waypoints = self.spline(id)?.waypoints().to_vec();
        if index > waypoints.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: waypoints.len(),
            }
            .into());
        }
        waypoints.insert(index, waypoint.into());
        self.regenerate(id, waypoints)
    }

    /// Replaces the waypoint at `index` and regenerates the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline is not found or `index` is out of range.
    pub fn replace_waypoint(
        &mut self,
        id: SplineId,
        index: usize,
        waypoint: impl Into<TransformWithVelocityAndCurvature>,
    ) -> Result<()> {
        let mut waypoints = self.spline(id)?.waypoints().to_vec();
        let len = waypoints.len();
        let slot = waypoints
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        *slot = waypoint.into();
        self.regenerate(id, waypoints)
    }

    /// Removes the waypoint at `index` and regenerates the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline is not found, `index` is out of range,
    /// or the spline would be left with fewer than 2 waypoints.
    pub fn remove_waypoint(&mut self, id: SplineId, index: usize) -> Result<()> {
        let mut waypoints = self.spline(id)?.waypoints().to_vec();
        if index >= waypoints.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: waypoints.len(),
            }
            .into());
        }
        if waypoints.len() <= 2 {
            return Err(OperationError::InvalidInput(
                "a spline needs at least 2 waypoints".into(),
            )
            .into());
        }
        waypoints.remove(index);
        self.regenerate(id, waypoints)
    }

    fn regenerate(
        &mut self,
        id: SplineId,
        waypoints: Vec<TransformWithVelocityAndCurvature>,
    ) -> Result<()> {
        let spline = self.splines.get_mut(id).ok_or_else(|| not_found(id))?;
        let path = MakePath::new(waypoints.iter().copied(), spline.kind()).execute()?;
        debug!(?id, waypoints = waypoints.len(), "regenerated spline");
        *spline = SplineData::new(spline.kind(), waypoints, path);
        Ok(())
    }
}

fn not_found(id: SplineId) -> StoreError {
    StoreError::EntityNotFound(format!("spline {id:?}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PathgenError;
    use crate::geometry::{Position, Transform};

    fn pose(x: f64, y: f64, heading: f64) -> Transform {
        Transform::from_xy_heading(x, y, heading)
    }

    fn store_with_spline() -> (SplineStore, SplineId) {
        let mut store = SplineStore::new();
        let id = store
            .add_spline(
                SegmentKind::Quintic,
                vec![pose(0.0, 0.0, 0.0), pose(100.0, 0.0, 0.0), pose(200.0, 100.0, 90.0)],
            )
            .unwrap();
        (store, id)
    }

    #[test]
    fn add_and_lookup() {
        let (store, id) = store_with_spline();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        let spline = store.spline(id).unwrap();
        assert_eq!(spline.kind(), SegmentKind::Quintic);
        assert_eq!(spline.name(), "Quintic Hermite");
        assert_eq!(spline.path().segment_count(), 2);
        assert_eq!(spline.center(), Position::new(100.0, 0.0));
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn add_requires_two_waypoints() {
        let mut store = SplineStore::new();
        assert!(store.add_spline(SegmentKind::Cubic, vec![pose(0.0, 0.0, 0.0)]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn removed_spline_is_gone() {
        let (mut store, id) = store_with_spline();
        let data = store.remove_spline(id).unwrap();
        assert_eq!(data.waypoints().len(), 3);
        assert!(matches!(
            store.spline(id),
            Err(PathgenError::Store(StoreError::EntityNotFound(_)))
        ));
        assert!(store.remove_spline(id).is_err());
    }

    #[test]
    fn insert_regenerates_path() {
        let (mut store, id) = store_with_spline();
        store.insert_waypoint(id, 3, pose(200.0, 200.0, 90.0)).unwrap();
        let spline = store.spline(id).unwrap();
        assert_eq!(spline.waypoints().len(), 4);
        assert_eq!(spline.path().segment_count(), 3);
        assert_eq!(spline.path().end_waypoint().position(), Position::new(200.0, 200.0));
    }

    #[test]
    fn insert_past_the_end_is_rejected() {
        let (mut store, id) = store_with_spline();
        let result = store.insert_waypoint(id, 5, pose(0.0, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(PathgenError::Store(StoreError::IndexOutOfRange { index: 5, len: 3 }))
        ));
    }

    #[test]
    fn replace_moves_the_waypoint() {
        let (mut store, id) = store_with_spline();
        store.replace_waypoint(id, 1, pose(100.0, 20.0, 0.0)).unwrap();
        let spline = store.spline(id).unwrap();
        assert_eq!(spline.center(), Position::new(100.0, 20.0));
        assert!(store.replace_waypoint(id, 3, pose(0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn remove_keeps_at_least_two_waypoints() {
        let (mut store, id) = store_with_spline();
        store.remove_waypoint(id, 1).unwrap();
        assert_eq!(store.spline(id).unwrap().path().segment_count(), 1);
        assert!(matches!(
            store.remove_waypoint(id, 0),
            Err(PathgenError::Operation(OperationError::InvalidInput(_)))
        ));
        assert_eq!(store.spline(id).unwrap().waypoints().len(), 2);
    }
}

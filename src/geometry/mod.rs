pub mod curve;
mod position;
mod rotation;
mod transform;
mod waypoint;

pub use curve::{CubicHermiteSpline, Curve, QuinticHermiteSpline, Segment, SegmentKind};
pub use position::Position;
pub use rotation::Rotation;
pub use transform::Transform;
pub use waypoint::{
    TransformWithCurvature, TransformWithParameter, TransformWithVelocity,
    TransformWithVelocityAndCurvature,
};

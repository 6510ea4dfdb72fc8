pub mod hermite;
pub mod units;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Unit complex number, used to compose planar rotations.
pub type UnitComplex = nalgebra::UnitComplex<f64>;

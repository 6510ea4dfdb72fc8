pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path;
pub mod store;
pub mod tessellation;

pub use error::{PathgenError, Result};
pub use path::Path;

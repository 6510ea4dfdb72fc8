pub mod creation;
pub mod planning;
pub mod query;

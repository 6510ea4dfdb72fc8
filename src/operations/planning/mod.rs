mod adaptive_replan;

pub use adaptive_replan::AdaptiveReplan;

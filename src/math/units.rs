/// Meters per inch.
pub const IN_TO_M: f64 = 0.0254;

/// Inches per meter.
pub const M_TO_IN: f64 = 1.0 / IN_TO_M;

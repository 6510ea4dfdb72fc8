//! Builds a quintic path, samples it, and replans from a drifted pose.
//!
//! Usage:
//! ```text
//! cargo run --example replan
//! RUST_LOG=pathgen=trace cargo run --example replan
//! ```

use pathgen::geometry::{Curve, SegmentKind, Transform};
use pathgen::operations::query::{ClosestPointOnCurve, ShiftDirection};
use pathgen::store::SplineStore;
use pathgen::tessellation::{TessellateCurve, TessellationParams};
use pathgen::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for pathgen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pathgen=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = SplineStore::new();
    let id = store.add_spline(
        SegmentKind::Quintic,
        vec![
            Transform::from_xy_heading(0.0, 0.0, 0.0),
            Transform::from_xy_heading(100.0, 0.0, 0.0),
            Transform::from_xy_heading(200.0, 100.0, 90.0),
        ],
    )?;
    let spline = store.spline(id)?;
    let path = spline.path();

    let polyline = TessellateCurve::new(TessellationParams::default()).execute(path)?;
    println!(
        "{}: {} segments, length {:.2}, center {}",
        spline.name(),
        path.segment_count(),
        polyline.length(),
        spline.center()
    );

    let robot = Transform::from_xy_heading(130.0, 10.0, 20.0);
    let closest = path.closest_transform(&robot.position());
    let lookahead = ClosestPointOnCurve::new(robot.position())
        .with_distance_shift(24.0, ShiftDirection::Ahead)
        .execute(path);
    println!(
        "closest t = {:.4} at {}, curvature {:.5}",
        closest.parameter,
        closest.transform,
        path.curvature(closest.parameter)
    );
    println!("lookahead t = {:.4} at {}", lookahead.parameter, lookahead.transform);

    for waypoint in path.generate_adaptive_path_waypoints(&robot, false) {
        println!("  {waypoint}");
    }
    Ok(())
}

#![forbid(unsafe_code)]

use std::sync::Arc;

use geo::{LineString, Polygon};
use spatial_bernoulli::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Install a plain fmt subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = SubscriberBuilder::default().with_target(false).try_init();
}

/// Axis-aligned square `[0, side]^2`.
pub fn square(side: f64) -> anyhow::Result<Arc<Boundary>> {
    Ok(Arc::new(Boundary::square(side)?))
}

/// L-shaped region of the given arm length with a square hole in the corner block.
pub fn l_shape_with_hole(arm: f64) -> anyhow::Result<Arc<Boundary>> {
    let w = arm / 2.0;
    let exterior = LineString::from(vec![
        (0.0, 0.0),
        (arm, 0.0),
        (arm, w),
        (w, w),
        (w, arm),
        (0.0, arm),
        (0.0, 0.0),
    ]);
    let hole = LineString::from(vec![
        (w * 0.25, w * 0.25),
        (w * 0.75, w * 0.25),
        (w * 0.75, w * 0.75),
        (w * 0.25, w * 0.75),
        (w * 0.25, w * 0.25),
    ]);
    Ok(Arc::new(Boundary::new(Polygon::new(exterior, vec![hole]))?))
}

/// Print points one per line as `index: (x, y)`.
pub fn print_points(points: &PointSet) {
    for (i, p) in points.positions().iter().enumerate() {
        println!("{i:>4}: ({:.4}, {:.4})", p.x, p.y);
    }
}

/// Print a 0/1 adjacency matrix row by row.
pub fn print_adjacency(network: &Network) {
    for row in network.adjacency_matrix() {
        let line: Vec<String> = row.iter().map(u8::to_string).collect();
        println!("{}", line.join(" "));
    }
}

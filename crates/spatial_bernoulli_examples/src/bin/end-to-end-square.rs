use spatial_bernoulli::prelude::*;
use spatial_bernoulli_examples::{init_tracing, print_adjacency, print_points, square};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Three Poisson points in the unit square, fixed seed
    let boundary = square(1.0)?;
    let points = sample_points(boundary, 3, PointPatternKind::Poisson, Some(42))?;
    print_points(&points);

    let config = NetworkConfig::new(SpatialInteraction::Standard)
        .with_base_prob(0.9)
        .with_scale(1.0)
        .with_power(-2.8)
        .with_threshold(0.5);
    let builder = NetworkBuilder::try_new(config)?;
    let network = builder.build(&points)?;

    println!();
    print_adjacency(&network);
    println!();
    println!("{}", network.summary());
    Ok(())
}

use spatial_bernoulli::prelude::*;
use spatial_bernoulli_examples::{init_tracing, l_shape_with_hole};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let boundary = l_shape_with_hole(20.0)?;
    let count = 200usize;
    let seed = Some(7);

    let poisson = sample_points(boundary.clone(), count, PointPatternKind::Poisson, seed)?;
    let halton = sample_points(boundary, count, PointPatternKind::Halton, seed)?;
    println!(
        "sampled {} poisson points and {} halton points (requested {count})",
        poisson.len(),
        halton.len()
    );

    // Same interaction for both patterns so only the geometry differs
    let builder = NetworkBuilder::try_new(
        NetworkConfig::new(SpatialInteraction::Attenuated)
            .with_scale(0.5)
            .with_threshold(0.2),
    )?;
    let a = builder.build(&poisson)?;
    let b = builder.build(&halton)?;

    let report = compare(&a, &b, "Poisson", "Halton")?;
    println!("{report}");
    Ok(())
}

use spatial_bernoulli::prelude::*;
use spatial_bernoulli_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let params = SifParams::default();
    let distances = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

    print!("{:>10}", "distance");
    for sif in SpatialInteraction::ALL {
        print!("  {:>10}", sif.name());
    }
    println!();

    for d in distances {
        print!("{d:>10.2}");
        for sif in SpatialInteraction::ALL {
            print!("  {:>10.5}", sif.evaluate(d, &params));
        }
        println!();
    }

    // Interaction names also parse from user input
    let parsed: SpatialInteraction = " Logistic ".parse()?;
    println!("\nparsed '{}' -> p(1.0) = {:.5}", parsed, parsed.evaluate(1.0, &params));
    Ok(())
}

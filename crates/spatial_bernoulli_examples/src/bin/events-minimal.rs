use spatial_bernoulli::prelude::*;
use spatial_bernoulli_examples::{init_tracing, square};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = sample_points(square(5.0)?, 40, PointPatternKind::Halton, Some(1))?;
    let config = NetworkConfig::new(SpatialInteraction::Decay).with_threshold(0.3);

    // Print edges as they are added, and collect everything else for a summary
    let mut printer = FnSink::new(|event: NetworkEvent| {
        if let NetworkEvent::EdgeAdded {
            source,
            target,
            distance,
            probability,
        } = event
        {
            println!("edge {source:>3} - {target:<3} d={distance:.3} p={probability:.3}");
        }
    });
    let mut log = VecSink::only([
        NetworkEventKind::BuildStarted,
        NetworkEventKind::SelfLoopDropped,
        NetworkEventKind::BuildFinished,
    ]);

    let network = {
        let mut sink: MultiSink<&mut dyn EventSink> = MultiSink::new();
        sink.push(&mut printer);
        sink.push(&mut log);
        build_network_with_events(&points, &config, &mut sink)?
    };

    let dropped = log
        .as_slice()
        .iter()
        .filter(|e| e.kind() == NetworkEventKind::SelfLoopDropped)
        .count();
    info!(
        "{} events recorded, {dropped} self loops dropped",
        log.as_slice().len()
    );
    println!("{}", network.summary());
    Ok(())
}

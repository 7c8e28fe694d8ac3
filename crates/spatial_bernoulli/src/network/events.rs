//! Event types and sinks for observing network construction.
//!
//! This module defines [`NetworkEvent`] and a set of sinks to emit, collect, or forward
//! events while building a network via
//! [`crate::network::builder::build_network_with_events`] or
//! [`crate::network::builder::NetworkBuilder::build_with_events`].
use crate::network::config::NetworkConfig;

/// Describes events emitted while a network is built.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    /// Emitted before distances are evaluated.
    BuildStarted {
        /// Number of nodes (points) in the network.
        node_count: usize,
        /// The configuration used.
        config: NetworkConfig,
    },

    /// Emitted for every pair whose tie probability exceeds the threshold.
    EdgeAdded {
        /// Lower node index.
        source: usize,
        /// Higher node index.
        target: usize,
        /// Euclidean distance between the two points.
        distance: f64,
        /// Tie probability that cleared the threshold.
        probability: f64,
    },

    /// Emitted when the distance-zero probability of a node exceeds the threshold and the
    /// resulting self loop is discarded.
    SelfLoopDropped {
        /// Node index.
        node: usize,
        /// Probability at distance zero.
        probability: f64,
    },

    /// Emitted when the network is complete.
    BuildFinished {
        /// Number of nodes.
        node_count: usize,
        /// Number of undirected edges.
        edge_count: usize,
    },

    /// Non-fatal warning generated during construction.
    Warning {
        /// Context string.
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`NetworkEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkEventKind {
    BuildStarted,
    EdgeAdded,
    SelfLoopDropped,
    BuildFinished,
    Warning,
}

impl NetworkEvent {
    pub fn kind(&self) -> NetworkEventKind {
        match self {
            NetworkEvent::BuildStarted { .. } => NetworkEventKind::BuildStarted,
            NetworkEvent::EdgeAdded { .. } => NetworkEventKind::EdgeAdded,
            NetworkEvent::SelfLoopDropped { .. } => NetworkEventKind::SelfLoopDropped,
            NetworkEvent::BuildFinished { .. } => NetworkEventKind::BuildFinished,
            NetworkEvent::Warning { .. } => NetworkEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`NetworkEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: NetworkEvent);

    /// Whether events of `kind` should be constructed and sent at all.
    #[inline]
    fn wants(&self, _kind: NetworkEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = NetworkEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: NetworkEvent) {}

    #[inline]
    fn wants(&self, _kind: NetworkEventKind) -> bool {
        false
    }
}

/// Borrowed sinks forward to the sink they point at.
impl<S: EventSink + ?Sized> EventSink for &mut S {
    #[inline]
    fn send(&mut self, event: NetworkEvent) {
        (**self).send(event);
    }

    #[inline]
    fn wants(&self, kind: NetworkEventKind) -> bool {
        (**self).wants(kind)
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(NetworkEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(NetworkEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(NetworkEvent),
{
    #[inline]
    fn send(&mut self, event: NetworkEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<NetworkEvent>,
    only: Option<Vec<NetworkEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only events of the listed kinds.
    pub fn only(kinds: impl IntoIterator<Item = NetworkEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<NetworkEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[NetworkEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: NetworkEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: NetworkEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: NetworkEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: NetworkEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> NetworkEvent {
        NetworkEvent::Warning {
            context: context.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(warning("b"));
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn filtered_vec_sink_drops_unwanted_kinds() {
        let mut sink = VecSink::only([NetworkEventKind::BuildFinished]);
        assert!(!sink.wants(NetworkEventKind::EdgeAdded));
        sink.send(warning("ignored"));
        sink.send(NetworkEvent::BuildFinished {
            node_count: 3,
            edge_count: 1,
        });
        let events = sink.into_inner();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), NetworkEventKind::BuildFinished);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!EventSink::wants(&(), NetworkEventKind::Warning));
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning("ctx"));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
        matches!(multi.sinks[0].as_slice()[0], NetworkEvent::Warning { .. })
            .then_some(())
            .expect("event captured");
    }

    #[test]
    fn multi_sink_wants_union_of_children() {
        let multi = MultiSink::with_sinks(vec![
            VecSink::only([NetworkEventKind::EdgeAdded]),
            VecSink::only([NetworkEventKind::Warning]),
        ]);
        assert!(multi.wants(NetworkEventKind::EdgeAdded));
        assert!(multi.wants(NetworkEventKind::Warning));
        assert!(!multi.wants(NetworkEventKind::BuildStarted));
    }

    #[test]
    fn multi_sink_over_borrowed_sinks_of_different_types() {
        let mut seen = 0;
        let mut counter = FnSink::new(|_event| seen += 1);
        let mut finished = VecSink::only([NetworkEventKind::BuildFinished]);
        {
            let mut multi: MultiSink<&mut dyn EventSink> = MultiSink::new();
            multi.push(&mut counter);
            multi.push(&mut finished);
            multi.send(warning("w"));
            multi.send(NetworkEvent::BuildFinished {
                node_count: 1,
                edge_count: 0,
            });
        }
        drop(counter);
        assert_eq!(seen, 2);
        assert_eq!(finished.len(), 1);
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send_many([warning("a"), warning("b")]);
        assert_eq!(count, 2);
    }
}

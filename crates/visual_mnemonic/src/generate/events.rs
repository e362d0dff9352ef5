//! Event types and sinks for observing generation runs.
//!
//! [`crate::generate::runner::Generator::generate_with_events`] emits, in order:
//! `Started`, `PlanPrepared`, `IntensityComputed`, `WalkFinished`, `Finished`.
use glam::UVec2;

use crate::canvas::Canvas;
use crate::seed::DerivedSeed;
use crate::walk::WalkStats;

/// Describes events emitted during generation.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Inputs were validated and the run is starting.
    Started {
        /// Canvas being generated.
        canvas: Canvas,
    },

    /// All RNG draws are done.
    PlanPrepared {
        /// Normalized seed.
        seed: DerivedSeed,
        /// Octave counts of every layer, ascending.
        layer_octaves: Vec<usize>,
        /// Number of summed layers.
        depth: usize,
        /// Walk start.
        start: UVec2,
        /// Selected palette name.
        palette: String,
    },

    /// The intensity buffer was filled.
    IntensityComputed {
        /// Smallest intensity.
        min: u8,
        /// Largest intensity.
        max: u8,
    },

    /// The similarity walk visited every pixel.
    WalkFinished {
        /// Walk counters.
        stats: WalkStats,
    },

    /// Pixels were colored.
    Finished {
        /// Canvas that was generated.
        canvas: Canvas,
        /// Palette that was applied.
        palette: String,
    },
}

/// Discriminant of [`GenerationEvent`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenerationEventKind {
    Started,
    PlanPrepared,
    IntensityComputed,
    WalkFinished,
    Finished,
}

impl GenerationEvent {
    pub fn kind(&self) -> GenerationEventKind {
        match self {
            GenerationEvent::Started { .. } => GenerationEventKind::Started,
            GenerationEvent::PlanPrepared { .. } => GenerationEventKind::PlanPrepared,
            GenerationEvent::IntensityComputed { .. } => GenerationEventKind::IntensityComputed,
            GenerationEvent::WalkFinished { .. } => GenerationEventKind::WalkFinished,
            GenerationEvent::Finished { .. } => GenerationEventKind::Finished,
        }
    }
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Whether events of `kind` should be built at all.
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
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
    fn send(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}

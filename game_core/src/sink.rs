//! Event Sink
//!
//! Audio and render collaborators receive tick events through [`EventSink`].
//! Sinks cannot fail back into the simulation: a collaborator that has no
//! sound device simply does nothing.

use crate::GameEvent;

/// Capability interface for consumers of [`GameEvent`]s
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

/// Sink that drops every event (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Recording sink
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// Short beep for an audio collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub freq_hz: f32,
    pub duration_ms: u32,
    pub volume: f32,
}

impl SoundCue {
    /// The beep that accompanies an event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit(_) => Some(Self {
                freq_hz: 620.0,
                duration_ms: 70,
                volume: 0.22,
            }),
            GameEvent::WallBounce => Some(Self {
                freq_hz: 440.0,
                duration_ms: 60,
                volume: 0.18,
            }),
            GameEvent::Goal(_) => Some(Self {
                freq_hz: 300.0,
                duration_ms: 120,
                volume: 0.28,
            }),
            GameEvent::Win(_) => None,
        }
    }
}

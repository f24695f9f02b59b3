use anyhow::Result;
use tractor_core::{AudioCue, Intent};

/// Transport collaborator. Implementations deliver inbound envelopes to a
/// single callback in delivery order; the session only needs the outbound
/// half. On a room-code change the owner must disconnect and re-establish
/// before resuming.
pub trait Connection {
    fn send(&mut self, intent: &Intent) -> Result<()>;
    fn disconnect(&mut self);
}

/// Audio collaborator. Gain is the already-curved value from the core's
/// volume table, never a raw 0-3 level.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
    fn set_gain(&mut self, gain: f32);
}

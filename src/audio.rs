//! Sound event vocabulary and the playback boundary
//!
//! The simulation raises [`SoundEffect`] values on its per-tick event queue;
//! a platform layer drains them into an [`AudioSink`]. Playback is
//! fire-and-forget: nothing in the simulation consumes a result.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile fired
    Fire,
    /// A head kill: chain-kill on a sub-chain leader, or a detached head
    Kill,
    /// Player lost a life
    PlayerHit,
    /// Level cleared, or an extra life granted
    LevelUp,
    /// Lives exhausted, round over
    GameOver,
}

/// Playback boundary consumed by the platform layer
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that logs each event; stands in for real playback on headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sound: {effect:?}");
    }
}

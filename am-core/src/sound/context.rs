//! Audio context seam
//!
//! [`SoundEffects`](super::SoundEffects) only talks to these traits, so tests
//! can count context creations and capture tones without a sound card.

use super::Tone;
use crate::error::AudioError;
use std::sync::Arc;

/// Whether the context is currently producing sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Running,
    Suspended,
}

/// Shared synthesis context, created once per process
pub trait AudioContext: Send + Sync {
    fn state(&self) -> ContextState;

    /// Try to move from suspended to running
    fn resume(&self) -> Result<(), AudioError>;

    /// Start one tone now
    fn play_tone(&self, tone: &Tone) -> Result<(), AudioError>;
}

/// Creates the shared context on first use
pub trait AudioContextFactory: Send + Sync {
    fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError>;
}

/// Factory for environments where audio is switched off
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAudioFactory;

impl AudioContextFactory for DisabledAudioFactory {
    fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError> {
        Err(AudioError::Disabled)
    }
}

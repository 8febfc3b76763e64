//! Procedural sound effects
//!
//! Every cue is synthesized from oscillator tones; there are no audio assets.
//! A [`SoundKind`] maps to a fixed list of [`ToneEvent`]s. Tones with no delay
//! start inside [`SoundEffects::play`]; later ones go through the
//! [`Scheduler`] and the call returns immediately.
//!
//! | kind | tones (Hz, s, wave, peak, delay ms) |
//! |------|-------------------------------------|
//! | click | 800/0.03/square/0.03 @0 |
//! | open | 440/0.08/saw/0.05 @0, 660/0.08/square/0.04 @60 |
//! | close | 660/0.06/square/0.04 @0, 330/0.10/saw/0.03 @60 |
//! | minimize | 520/0.05/square/0.03 @0, 360/0.06/square/0.02 @50 |
//! | maximize | 360/0.05/square/0.03 @0, 520/0.06/square/0.02 @50 |
//! | error | 200/0.12/saw/0.06 @0, 160/0.15/saw/0.06 @150 |
//! | navigate | 600/0.06/square/0.03 @0, 900/0.05/square/0.02 @40 |
//! | startup | C4 E4 G4 C5 @0/120/240/360, each saw 1.0s/0.06 + square 1.2s/0.03 |
//!
//! Sound is best-effort: a disabled setting, a missing device or a failing
//! stream all end in silence, never in an error for the caller.

pub mod context;
pub mod cpal_backend;
pub mod synth;

pub use context::{AudioContext, AudioContextFactory, ContextState, DisabledAudioFactory};
pub use cpal_backend::{CpalContext, CpalContextFactory};

use crate::scheduler::Scheduler;
use crate::settings::SettingsStore;
use parking_lot::Mutex;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// DATA MODELS
// ============================================================================

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single decaying tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f32,
    /// Length in seconds
    pub duration: f32,
    pub waveform: Waveform,
    /// Starting gain
    pub peak: f32,
}

impl Tone {
    pub const fn new(frequency: f32, duration: f32, waveform: Waveform, peak: f32) -> Self {
        Self {
            frequency,
            duration,
            waveform,
            peak,
        }
    }
}

/// A tone and when it starts, relative to the `play` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    pub delay: Duration,
    pub tone: Tone,
}

impl ToneEvent {
    const fn at(delay_ms: u64, tone: Tone) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            tone,
        }
    }
}

/// Interaction categories with a synthesized cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Click,
    Open,
    Close,
    Minimize,
    Maximize,
    Error,
    Startup,
    Navigate,
}

/// C4, E4, G4, C5 with their start offsets in ms
const STARTUP_ARPEGGIO: [(f32, u64); 4] = [(261.63, 0), (329.63, 120), (392.00, 240), (523.25, 360)];

impl SoundKind {
    pub const ALL: [SoundKind; 8] = [
        SoundKind::Click,
        SoundKind::Open,
        SoundKind::Close,
        SoundKind::Minimize,
        SoundKind::Maximize,
        SoundKind::Error,
        SoundKind::Startup,
        SoundKind::Navigate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundKind::Click => "click",
            SoundKind::Open => "open",
            SoundKind::Close => "close",
            SoundKind::Minimize => "minimize",
            SoundKind::Maximize => "maximize",
            SoundKind::Error => "error",
            SoundKind::Startup => "startup",
            SoundKind::Navigate => "navigate",
        }
    }

    /// The tone sequence for this kind
    pub fn cue(&self) -> Vec<ToneEvent> {
        use Waveform::{Sawtooth, Square};

        match self {
            SoundKind::Click => vec![ToneEvent::at(0, Tone::new(800.0, 0.03, Square, 0.03))],
            SoundKind::Open => vec![
                ToneEvent::at(0, Tone::new(440.0, 0.08, Sawtooth, 0.05)),
                ToneEvent::at(60, Tone::new(660.0, 0.08, Square, 0.04)),
            ],
            SoundKind::Close => vec![
                ToneEvent::at(0, Tone::new(660.0, 0.06, Square, 0.04)),
                ToneEvent::at(60, Tone::new(330.0, 0.10, Sawtooth, 0.03)),
            ],
            SoundKind::Minimize => vec![
                ToneEvent::at(0, Tone::new(520.0, 0.05, Square, 0.03)),
                ToneEvent::at(50, Tone::new(360.0, 0.06, Square, 0.02)),
            ],
            SoundKind::Maximize => vec![
                ToneEvent::at(0, Tone::new(360.0, 0.05, Square, 0.03)),
                ToneEvent::at(50, Tone::new(520.0, 0.06, Square, 0.02)),
            ],
            SoundKind::Error => vec![
                ToneEvent::at(0, Tone::new(200.0, 0.12, Sawtooth, 0.06)),
                ToneEvent::at(150, Tone::new(160.0, 0.15, Sawtooth, 0.06)),
            ],
            SoundKind::Navigate => vec![
                ToneEvent::at(0, Tone::new(600.0, 0.06, Square, 0.03)),
                ToneEvent::at(40, Tone::new(900.0, 0.05, Square, 0.02)),
            ],
            SoundKind::Startup => STARTUP_ARPEGGIO
                .iter()
                .flat_map(|&(freq, delay)| {
                    [
                        ToneEvent::at(delay, Tone::new(freq, 1.0, Sawtooth, 0.06)),
                        ToneEvent::at(delay, Tone::new(freq, 1.2, Square, 0.03)),
                    ]
                })
                .collect(),
        }
    }
}

impl fmt::Display for SoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown sound kind: {}", s))
    }
}

// ============================================================================
// SOUND EFFECTS
// ============================================================================

/// Plays cues through a lazily created, shared [`AudioContext`]
pub struct SoundEffects {
    settings: Arc<SettingsStore>,
    factory: Box<dyn AudioContextFactory>,
    scheduler: Arc<dyn Scheduler>,
    context: Mutex<Option<Arc<dyn AudioContext>>>,
    unavailable_logged: AtomicBool,
}

impl SoundEffects {
    pub fn new(
        settings: Arc<SettingsStore>,
        factory: Box<dyn AudioContextFactory>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            settings,
            factory,
            scheduler,
            context: Mutex::new(None),
            unavailable_logged: AtomicBool::new(false),
        }
    }

    /// Play the cue for `kind`, gated on the sound setting
    pub fn play(&self, kind: SoundKind) {
        if !self.settings.sound_enabled() {
            return;
        }

        let Some(context) = self.context() else {
            return;
        };

        if context.state() == ContextState::Suspended {
            if let Err(e) = context.resume() {
                ::log::debug!("Audio context resume failed: {}", e);
            }
        }

        for event in kind.cue() {
            if event.delay.is_zero() {
                Self::start_tone(context.as_ref(), &event.tone);
            } else {
                let context = context.clone();
                self.scheduler.schedule(
                    event.delay,
                    Box::new(move || Self::start_tone(context.as_ref(), &event.tone)),
                );
            }
        }
    }

    /// Play by name; unknown names are ignored
    pub fn play_named(&self, name: &str) {
        match name.parse::<SoundKind>() {
            Ok(kind) => self.play(kind),
            Err(e) => ::log::debug!("Ignoring sound request: {}", e),
        }
    }

    /// Whether the shared context has been created
    pub fn has_context(&self) -> bool {
        self.context.lock().is_some()
    }

    fn context(&self) -> Option<Arc<dyn AudioContext>> {
        let mut slot = self.context.lock();
        if slot.is_none() {
            match self.factory.create() {
                Ok(context) => *slot = Some(context),
                Err(e) => {
                    if !self.unavailable_logged.swap(true, Ordering::Relaxed) {
                        ::log::warn!("Sound effects unavailable: {}", e);
                    } else {
                        ::log::debug!("Sound effects unavailable: {}", e);
                    }
                    return None;
                }
            }
        }
        slot.clone()
    }

    fn start_tone(context: &dyn AudioContext, tone: &Tone) {
        if let Err(e) = context.play_tone(tone) {
            ::log::debug!("Tone {} Hz dropped: {}", tone.frequency, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::scheduler::ManualScheduler;
    use crate::settings::PersistedSettings;
    use crate::storage::MemoryStorage;
    use std::sync::atomic::AtomicUsize;

    /// Context that records tones with the virtual time they started
    struct RecordingContext {
        clock: Arc<ManualScheduler>,
        state: Mutex<ContextState>,
        resume_fails: bool,
        resumes: AtomicUsize,
        tones: Mutex<Vec<(Duration, Tone)>>,
    }

    impl AudioContext for RecordingContext {
        fn state(&self) -> ContextState {
            *self.state.lock()
        }

        fn resume(&self) -> Result<(), AudioError> {
            self.resumes.fetch_add(1, Ordering::SeqCst);
            if self.resume_fails {
                return Err(AudioError::Resume("blocked".into()));
            }
            *self.state.lock() = ContextState::Running;
            Ok(())
        }

        fn play_tone(&self, tone: &Tone) -> Result<(), AudioError> {
            self.tones.lock().push((self.clock.now(), *tone));
            Ok(())
        }
    }

    struct SpyFactory {
        context: Arc<RecordingContext>,
        creations: Arc<AtomicUsize>,
        fail: bool,
    }

    impl AudioContextFactory for SpyFactory {
        fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError> {
            self.creations.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AudioError::NoDevice);
            }
            Ok(self.context.clone())
        }
    }

    struct Harness {
        settings: Arc<SettingsStore>,
        scheduler: Arc<ManualScheduler>,
        context: Arc<RecordingContext>,
        creations: Arc<AtomicUsize>,
        sound: SoundEffects,
    }

    fn harness(initial: ContextState, resume_fails: bool, fail: bool) -> Harness {
        let settings = Arc::new(SettingsStore::new(Box::new(PersistedSettings::new(Arc::new(
            MemoryStorage::new(),
        )))));
        let scheduler = Arc::new(ManualScheduler::new());
        let context = Arc::new(RecordingContext {
            clock: scheduler.clone(),
            state: Mutex::new(initial),
            resume_fails,
            resumes: AtomicUsize::new(0),
            tones: Mutex::new(Vec::new()),
        });
        let creations = Arc::new(AtomicUsize::new(0));
        let factory = SpyFactory {
            context: context.clone(),
            creations: creations.clone(),
            fail,
        };
        let sound = SoundEffects::new(settings.clone(), Box::new(factory), scheduler.clone());
        Harness {
            settings,
            scheduler,
            context,
            creations,
            sound,
        }
    }

    #[test]
    fn test_every_kind_has_a_cue() {
        for kind in SoundKind::ALL {
            assert!(!kind.cue().is_empty(), "{} has no tones", kind);
            assert_eq!(kind.as_str().parse::<SoundKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_cue_table() {
        assert_eq!(
            SoundKind::Open.cue(),
            vec![
                ToneEvent::at(0, Tone::new(440.0, 0.08, Waveform::Sawtooth, 0.05)),
                ToneEvent::at(60, Tone::new(660.0, 0.08, Waveform::Square, 0.04)),
            ]
        );
        assert_eq!(SoundKind::Error.cue()[1].delay, Duration::from_millis(150));
        assert_eq!(SoundKind::Navigate.cue()[1].tone.frequency, 900.0);

        let startup = SoundKind::Startup.cue();
        assert_eq!(startup.len(), 8);
        assert_eq!(startup[6].delay, Duration::from_millis(360));
        assert_eq!(startup[6].tone, Tone::new(523.25, 1.0, Waveform::Sawtooth, 0.06));
        assert_eq!(startup[7].tone, Tone::new(523.25, 1.2, Waveform::Square, 0.03));
    }

    #[test]
    fn test_disabled_sound_never_touches_audio() {
        let h = harness(ContextState::Running, false, false);
        h.settings.toggle_sound();

        for kind in SoundKind::ALL {
            h.sound.play(kind);
        }
        h.scheduler.run_until_idle();

        assert_eq!(h.creations.load(Ordering::SeqCst), 0);
        assert!(!h.sound.has_context());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_context_created_once() {
        let h = harness(ContextState::Running, false, false);
        h.sound.play(SoundKind::Click);
        h.sound.play(SoundKind::Navigate);
        h.sound.play(SoundKind::Close);
        assert_eq!(h.creations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deferred_tone_timing() {
        let h = harness(ContextState::Running, false, false);
        h.sound.play(SoundKind::Open);

        assert_eq!(h.context.tones.lock().len(), 1);
        h.scheduler.advance_ms(59);
        assert_eq!(h.context.tones.lock().len(), 1);
        h.scheduler.advance_ms(1);

        let tones = h.context.tones.lock();
        assert_eq!(tones.len(), 2);
        assert_eq!(tones[0].0, Duration::ZERO);
        assert_eq!(tones[1].0, Duration::from_millis(60));
        assert_eq!(tones[1].1.frequency, 660.0);
    }

    #[test]
    fn test_startup_arpeggio_schedule() {
        let h = harness(ContextState::Running, false, false);
        h.sound.play(SoundKind::Startup);
        h.scheduler.run_until_idle();

        let times: Vec<u128> = h.context.tones.lock().iter().map(|(t, _)| t.as_millis()).collect();
        assert_eq!(times, vec![0, 0, 120, 120, 240, 240, 360, 360]);
    }

    #[test]
    fn test_sequence_completes_after_disable() {
        let h = harness(ContextState::Running, false, false);
        h.sound.play(SoundKind::Error);
        h.settings.toggle_sound();
        h.scheduler.run_until_idle();
        assert_eq!(h.context.tones.lock().len(), 2);
    }

    #[test]
    fn test_suspended_context_resumed() {
        let h = harness(ContextState::Suspended, false, false);
        h.sound.play(SoundKind::Click);
        assert_eq!(h.context.resumes.load(Ordering::SeqCst), 1);
        assert_eq!(h.context.state(), ContextState::Running);

        h.sound.play(SoundKind::Click);
        assert_eq!(h.context.resumes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_resume_still_schedules() {
        let h = harness(ContextState::Suspended, true, false);
        h.sound.play(SoundKind::Click);
        assert_eq!(h.context.tones.lock().len(), 1);
    }

    #[test]
    fn test_unavailable_audio_is_silent() {
        let h = harness(ContextState::Running, false, true);
        h.sound.play(SoundKind::Open);
        h.sound.play(SoundKind::Open);
        assert!(!h.sound.has_context());
        assert_eq!(h.scheduler.pending(), 0);
        // Creation is retried on the next request
        assert_eq!(h.creations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let h = harness(ContextState::Running, false, false);
        h.sound.play_named("explode");
        assert_eq!(h.creations.load(Ordering::SeqCst), 0);
        h.sound.play_named("click");
        assert_eq!(h.context.tones.lock().len(), 1);
    }

    #[test]
    fn test_disabled_factory() {
        assert!(matches!(DisabledAudioFactory.create(), Err(AudioError::Disabled)));
    }
}

//! Boot sequence shown on first launch
//!
//! The whole timeline is put on the scheduler up front; progress is reported as
//! [`BootEvent`]s on a channel so the caller can draw at its own pace. The last
//! step marks the boot as seen, so later launches skip it.

use am_core::{Scheduler, SettingsStore, SoundEffects, SoundKind};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

pub const BOOT_MESSAGES: [&str; 6] = [
    "INITIALIZING SYSTEM...",
    "LOADING NEURAL INTERFACE...",
    "ESTABLISHING SECURE LINK...",
    "MOUNTING CONTROL PANEL...",
    "CALIBRATING DISPLAY MATRIX...",
    "SYSTEM READY.",
];

pub const BOOT_NAME: &str = "Alex Martel";
pub const BOOT_TAGLINE: &str = "developer · architect · flow engineer";

pub const STARTUP_CUE_AT: Duration = Duration::from_millis(300);
const FIRST_MESSAGE_MS: u64 = 200;
const MESSAGE_INTERVAL_MS: u64 = 350;
/// Fade between the exit starting and the boot counting as complete
pub const EXIT_FADE: Duration = Duration::from_millis(600);

/// When boot message `index` appears
pub fn message_at(index: usize) -> Duration {
    Duration::from_millis(FIRST_MESSAGE_MS + index as u64 * MESSAGE_INTERVAL_MS)
}

/// Name banner, shortly after the last message slot
pub fn name_at() -> Duration {
    message_at(BOOT_MESSAGES.len()) + Duration::from_millis(200)
}

pub fn exit_at() -> Duration {
    message_at(BOOT_MESSAGES.len()) + Duration::from_millis(1200)
}

pub fn complete_at() -> Duration {
    exit_at() + EXIT_FADE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootEvent {
    Message(&'static str),
    Name,
    Exit,
    Complete,
}

pub struct BootSequence {
    events: Receiver<BootEvent>,
}

impl BootSequence {
    /// Schedule the whole sequence
    pub fn start(scheduler: &dyn Scheduler, sound: Arc<SoundEffects>, settings: Arc<SettingsStore>) -> Self {
        let (tx, rx) = unbounded();
        ::log::debug!("Boot sequence started");

        scheduler.schedule(STARTUP_CUE_AT, Box::new(move || sound.play(SoundKind::Startup)));

        for (i, message) in BOOT_MESSAGES.iter().copied().enumerate() {
            Self::emit(scheduler, &tx, message_at(i), BootEvent::Message(message));
        }
        Self::emit(scheduler, &tx, name_at(), BootEvent::Name);
        Self::emit(scheduler, &tx, exit_at(), BootEvent::Exit);

        scheduler.schedule(
            complete_at(),
            Box::new(move || {
                settings.set_has_seen_boot(true);
                ::log::info!("Boot sequence complete");
                let _ = tx.send(BootEvent::Complete);
            }),
        );

        Self { events: rx }
    }

    fn emit(scheduler: &dyn Scheduler, tx: &Sender<BootEvent>, at: Duration, event: BootEvent) {
        let tx = tx.clone();
        scheduler.schedule(
            at,
            Box::new(move || {
                let _ = tx.send(event);
            }),
        );
    }

    pub fn events(&self) -> &Receiver<BootEvent> {
        &self.events
    }

    /// Text drawn for an event, if any
    pub fn render(event: &BootEvent) -> Option<String> {
        match event {
            BootEvent::Message(message) => Some(format!("  {}", message)),
            BootEvent::Name => Some(format!("\n  {}\n  {}\n", BOOT_NAME.to_uppercase(), BOOT_TAGLINE)),
            BootEvent::Exit | BootEvent::Complete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_core::{
        AudioContext, AudioContextFactory, AudioError, ManualScheduler, MemoryStorage, PersistedSettings,
        StorageBackend,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFactory(Arc<AtomicUsize>);

    impl AudioContextFactory for CountingFactory {
        fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AudioError::Disabled)
        }
    }

    fn setup() -> (Arc<ManualScheduler>, Arc<SettingsStore>, Arc<SoundEffects>, Arc<AtomicUsize>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        let settings = Arc::new(SettingsStore::new(Box::new(PersistedSettings::new(storage))));
        let cues = Arc::new(AtomicUsize::new(0));
        let sound = Arc::new(SoundEffects::new(
            settings.clone(),
            Box::new(CountingFactory(cues.clone())),
            scheduler.clone(),
        ));
        (scheduler, settings, sound, cues)
    }

    #[test]
    fn test_timeline() {
        assert_eq!(message_at(0), Duration::from_millis(200));
        assert_eq!(message_at(5), Duration::from_millis(1950));
        assert_eq!(name_at(), Duration::from_millis(2500));
        assert_eq!(exit_at(), Duration::from_millis(3500));
        assert_eq!(complete_at(), Duration::from_millis(4100));
    }

    #[test]
    fn test_events_in_order_and_boot_marked_seen() {
        let (scheduler, settings, sound, cues) = setup();
        let boot = BootSequence::start(scheduler.as_ref(), sound, settings.clone());

        scheduler.advance_ms(299);
        assert_eq!(cues.load(Ordering::SeqCst), 0);
        scheduler.advance_ms(1);
        assert_eq!(cues.load(Ordering::SeqCst), 1);

        scheduler.advance(exit_at());
        assert!(!settings.state().has_seen_boot);

        scheduler.advance(EXIT_FADE);
        assert!(settings.state().has_seen_boot);

        let events: Vec<BootEvent> = boot.events().try_iter().collect();
        assert_eq!(events.len(), BOOT_MESSAGES.len() + 3);
        assert_eq!(events[0], BootEvent::Message("INITIALIZING SYSTEM..."));
        assert_eq!(events[5], BootEvent::Message("SYSTEM READY."));
        assert_eq!(&events[6..], &[BootEvent::Name, BootEvent::Exit, BootEvent::Complete]);
    }

    #[test]
    fn test_muted_boot_is_silent() {
        let (scheduler, settings, sound, cues) = setup();
        settings.toggle_sound();
        let _boot = BootSequence::start(scheduler.as_ref(), sound, settings);
        scheduler.run_until_idle();
        assert_eq!(cues.load(Ordering::SeqCst), 0);
    }
}

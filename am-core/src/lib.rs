//! # AM Core
//!
//! Application state and feedback layer for the AM desktop. Holds the two
//! process-wide stores, the theme projection onto the presentation surface, and
//! the procedural sound effects. Nothing in here knows how panels are drawn.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                        USER INTERACTION (shell / panels)                    │
//! ├──────────────────────────┬──────────────────────────┬───────────────────────┤
//! │  sidebar / drill-down    │  theme control / boot    │  any collaborator     │
//! │  set_active_panel()      │  set_color_scheme()      │  sound.play(kind)     │
//! └────────────┬─────────────┴────────────┬─────────────┴───────────┬───────────┘
//!              ▼                          ▼                         ▼
//! ┌────────────────────────┐  ┌────────────────────────┐  ┌─────────────────────┐
//! │ NavigationStore        │  │ SettingsStore          │  │ SoundEffects        │
//! │  active_panel          │  │  sound_enabled ────────┼─▶│  gate (sync check)  │
//! │  active_project_id     │  │  has_seen_boot         │  │  lazy AudioContext  │
//! │  (transient)           │  │  color_scheme, ui_scale│  │  Scheduler for the  │
//! └───────────┬────────────┘  │  ─▶ SettingsRepository │  │  delayed tones      │
//!             │               └───────────┬────────────┘  └─────────────────────┘
//!             │ listeners                 │ listeners
//!             ▼                           ▼
//!     MainPanel (am-widgets)      ThemeApplicator ──▶ PresentationSurface
//!                                                     data-theme / data-scale
//! ```
//!
//! ## Key Components
//!
//! - [`SettingsStore`] - persisted preferences, rehydrated through a [`SettingsRepository`]
//! - [`NavigationStore`] - active panel and optional project drill-down
//! - [`StorageBackend`] - text key/value storage ([`MemoryStorage`], [`FileStorage`])
//! - [`Scheduler`] - deferred tasks ([`TimerScheduler`], [`ManualScheduler`] for tests)
//! - [`ThemeApplicator`] - pushes theme attributes whenever scheme or scale change
//! - [`SoundEffects`] - oscillator-generated cues keyed by [`SoundKind`]
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use am_core::*;
//!
//! let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
//! let settings = Arc::new(SettingsStore::new(Box::new(PersistedSettings::new(storage))));
//! let navigation = Arc::new(NavigationStore::new());
//!
//! let surface = Arc::new(DocumentAttributes::new());
//! let _theme = ThemeApplicator::attach(&settings, surface.clone());
//!
//! let scheduler: Arc<dyn Scheduler> = Arc::new(TimerScheduler::new());
//! let sound = SoundEffects::new(settings.clone(), Box::new(CpalContextFactory), scheduler);
//!
//! sound.play(SoundKind::Navigate);
//! navigation.set_active_panel("portfolio");
//! settings.set_color_scheme(ColorScheme::Matrix);
//! assert_eq!(surface.get(THEME_ATTRIBUTE).as_deref(), Some("matrix"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Stores are injected** - no ambient globals; the shell builds one of each
//! 2. **Synchronous fan-out** - state, then persistence, then listeners in order
//! 3. **Nothing here is fatal** - storage and audio failures degrade to defaults or silence

pub mod error;
pub mod navigation;
pub mod observer;
pub mod scheduler;
pub mod settings;
pub mod sound;
pub mod storage;
pub mod theme;

// Re-exports
pub use error::{AudioError, SettingsError, StorageError, StorageResult};
pub use navigation::{NavigationState, NavigationStore, DEFAULT_PANEL};
pub use observer::{ListenerId, Listeners};
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerScheduler};
pub use settings::{
    ColorScheme, PersistedSettings, SettingsRepository, SettingsState, SettingsStore, UiScale,
    SETTINGS_KEY,
};
pub use sound::{
    AudioContext, AudioContextFactory, ContextState, CpalContextFactory, DisabledAudioFactory,
    SoundEffects, SoundKind, Tone, ToneEvent, Waveform,
};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, UnavailableStorage};
pub use theme::{
    DocumentAttributes, PresentationSurface, ThemeApplicator, SCALE_ATTRIBUTE, THEME_ATTRIBUTE,
};

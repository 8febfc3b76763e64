//! Settings store - persisted presentation preferences
//!
//! Holds sound on/off, the first-boot flag, the color scheme and the UI scale.
//! Every mutation is applied in memory, written through the injected
//! [`SettingsRepository`], then broadcast to listeners, before returning.

use crate::error::SettingsError;
use crate::observer::{ListenerId, Listeners};
use crate::storage::StorageBackend;
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Storage key for the settings record
pub const SETTINGS_KEY: &str = "am-settings";

/// Version written into the persisted envelope
const PERSIST_VERSION: u32 = 0;

// ============================================================================
// COLOR SCHEME
// ============================================================================

/// Named palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Baseline palette, encoded as "no theme attribute"
    #[default]
    NeonCyber,
    AmberTerminal,
    Matrix,
    Vaporwave,
    Arctic,
    Infrared,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::NeonCyber,
        ColorScheme::AmberTerminal,
        ColorScheme::Matrix,
        ColorScheme::Vaporwave,
        ColorScheme::Arctic,
        ColorScheme::Infrared,
    ];

    /// Wire tag, also used as the theme attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::NeonCyber => "neon-cyber",
            ColorScheme::AmberTerminal => "amber-terminal",
            ColorScheme::Matrix => "matrix",
            ColorScheme::Vaporwave => "vaporwave",
            ColorScheme::Arctic => "arctic",
            ColorScheme::Infrared => "infrared",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::NeonCyber => "Neon Cyber",
            ColorScheme::AmberTerminal => "Amber Terminal",
            ColorScheme::Matrix => "Matrix",
            ColorScheme::Vaporwave => "Vaporwave",
            ColorScheme::Arctic => "Arctic",
            ColorScheme::Infrared => "Infrared",
        }
    }

    pub fn is_baseline(&self) -> bool {
        *self == ColorScheme::NeonCyber
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownColorScheme(s.to_string()))
    }
}

// ============================================================================
// UI SCALE
// ============================================================================

/// Global zoom multiplier, serialized as its number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiScale {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
}

impl UiScale {
    pub const ALL: [UiScale; 5] = [UiScale::Xs, UiScale::S, UiScale::M, UiScale::L, UiScale::Xl];

    pub fn value(&self) -> f64 {
        match self {
            UiScale::Xs => 0.8,
            UiScale::S => 0.9,
            UiScale::M => 1.0,
            UiScale::L => 1.1,
            UiScale::Xl => 1.2,
        }
    }

    /// Map a number onto the closed set
    pub fn from_value(value: f64) -> Result<Self, SettingsError> {
        UiScale::ALL
            .into_iter()
            .find(|scale| (scale.value() - value).abs() < 1e-9)
            .ok_or(SettingsError::UnsupportedScale(value))
    }

    /// Number as written to the scale attribute ("1", not "1.0")
    pub fn attr_value(&self) -> &'static str {
        match self {
            UiScale::Xs => "0.8",
            UiScale::S => "0.9",
            UiScale::M => "1",
            UiScale::L => "1.1",
            UiScale::Xl => "1.2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiScale::Xs => "XS",
            UiScale::S => "S",
            UiScale::M => "M",
            UiScale::L => "L",
            UiScale::Xl => "XL",
        }
    }
}

impl fmt::Display for UiScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr_value())
    }
}

impl FromStr for UiScale {
    type Err = SettingsError;

    /// Accepts either the number ("1.1") or the label ("L")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(scale) = UiScale::ALL.into_iter().find(|scale| scale.label().eq_ignore_ascii_case(s)) {
            return Ok(scale);
        }
        let value: f64 = s.parse().map_err(|_| SettingsError::UnsupportedScale(f64::NAN))?;
        UiScale::from_value(value)
    }
}

impl Serialize for UiScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for UiScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        UiScale::from_value(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SETTINGS STATE
// ============================================================================

/// Snapshot of all user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    pub sound_enabled: bool,
    pub has_seen_boot: bool,
    pub color_scheme: ColorScheme,
    pub ui_scale: UiScale,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            has_seen_boot: false,
            color_scheme: ColorScheme::NeonCyber,
            ui_scale: UiScale::M,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    state: &'a SettingsState,
    version: u32,
}

impl SettingsState {
    /// Serialize into the persisted envelope `{"state": {..}, "version": 0}`
    pub fn to_persisted(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Envelope {
            state: self,
            version: PERSIST_VERSION,
        })
    }

    /// Decode a persisted record, field by field
    ///
    /// Accepts the envelope or a bare settings object. Unparseable text yields
    /// the defaults; each missing or invalid field keeps its default.
    pub fn from_persisted(text: &str) -> Self {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                ::log::warn!("Failed to parse persisted settings: {}, using defaults", e);
                return Self::default();
            }
        };

        let fields = match value.get("state") {
            Some(state) if state.is_object() => state,
            _ => &value,
        };
        let Some(fields) = fields.as_object() else {
            ::log::warn!("Persisted settings are not an object, using defaults");
            return Self::default();
        };

        let mut state = Self::default();
        if let Some(v) = fields.get("soundEnabled").and_then(Value::as_bool) {
            state.sound_enabled = v;
        }
        if let Some(v) = fields.get("hasSeenBoot").and_then(Value::as_bool) {
            state.has_seen_boot = v;
        }
        match fields.get("colorScheme").and_then(Value::as_str).map(str::parse::<ColorScheme>) {
            Some(Ok(scheme)) => state.color_scheme = scheme,
            Some(Err(e)) => ::log::warn!("Ignoring persisted colorScheme: {}", e),
            None => {}
        }
        match fields.get("uiScale").and_then(Value::as_f64).map(UiScale::from_value) {
            Some(Ok(scale)) => state.ui_scale = scale,
            Some(Err(e)) => ::log::warn!("Ignoring persisted uiScale: {}", e),
            None => {}
        }
        state
    }
}

// ============================================================================
// REPOSITORY
// ============================================================================

/// Where the settings store loads from and saves to
///
/// Both operations are infallible: implementations log and fall back.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> SettingsState;
    fn save(&self, state: &SettingsState);
}

/// Settings persisted as JSON text in a [`StorageBackend`]
pub struct PersistedSettings {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl PersistedSettings {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, SETTINGS_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }
}

impl SettingsRepository for PersistedSettings {
    fn load(&self) -> SettingsState {
        match self.backend.read(&self.key) {
            Ok(Some(text)) => {
                let state = SettingsState::from_persisted(&text);
                ::log::info!("Loaded settings from {}", self.backend.name());
                state
            }
            Ok(None) => {
                ::log::info!("No saved settings in {}, starting fresh", self.backend.name());
                SettingsState::default()
            }
            Err(e) => {
                ::log::warn!("Failed to read settings: {}, starting fresh", e);
                SettingsState::default()
            }
        }
    }

    fn save(&self, state: &SettingsState) {
        let text = match state.to_persisted() {
            Ok(text) => text,
            Err(e) => {
                ::log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(&self.key, &text) {
            ::log::warn!("Failed to save settings: {}", e);
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Process-wide settings store
pub struct SettingsStore {
    state: RwLock<SettingsState>,
    repository: Box<dyn SettingsRepository>,
    listeners: Listeners<SettingsState>,
}

impl SettingsStore {
    /// Create the store, rehydrating from `repository`
    pub fn new(repository: Box<dyn SettingsRepository>) -> Self {
        let state = repository.load();
        Self {
            state: RwLock::new(state),
            repository,
            listeners: Listeners::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> SettingsState {
        self.state.read().clone()
    }

    pub fn sound_enabled(&self) -> bool {
        self.state.read().sound_enabled
    }

    pub fn toggle_sound(&self) {
        self.update(|s| s.sound_enabled = !s.sound_enabled);
    }

    pub fn set_has_seen_boot(&self, value: bool) {
        self.update(|s| s.has_seen_boot = value);
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.update(|s| s.color_scheme = scheme);
    }

    pub fn set_ui_scale(&self, scale: UiScale) {
        self.update(|s| s.ui_scale = scale);
    }

    /// Set the scheme from its tag, rejecting unknown tags without a state change
    pub fn set_color_scheme_named(&self, tag: &str) -> Result<(), SettingsError> {
        let scheme = tag.parse::<ColorScheme>()?;
        self.set_color_scheme(scheme);
        Ok(())
    }

    /// Set the scale from a number, rejecting values outside the closed set
    pub fn set_ui_scale_value(&self, value: f64) -> Result<(), SettingsError> {
        let scale = UiScale::from_value(value)?;
        self.set_ui_scale(scale);
        Ok(())
    }

    /// Restore every field to its default
    pub fn reset(&self) {
        self.update(|s| *s = SettingsState::default());
    }

    pub fn subscribe(&self, listener: impl Fn(&SettingsState) + Send + Sync + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update(&self, mutate: impl FnOnce(&mut SettingsState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };
        self.repository.save(&snapshot);
        self.listeners.notify(&snapshot);
    }
}

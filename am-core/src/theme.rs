//! Theme applicator
//!
//! Projects the color scheme and UI scale onto the presentation surface as two
//! root attributes. The baseline scheme is encoded by the *absence* of
//! [`THEME_ATTRIBUTE`]; the scale attribute is always present.

use crate::observer::ListenerId;
use crate::settings::{ColorScheme, SettingsState, SettingsStore, UiScale};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const SCALE_ATTRIBUTE: &str = "data-scale";

/// Root element the styling layer reads attributes from
pub trait PresentationSurface: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
}

/// In-memory root attribute map
///
/// The shell renders from this; tests inspect it.
#[derive(Debug, Default)]
pub struct DocumentAttributes {
    attributes: RwLock<BTreeMap<String, String>>,
}

impl DocumentAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }

    /// Snapshot of every attribute, sorted by name
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.attributes
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl PresentationSurface for DocumentAttributes {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.write().insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.write().remove(name);
    }
}

/// Keeps the surface attributes in sync with the settings store
pub struct ThemeApplicator {
    surface: Arc<dyn PresentationSurface>,
    applied: Mutex<Option<(ColorScheme, UiScale)>>,
    listener: Mutex<Option<ListenerId>>,
}

impl ThemeApplicator {
    /// Apply the current settings now and on every later scheme or scale change
    pub fn attach(settings: &SettingsStore, surface: Arc<dyn PresentationSurface>) -> Arc<Self> {
        let applicator = Arc::new(Self {
            surface,
            applied: Mutex::new(None),
            listener: Mutex::new(None),
        });

        applicator.on_settings(&settings.state());

        let handle = applicator.clone();
        let id = settings.subscribe(move |state| handle.on_settings(state));
        *applicator.listener.lock() = Some(id);

        applicator
    }

    /// Stop following `settings`; attributes already applied are left in place
    pub fn detach(&self, settings: &SettingsStore) {
        if let Some(id) = self.listener.lock().take() {
            settings.unsubscribe(id);
        }
    }

    fn on_settings(&self, state: &SettingsState) {
        let next = (state.color_scheme, state.ui_scale);
        {
            let mut applied = self.applied.lock();
            if *applied == Some(next) {
                return;
            }
            *applied = Some(next);
        }
        self.apply(next.0, next.1);
    }

    fn apply(&self, scheme: ColorScheme, scale: UiScale) {
        if scheme.is_baseline() {
            self.surface.remove_attribute(THEME_ATTRIBUTE);
        } else {
            self.surface.set_attribute(THEME_ATTRIBUTE, scheme.as_str());
        }
        self.surface.set_attribute(SCALE_ATTRIBUTE, scale.attr_value());
        ::log::debug!("Applied theme {} at scale {}", scheme, scale.attr_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PersistedSettings;
    use crate::storage::MemoryStorage;

    /// Surface that records every call
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<String>>,
    }

    impl PresentationSurface for CallLog {
        fn set_attribute(&self, name: &str, value: &str) {
            self.calls.lock().push(format!("set {}={}", name, value));
        }

        fn remove_attribute(&self, name: &str) {
            self.calls.lock().push(format!("remove {}", name));
        }
    }

    fn store() -> SettingsStore {
        SettingsStore::new(Box::new(PersistedSettings::new(Arc::new(MemoryStorage::new()))))
    }

    #[test]
    fn test_defaults_applied_on_attach() {
        let settings = store();
        let surface = Arc::new(DocumentAttributes::new());
        let _applicator = ThemeApplicator::attach(&settings, surface.clone());

        assert_eq!(surface.get(THEME_ATTRIBUTE), None);
        assert_eq!(surface.get(SCALE_ATTRIBUTE).as_deref(), Some("1"));
    }

    #[test]
    fn test_scheme_changes() {
        let settings = store();
        let surface = Arc::new(DocumentAttributes::new());
        let _applicator = ThemeApplicator::attach(&settings, surface.clone());

        settings.set_color_scheme(ColorScheme::Matrix);
        assert_eq!(surface.get(THEME_ATTRIBUTE).as_deref(), Some("matrix"));

        settings.set_color_scheme(ColorScheme::NeonCyber);
        assert_eq!(surface.get(THEME_ATTRIBUTE), None);
    }

    #[test]
    fn test_scale_attribute_values() {
        let settings = store();
        let surface = Arc::new(DocumentAttributes::new());
        let _applicator = ThemeApplicator::attach(&settings, surface.clone());

        let expected = ["0.8", "0.9", "1", "1.1", "1.2"];
        for (scale, attr) in UiScale::ALL.into_iter().zip(expected) {
            settings.set_ui_scale(scale);
            assert_eq!(surface.get(SCALE_ATTRIBUTE).as_deref(), Some(attr));
        }
    }

    #[test]
    fn test_unrelated_changes_do_not_reapply() {
        let settings = store();
        let surface = Arc::new(CallLog::default());
        let _applicator = ThemeApplicator::attach(&settings, surface.clone());
        let initial = surface.calls.lock().len();

        settings.toggle_sound();
        settings.set_has_seen_boot(true);
        assert_eq!(surface.calls.lock().len(), initial);

        settings.set_color_scheme(ColorScheme::Arctic);
        assert_eq!(surface.calls.lock().len(), initial + 2);
    }

    #[test]
    fn test_detach_stops_updates() {
        let settings = store();
        let surface = Arc::new(DocumentAttributes::new());
        let applicator = ThemeApplicator::attach(&settings, surface.clone());

        applicator.detach(&settings);
        settings.set_color_scheme(ColorScheme::Infrared);
        assert_eq!(surface.get(THEME_ATTRIBUTE), None);
    }
}

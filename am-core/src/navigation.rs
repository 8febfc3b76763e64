//! Navigation store - which panel is visible and which project is drilled into
//!
//! Transient: never persisted, reset on every start. The store does not know
//! which panel ids exist; resolving them is the main panel's job.

use crate::observer::{ListenerId, Listeners};
use parking_lot::RwLock;

/// Panel shown at startup
pub const DEFAULT_PANEL: &str = "about-me";

/// Navigation snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_panel: String,
    pub active_project_id: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_panel: DEFAULT_PANEL.to_string(),
            active_project_id: None,
        }
    }
}

impl NavigationState {
    pub fn has_detail(&self) -> bool {
        self.active_project_id.is_some()
    }
}

/// Process-wide navigation store
pub struct NavigationStore {
    /// Panel restored by [`NavigationStore::reset`]
    initial_panel: String,
    state: RwLock<NavigationState>,
    listeners: Listeners<NavigationState>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::with_initial_panel(DEFAULT_PANEL)
    }
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a panel other than [`DEFAULT_PANEL`]; `reset` returns here too
    pub fn with_initial_panel(panel_id: impl Into<String>) -> Self {
        let initial_panel = panel_id.into();
        Self {
            state: RwLock::new(NavigationState {
                active_panel: initial_panel.clone(),
                active_project_id: None,
            }),
            initial_panel,
            listeners: Listeners::default(),
        }
    }

    pub fn initial_panel(&self) -> &str {
        &self.initial_panel
    }

    pub fn state(&self) -> NavigationState {
        self.state.read().clone()
    }

    pub fn active_panel(&self) -> String {
        self.state.read().active_panel.clone()
    }

    /// Switch top-level panel, leaving any drill-down
    pub fn set_active_panel(&self, panel_id: &str) {
        self.update(|s| {
            s.active_panel = panel_id.to_string();
            s.active_project_id = None;
        });
    }

    /// Open a drill-down; the active panel is unchanged
    pub fn open_project_detail(&self, project_id: &str) {
        self.update(|s| s.active_project_id = Some(project_id.to_string()));
    }

    pub fn close_project_detail(&self) {
        self.update(|s| s.active_project_id = None);
    }

    /// Back to the startup state
    pub fn reset(&self) {
        let initial_panel = self.initial_panel.clone();
        self.update(|s| {
            s.active_panel = initial_panel;
            s.active_project_id = None;
        });
    }

    pub fn subscribe(&self, listener: impl Fn(&NavigationState) + Send + Sync + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update(&self, mutate: impl FnOnce(&mut NavigationState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };
        ::log::debug!(
            "Navigation: panel={} project={:?}",
            snapshot.active_panel,
            snapshot.active_project_id
        );
        self.listeners.notify(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_initial_state() {
        let store = NavigationStore::new();
        assert_eq!(store.state(), NavigationState::default());
        assert_eq!(store.active_panel(), "about-me");
        assert!(!store.state().has_detail());
    }

    #[test]
    fn test_set_active_panel_clears_detail() {
        let store = NavigationStore::new();
        store.set_active_panel("portfolio");
        store.open_project_detail("repos");
        store.set_active_panel("blog");

        let state = store.state();
        assert_eq!(state.active_panel, "blog");
        assert_eq!(state.active_project_id, None);
    }

    #[test]
    fn test_open_detail_keeps_panel() {
        let store = NavigationStore::new();
        for project in ["repos", "", "anything at all"] {
            store.open_project_detail(project);
            let state = store.state();
            assert_eq!(state.active_panel, "about-me");
            assert_eq!(state.active_project_id.as_deref(), Some(project));
        }
    }

    #[test]
    fn test_single_drill_down() {
        let store = NavigationStore::with_initial_panel("portfolio");
        store.open_project_detail("repos");
        store.open_project_detail("flowspace");
        assert_eq!(store.state().active_project_id.as_deref(), Some("flowspace"));

        store.close_project_detail();
        assert_eq!(store.state().active_project_id, None);
        assert_eq!(store.active_panel(), "portfolio");
    }

    #[test]
    fn test_reset_returns_to_initial_panel() {
        let store = NavigationStore::with_initial_panel("blog");
        store.set_active_panel("portfolio");
        store.open_project_detail("repos");
        store.reset();

        let state = store.state();
        assert_eq!(state.active_panel, "blog");
        assert_eq!(state.active_project_id, None);
        assert_eq!(store.initial_panel(), "blog");
    }

    #[test]
    fn test_unknown_ids_are_stored() {
        let store = NavigationStore::new();
        store.set_active_panel("does-not-exist");
        assert_eq!(store.active_panel(), "does-not-exist");
    }

    #[test]
    fn test_listeners_notified_per_mutation() {
        let store = NavigationStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        store.subscribe(move |state| s.lock().push(state.clone()));

        store.set_active_panel("portfolio");
        store.open_project_detail("repos");
        store.reset();

        let seen = seen.lock();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1].active_project_id.as_deref(), Some("repos"));
        assert_eq!(seen[2], NavigationState::default());
    }
}

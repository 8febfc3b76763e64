//! # Panel App Trait - Collaborator Panel Interface
//!
//! Every panel named by a [`SectionDescriptor`](crate::SectionDescriptor) is
//! provided by an app crate implementing [`PanelApp`]. The project drill-down is
//! provided by a [`DetailApp`], which receives exactly one [`DetailProps`].
//!
//! ## Architecture
//!
//! - **Standardized metadata** - component name and description via [`PanelInfo`]
//! - **Mounting** - `mount` builds a fresh [`PanelScreen`] each time the panel is shown
//! - **Runtime queries** - component lookup via [`ComponentRegistry`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use am_widgets::ComponentRegistry;
//! use am_blog::BlogApp;
//! use am_portfolio::{PortfolioApp, ProjectDetailApp};
//!
//! let mut components = ComponentRegistry::new();
//! components.register::<BlogApp>();
//! components.register::<PortfolioApp>();
//! components.register_detail::<ProjectDetailApp>();
//! ```
//!
//! ## Creating a New Panel
//!
//! ```rust,ignore
//! use am_widgets::{PanelApp, PanelContext, PanelInfo, PanelScreen, PanelView};
//!
//! pub struct HelloApp;
//!
//! impl PanelApp for HelloApp {
//!     fn info() -> PanelInfo {
//!         PanelInfo {
//!             name: "Hello",
//!             component: "Hello",
//!             description: "Says hello",
//!         }
//!     }
//!
//!     fn mount(_ctx: &PanelContext) -> Box<dyn PanelScreen> {
//!         Box::new(HelloScreen)
//!     }
//! }
//! ```

use am_core::{
    AudioContextFactory, MemoryStorage, NavigationStore, PersistedSettings, Scheduler, SettingsState, SettingsStore,
    SoundEffects, StorageBackend,
};
use std::fmt;
use std::sync::Arc;

/// Metadata about a registered panel component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelInfo {
    /// Display name
    pub name: &'static str,
    /// Component identifier matched against `SectionDescriptor::component`
    pub component: &'static str,
    /// Description of the panel
    pub description: &'static str,
}

/// Services handed to every mounted screen
#[derive(Clone)]
pub struct PanelContext {
    pub navigation: Arc<NavigationStore>,
    pub settings: Arc<SettingsStore>,
    pub sound: Arc<SoundEffects>,
    pub scheduler: Arc<dyn Scheduler>,
    pub storage: Arc<dyn StorageBackend>,
}

impl PanelContext {
    /// Fresh stores over in-memory storage
    ///
    /// Nothing is persisted; used for demos and by app tests.
    pub fn ephemeral(scheduler: Arc<dyn Scheduler>, audio: Box<dyn AudioContextFactory>) -> Self {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        let settings = Arc::new(SettingsStore::new(Box::new(PersistedSettings::new(storage.clone()))));
        let sound = Arc::new(SoundEffects::new(settings.clone(), audio, scheduler.clone()));
        Self {
            navigation: Arc::new(NavigationStore::new()),
            settings,
            sound,
            scheduler,
            storage,
        }
    }
}

/// Input of the drill-down view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailProps {
    pub project_id: String,
}

/// Top-level panel provided by an app crate
pub trait PanelApp {
    /// Returns metadata about this panel
    fn info() -> PanelInfo
    where
        Self: Sized;

    /// Build a fresh screen; called on every resolved-panel change
    fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen>
    where
        Self: Sized;
}

/// Drill-down view mounted inside a panel
pub trait DetailApp {
    fn info() -> PanelInfo
    where
        Self: Sized;

    fn mount(ctx: &PanelContext, props: DetailProps) -> Box<dyn PanelScreen>
    where
        Self: Sized;
}

/// A mounted panel instance
///
/// Screens own their panel-local state; unmounting drops it.
pub trait PanelScreen: Send {
    /// Current content
    fn render(&self) -> PanelView;

    /// Handle a text command addressed to this screen
    ///
    /// Returns false when the verb is not understood.
    fn handle_command(&mut self, _verb: &str, _args: &[&str]) -> bool {
        false
    }

    /// Verbs listed by the shell's `help`
    fn commands(&self) -> &'static [&'static str] {
        &[]
    }

    /// Called when settings change while mounted
    fn on_theme_change(&mut self, _settings: &SettingsState) {}
}

// ============================================================================
// PANEL VIEW
// ============================================================================

/// Text content produced by a screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelView {
    lines: Vec<String>,
}

impl PanelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section heading, upper-cased
    pub fn heading(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("== {} ==", text.as_ref().to_uppercase()));
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// `key: value` row
    pub fn field(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.lines.push(format!("{:<12} {}", format!("{}:", key), value));
        self
    }

    /// List item, marked when `active`
    pub fn item(mut self, active: bool, text: impl AsRef<str>) -> Self {
        let marker = if active { '>' } else { ' ' };
        self.lines.push(format!("{} {}", marker, text.as_ref()));
        self
    }

    pub fn extend(mut self, other: PanelView) -> Self {
        self.lines.extend(other.lines);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// COMPONENT REGISTRY
// ============================================================================

type MountFn = fn(&PanelContext) -> Box<dyn PanelScreen>;
type DetailMountFn = fn(&PanelContext, DetailProps) -> Box<dyn PanelScreen>;

/// Registry of all installed panel components
///
/// Apps are linked at compile time; this maps component names from the
/// section configuration to their mount functions.
#[derive(Default)]
pub struct ComponentRegistry {
    panels: Vec<(PanelInfo, MountFn)>,
    detail: Option<(PanelInfo, DetailMountFn)>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel; a later registration of the same component replaces it
    pub fn register<A: PanelApp>(&mut self) {
        let info = A::info();
        self.panels.retain(|(existing, _)| existing.component != info.component);
        self.panels.push((info, A::mount as MountFn));
    }

    /// Register the drill-down view
    pub fn register_detail<D: DetailApp>(&mut self) {
        self.detail = Some((D::info(), D::mount as DetailMountFn));
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelInfo> {
        self.panels.iter().map(|(info, _)| info)
    }

    pub fn find(&self, component: &str) -> Option<&PanelInfo> {
        self.panels().find(|info| info.component == component)
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Mount `component`, `None` if it is not registered
    pub fn mount(&self, component: &str, ctx: &PanelContext) -> Option<Box<dyn PanelScreen>> {
        self.panels
            .iter()
            .find(|(info, _)| info.component == component)
            .map(|(_, mount)| mount(ctx))
    }

    pub fn mount_detail(&self, ctx: &PanelContext, props: DetailProps) -> Option<Box<dyn PanelScreen>> {
        self.detail.as_ref().map(|(_, mount)| mount(ctx, props))
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl PanelScreen for Echo {
        fn render(&self) -> PanelView {
            PanelView::new().line(self.0)
        }
    }

    struct FirstApp;
    impl PanelApp for FirstApp {
        fn info() -> PanelInfo {
            PanelInfo {
                name: "First",
                component: "Echo",
                description: "first",
            }
        }
        fn mount(_ctx: &PanelContext) -> Box<dyn PanelScreen> {
            Box::new(Echo("first"))
        }
    }

    struct SecondApp;
    impl PanelApp for SecondApp {
        fn info() -> PanelInfo {
            PanelInfo {
                name: "Second",
                component: "Echo",
                description: "second",
            }
        }
        fn mount(_ctx: &PanelContext) -> Box<dyn PanelScreen> {
            Box::new(Echo("second"))
        }
    }

    #[test]
    fn test_register_replaces_same_component() {
        let mut registry = ComponentRegistry::new();
        registry.register::<FirstApp>();
        registry.register::<SecondApp>();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("Echo").map(|i| i.name), Some("Second"));
        assert!(registry.find("Missing").is_none());
        assert!(!registry.has_detail());
    }

    #[test]
    fn test_panel_view_builder() {
        let view = PanelView::new()
            .heading("skills")
            .item(true, "Rust")
            .item(false, "Go")
            .field("status", "live");
        assert_eq!(view.lines()[0], "== SKILLS ==");
        assert_eq!(view.lines()[1], "> Rust");
        assert_eq!(view.lines()[2], "  Go");
        assert!(view.contains("status:"));
        assert!(view.to_string().ends_with("live\n"));
    }
}

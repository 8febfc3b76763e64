//! # Main Panel Controller
//!
//! Bridges the navigation store, the section registry and the component
//! registry into the single on-screen panel.
//!
//! ```text
//! NavigationStore ──listener──▶ resolve() ──▶ Resolution ──▶ mount screen
//!                                   │               │
//!                           SectionRegistry   Panel | Detail | Fallback
//! ```
//!
//! Every change of resolution swaps the mounted screen at once and starts a
//! settle window. Each swap bumps a generation counter; a settle callback from
//! an older generation is ignored, so the latest navigation always wins.

use crate::app_trait::{ComponentRegistry, DetailProps, PanelContext, PanelScreen, PanelView};
use crate::sections::{SectionDescriptor, SectionRegistry};
use am_core::{ListenerId, NavigationState, SettingsState, SoundKind};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;

/// How long a transition is considered in flight
pub const SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Frame title when the active panel id is unknown
pub const FALLBACK_TITLE: &str = "System";

/// What the main panel shows for a navigation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A top-level panel, mounted without parameters
    Panel(SectionDescriptor),
    /// The drill-down view inside a drill-down capable panel
    Detail {
        section: SectionDescriptor,
        project_id: String,
    },
    /// The active panel id is not in the registry
    Fallback { panel_id: String },
}

impl Resolution {
    pub fn section(&self) -> Option<&SectionDescriptor> {
        match self {
            Resolution::Panel(section) | Resolution::Detail { section, .. } => Some(section),
            Resolution::Fallback { .. } => None,
        }
    }

    pub fn title(&self) -> &str {
        self.section().map_or(FALLBACK_TITLE, |section| section.title.as_str())
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Resolution::Detail { .. })
    }
}

/// Resolve a navigation state against the registry. Never fails.
pub fn resolve(sections: &SectionRegistry, state: &NavigationState) -> Resolution {
    let Some(section) = sections.find_by_id(&state.active_panel) else {
        return Resolution::Fallback {
            panel_id: state.active_panel.clone(),
        };
    };

    match &state.active_project_id {
        Some(project_id) if section.drill_down => Resolution::Detail {
            section: section.clone(),
            project_id: project_id.clone(),
        },
        _ => Resolution::Panel(section.clone()),
    }
}

/// Panel frame as rendered by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelFrame {
    pub title: String,
    pub icon: Option<String>,
    pub accent_color: Option<String>,
    /// A back affordance is offered (drill-down only)
    pub back: bool,
    pub settling: bool,
    pub body: PanelView,
}

impl std::fmt::Display for PanelFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.icon {
            Some(icon) => writeln!(f, "┌─ {} {}", icon, self.title.to_uppercase())?,
            None => writeln!(f, "┌─ {}", self.title.to_uppercase())?,
        }
        if self.back {
            writeln!(f, "│ < Back to {}  (back)", self.title)?;
        }
        for line in self.body.lines() {
            writeln!(f, "│ {}", line)?;
        }
        write!(f, "└─")
    }
}

struct Mounted {
    resolution: Resolution,
    screen: Option<Box<dyn PanelScreen>>,
    generation: u64,
    settling: bool,
}

/// Keeps exactly one screen mounted for the current navigation state
pub struct MainPanel {
    sections: Arc<SectionRegistry>,
    components: Arc<ComponentRegistry>,
    ctx: PanelContext,
    mounted: Mutex<Mounted>,
    listeners: Mutex<Vec<ListenerKind>>,
}

enum ListenerKind {
    Navigation(ListenerId),
    Settings(ListenerId),
}

impl MainPanel {
    /// Mount the current panel and follow the navigation and settings stores
    pub fn attach(sections: Arc<SectionRegistry>, components: Arc<ComponentRegistry>, ctx: PanelContext) -> Arc<Self> {
        let resolution = resolve(&sections, &ctx.navigation.state());
        let panel = Arc::new(Self {
            sections,
            components,
            ctx,
            mounted: Mutex::new(Mounted {
                resolution: resolution.clone(),
                screen: None,
                generation: 0,
                settling: false,
            }),
            listeners: Mutex::new(Vec::new()),
        });

        let screen = panel.mount(&resolution);
        panel.mounted.lock().screen = screen;

        let weak: Weak<Self> = Arc::downgrade(&panel);
        let nav_id = panel.ctx.navigation.subscribe(move |state| {
            if let Some(panel) = weak.upgrade() {
                panel.on_navigation(state);
            }
        });

        let weak: Weak<Self> = Arc::downgrade(&panel);
        let settings_id = panel.ctx.settings.subscribe(move |state| {
            if let Some(panel) = weak.upgrade() {
                panel.on_settings(state);
            }
        });

        panel
            .listeners
            .lock()
            .extend([ListenerKind::Navigation(nav_id), ListenerKind::Settings(settings_id)]);
        panel
    }

    /// Stop following the stores
    pub fn detach(&self) {
        for listener in self.listeners.lock().drain(..) {
            match listener {
                ListenerKind::Navigation(id) => self.ctx.navigation.unsubscribe(id),
                ListenerKind::Settings(id) => self.ctx.settings.unsubscribe(id),
            };
        }
    }

    pub fn active(&self) -> Resolution {
        self.mounted.lock().resolution.clone()
    }

    /// A transition started less than [`SETTLE_DURATION`] ago
    pub fn is_settling(&self) -> bool {
        self.mounted.lock().settling
    }

    pub fn generation(&self) -> u64 {
        self.mounted.lock().generation
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Render the frame around the mounted screen
    pub fn render(&self) -> PanelFrame {
        let mounted = self.mounted.lock();
        let resolution = &mounted.resolution;
        let section = resolution.section();

        let body = match (&mounted.screen, resolution) {
            (Some(screen), _) => screen.render(),
            (None, Resolution::Fallback { panel_id }) => PanelView::new()
                .line(format!("No module is registered as '{}'.", panel_id))
                .line("Pick a section from the sidebar."),
            (None, _) => PanelView::new().line("Module unavailable."),
        };

        PanelFrame {
            title: resolution.title().to_string(),
            icon: section.map(|s| s.icon.clone()),
            accent_color: section.map(|s| s.accent_color.clone()),
            back: resolution.is_detail(),
            settling: mounted.settling,
            body,
        }
    }

    /// Leave the drill-down. Returns false when none is open.
    pub fn go_back(&self) -> bool {
        if !self.active().is_detail() {
            return false;
        }
        self.ctx.sound.play(SoundKind::Navigate);
        self.ctx.navigation.close_project_detail();
        true
    }

    /// Forward a command to the mounted screen
    ///
    /// The screen is taken out of the lock while it runs, so it may navigate.
    /// If it does, the newly mounted screen stays and the old one is dropped.
    /// Settings it changes are delivered to it once the command returns.
    pub fn handle_command(&self, verb: &str, args: &[&str]) -> bool {
        let (screen, generation) = {
            let mut mounted = self.mounted.lock();
            (mounted.screen.take(), mounted.generation)
        };
        let Some(mut screen) = screen else {
            return false;
        };

        let before = self.ctx.settings.state();
        let handled = screen.handle_command(verb, args);
        let after = self.ctx.settings.state();
        if after != before {
            screen.on_theme_change(&after);
        }

        let mut mounted = self.mounted.lock();
        if mounted.generation == generation && mounted.screen.is_none() {
            mounted.screen = Some(screen);
        }
        handled
    }

    /// Verbs the mounted screen understands
    pub fn screen_commands(&self) -> &'static [&'static str] {
        self.mounted
            .lock()
            .screen
            .as_ref()
            .map(|screen| screen.commands())
            .unwrap_or(&[])
    }

    fn on_navigation(self: &Arc<Self>, state: &NavigationState) {
        let next = resolve(&self.sections, state);

        let generation = {
            let mut mounted = self.mounted.lock();
            if mounted.resolution == next {
                return;
            }
            mounted.generation += 1;
            mounted.resolution = next.clone();
            mounted.screen = None;
            mounted.settling = true;
            mounted.generation
        };

        if let Resolution::Fallback { panel_id } = &next {
            ::log::warn!("Unknown panel id '{}', showing fallback", panel_id);
        }

        let screen = self.mount(&next);
        {
            let mut mounted = self.mounted.lock();
            if mounted.generation != generation {
                // Superseded while mounting
                return;
            }
            mounted.screen = screen;
        }

        let weak = Arc::downgrade(self);
        self.ctx.scheduler.schedule(
            SETTLE_DURATION,
            Box::new(move || {
                if let Some(panel) = weak.upgrade() {
                    let mut mounted = panel.mounted.lock();
                    if mounted.generation == generation {
                        mounted.settling = false;
                    }
                }
            }),
        );
    }

    fn on_settings(&self, state: &SettingsState) {
        let screen = self.mounted.lock().screen.take();
        let Some(mut screen) = screen else {
            return;
        };
        screen.on_theme_change(state);
        let mut mounted = self.mounted.lock();
        if mounted.screen.is_none() {
            mounted.screen = Some(screen);
        }
    }

    fn mount(&self, resolution: &Resolution) -> Option<Box<dyn PanelScreen>> {
        match resolution {
            Resolution::Panel(section) => {
                let screen = self.components.mount(&section.component, &self.ctx);
                if screen.is_none() {
                    ::log::warn!("Component '{}' for section '{}' is not registered", section.component, section.id);
                }
                screen
            }
            Resolution::Detail { section, project_id } => {
                let props = DetailProps {
                    project_id: project_id.clone(),
                };
                self.components.mount_detail(&self.ctx, props).or_else(|| {
                    ::log::warn!("No drill-down view registered, showing '{}'", section.id);
                    self.components.mount(&section.component, &self.ctx)
                })
            }
            Resolution::Fallback { .. } => None,
        }
    }
}

impl Drop for MainPanel {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_trait::{DetailApp, PanelApp, PanelInfo};
    use am_core::{ColorScheme, DisabledAudioFactory, ManualScheduler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static MOUNTS: AtomicUsize = AtomicUsize::new(0);

    struct Named {
        name: String,
        hits: usize,
        ctx: PanelContext,
    }

    impl PanelScreen for Named {
        fn render(&self) -> PanelView {
            PanelView::new().line(format!("{} hits={}", self.name, self.hits))
        }

        fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
            match verb {
                "hit" => {
                    self.hits += 1;
                    true
                }
                "go" => {
                    self.ctx.navigation.set_active_panel(args.first().copied().unwrap_or("blog"));
                    true
                }
                "paint" => {
                    self.ctx.settings.set_color_scheme(ColorScheme::Vaporwave);
                    true
                }
                _ => false,
            }
        }

        fn on_theme_change(&mut self, settings: &SettingsState) {
            self.name = format!("{}@{}", self.name, settings.color_scheme);
        }
    }

    macro_rules! panel_app {
        ($app:ident, $component:literal) => {
            struct $app;
            impl PanelApp for $app {
                fn info() -> PanelInfo {
                    PanelInfo {
                        name: $component,
                        component: $component,
                        description: "",
                    }
                }
                fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen> {
                    MOUNTS.fetch_add(1, Ordering::SeqCst);
                    Box::new(Named {
                        name: $component.to_string(),
                        hits: 0,
                        ctx: ctx.clone(),
                    })
                }
            }
        };
    }

    panel_app!(AboutApp, "AboutMe");
    panel_app!(PortfolioApp, "Portfolio");
    panel_app!(BlogApp, "Blog");

    struct DetailView;
    impl DetailApp for DetailView {
        fn info() -> PanelInfo {
            PanelInfo {
                name: "Project",
                component: "ProjectDetail",
                description: "",
            }
        }
        fn mount(ctx: &PanelContext, props: DetailProps) -> Box<dyn PanelScreen> {
            Box::new(Named {
                name: format!("detail:{}", props.project_id),
                hits: 0,
                ctx: ctx.clone(),
            })
        }
    }

    struct Harness {
        scheduler: Arc<ManualScheduler>,
        ctx: PanelContext,
        panel: Arc<MainPanel>,
    }

    fn harness() -> Harness {
        let scheduler = Arc::new(ManualScheduler::new());
        let ctx = PanelContext::ephemeral(scheduler.clone(), Box::new(DisabledAudioFactory));

        let mut components = ComponentRegistry::new();
        components.register::<AboutApp>();
        components.register::<PortfolioApp>();
        components.register::<BlogApp>();
        components.register_detail::<DetailView>();

        let panel = MainPanel::attach(
            Arc::new(SectionRegistry::builtin()),
            Arc::new(components),
            ctx.clone(),
        );
        Harness { scheduler, ctx, panel }
    }

    #[test]
    fn test_resolve() {
        let sections = SectionRegistry::builtin();
        let state = |panel: &str, project: Option<&str>| NavigationState {
            active_panel: panel.to_string(),
            active_project_id: project.map(str::to_string),
        };

        assert!(matches!(resolve(&sections, &state("blog", None)), Resolution::Panel(s) if s.id == "blog"));
        assert_eq!(
            resolve(&sections, &state("portfolio", Some("repos"))),
            Resolution::Detail {
                section: sections.find_by_id("portfolio").cloned().unwrap(),
                project_id: "repos".into(),
            }
        );
        // A project id without a drill-down panel is ignored
        assert!(matches!(resolve(&sections, &state("blog", Some("repos"))), Resolution::Panel(_)));
        assert_eq!(
            resolve(&sections, &state("nowhere", None)),
            Resolution::Fallback {
                panel_id: "nowhere".into()
            }
        );
    }

    #[test]
    fn test_initial_mount() {
        let h = harness();
        let frame = h.panel.render();
        assert_eq!(frame.title, "User");
        assert_eq!(frame.icon.as_deref(), Some("[USR]"));
        assert!(frame.body.contains("AboutMe"));
        assert!(!frame.settling);
    }

    #[test]
    fn test_drill_down_then_switch() {
        let h = harness();
        h.ctx.navigation.set_active_panel("portfolio");
        h.ctx.navigation.open_project_detail("repos");

        let frame = h.panel.render();
        assert!(frame.back);
        assert_eq!(frame.title, "Projects");
        assert!(frame.body.contains("detail:repos"));

        h.ctx.navigation.set_active_panel("blog");
        let frame = h.panel.render();
        assert!(!frame.back);
        assert!(frame.body.contains("Blog"));
        assert_eq!(h.ctx.navigation.state().active_project_id, None);
    }

    #[test]
    fn test_unknown_panel_falls_back() {
        let h = harness();
        h.ctx.navigation.set_active_panel("does-not-exist");
        let frame = h.panel.render();
        assert_eq!(frame.title, FALLBACK_TITLE);
        assert_eq!(frame.icon, None);
        assert!(frame.body.contains("does-not-exist"));
        assert!(!h.panel.handle_command("hit", &[]));
    }

    #[test]
    fn test_unregistered_component() {
        let h = harness();
        h.ctx.navigation.set_active_panel("forge");
        let frame = h.panel.render();
        assert_eq!(frame.title, "FORGE");
        assert!(frame.body.contains("unavailable"));
    }

    #[test]
    fn test_latest_navigation_wins() {
        let h = harness();
        h.ctx.navigation.set_active_panel("portfolio");
        assert!(h.panel.is_settling());

        h.scheduler.advance_ms(200);
        h.ctx.navigation.set_active_panel("blog");

        // The first settle timer fires here but belongs to a stale generation
        h.scheduler.advance_ms(100);
        assert!(h.panel.is_settling());
        assert!(matches!(h.panel.active(), Resolution::Panel(s) if s.id == "blog"));

        h.scheduler.advance_ms(150);
        assert!(!h.panel.is_settling());
    }

    #[test]
    fn test_remount_resets_screen_state() {
        let h = harness();
        let before = MOUNTS.load(Ordering::SeqCst);
        assert!(h.panel.handle_command("hit", &[]));
        assert!(h.panel.render().body.contains("hits=1"));

        h.ctx.navigation.set_active_panel("blog");
        h.ctx.navigation.set_active_panel("about-me");
        assert!(h.panel.render().body.contains("hits=0"));
        assert!(MOUNTS.load(Ordering::SeqCst) >= before + 2);
    }

    #[test]
    fn test_same_resolution_does_not_remount() {
        let h = harness();
        h.panel.handle_command("hit", &[]);
        let generation = h.panel.generation();
        h.ctx.navigation.set_active_panel("about-me");
        assert_eq!(h.panel.generation(), generation);
        assert!(h.panel.render().body.contains("hits=1"));
    }

    #[test]
    fn test_screen_may_navigate() {
        let h = harness();
        assert!(h.panel.handle_command("go", &["blog"]));
        assert!(h.panel.render().body.contains("Blog"));
    }

    #[test]
    fn test_go_back() {
        let h = harness();
        assert!(!h.panel.go_back());

        h.ctx.navigation.set_active_panel("portfolio");
        h.ctx.navigation.open_project_detail("flowspace");
        assert!(h.panel.go_back());
        assert!(matches!(h.panel.active(), Resolution::Panel(s) if s.id == "portfolio"));
        assert_eq!(h.ctx.navigation.active_panel(), "portfolio");
    }

    #[test]
    fn test_theme_change_reaches_screen() {
        let h = harness();
        h.ctx.settings.set_color_scheme(am_core::ColorScheme::Matrix);
        assert!(h.panel.render().body.contains("AboutMe@matrix"));
    }

    #[test]
    fn test_theme_change_from_own_command_reaches_screen() {
        let h = harness();
        assert!(h.panel.handle_command("paint", &[]));
        assert!(h.panel.render().body.contains("AboutMe@vaporwave hits=0"));

        // Unchanged settings do not notify
        assert!(h.panel.handle_command("hit", &[]));
        assert!(h.panel.render().body.contains("AboutMe@vaporwave hits=1"));
    }

    #[test]
    fn test_frame_display() {
        let h = harness();
        let text = h.panel.render().to_string();
        assert!(text.starts_with("┌─ [USR] USER"));
    }
}

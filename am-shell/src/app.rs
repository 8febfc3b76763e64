//! AM Desktop App - main application shell
//!
//! Organized into sections:
//! - Bootstrap (storage, stores, services, registries)
//! - App registry queries
//! - Rendering
//! - Command handling

use crate::config::ShellConfig;
use crate::widgets::boot::BootSequence;
use crate::widgets::sidebar::{Sidebar, SidebarSelection};
use crate::widgets::{clock, profile, quick_links, theme_control, top_bar};
use am_core::{
    AudioContextFactory, CpalContextFactory, DisabledAudioFactory, DocumentAttributes, FileStorage, MemoryStorage,
    NavigationStore, PersistedSettings, Scheduler, SettingsStore, SoundEffects, StorageBackend, ThemeApplicator,
    TimerScheduler, DEFAULT_PANEL,
};
use am_widgets::{ComponentRegistry, MainPanel, PanelContext, PanelView, SectionRegistry};
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::sync::Arc;

/// What the command loop should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep going, optionally showing a message first
    Continue(Option<String>),
    Quit,
}

impl CommandOutcome {
    fn message(text: impl Into<String>) -> Self {
        CommandOutcome::Continue(Some(text.into()))
    }
}

const SHELL_COMMANDS: [(&str, &str); 12] = [
    ("nav <id>", "open a module"),
    ("back", "leave the project detail"),
    ("sound", "toggle sound effects"),
    ("theme <scheme>", "switch color scheme"),
    ("scale <value|label>", "switch UI scale"),
    ("play <kind>", "play a sound cue"),
    ("sections", "list modules"),
    ("themes", "show the theme picker"),
    ("attrs", "show presentation attributes"),
    ("reset", "restore default settings and navigation"),
    ("help", "this list"),
    ("quit", "leave"),
];

/// Every app compiled into this build
pub fn installed_components() -> ComponentRegistry {
    #[allow(unused_mut)]
    let mut components = ComponentRegistry::new();

    #[cfg(feature = "am-about")]
    {
        components.register::<am_about::AboutApp>();
        components.register::<am_about::NowApp>();
    }
    #[cfg(feature = "am-portfolio")]
    {
        components.register::<am_portfolio::PortfolioApp>();
        components.register_detail::<am_portfolio::ProjectDetailApp>();
    }
    #[cfg(feature = "am-blog")]
    components.register::<am_blog::BlogApp>();
    #[cfg(feature = "am-contact")]
    components.register::<am_contact::ContactApp>();
    #[cfg(feature = "am-forge")]
    components.register::<am_forge::ForgeApp>();

    components
}

pub struct DesktopApp {
    config: ShellConfig,
    ctx: PanelContext,
    surface: Arc<DocumentAttributes>,
    theme: Arc<ThemeApplicator>,
    sections: Arc<SectionRegistry>,
    components: Arc<ComponentRegistry>,
    main_panel: Arc<MainPanel>,
    sidebar: Sidebar,
}

// ============================================================================
// BOOTSTRAP
// ============================================================================

impl DesktopApp {
    /// Build the desktop with real storage, timers and audio
    pub fn new(config: ShellConfig) -> Self {
        let storage: Arc<dyn StorageBackend> = match config.storage_dir() {
            Some(dir) => {
                ::log::info!("Storing data in {}", dir.display());
                Arc::new(FileStorage::new(dir))
            }
            None => {
                ::log::warn!("Cannot determine config directory, settings will not persist");
                Arc::new(MemoryStorage::new())
            }
        };
        let scheduler: Arc<dyn Scheduler> = Arc::new(TimerScheduler::new());
        let audio: Box<dyn AudioContextFactory> = if config.audio {
            Box::new(CpalContextFactory)
        } else {
            ::log::info!("Audio disabled by config");
            Box::new(DisabledAudioFactory)
        };
        Self::with_services(config, storage, scheduler, audio)
    }

    /// Build the desktop over the given services
    pub fn with_services(
        config: ShellConfig,
        storage: Arc<dyn StorageBackend>,
        scheduler: Arc<dyn Scheduler>,
        audio: Box<dyn AudioContextFactory>,
    ) -> Self {
        let sections = Arc::new(SectionRegistry::from_config_or_builtin(config.sections.clone()));
        let components = Arc::new(installed_components());
        for section in sections.sections() {
            if components.find(&section.component).is_none() {
                ::log::warn!("Section '{}' uses component '{}' which is not installed", section.id, section.component);
            }
        }

        let initial_panel = match sections.find_by_id(DEFAULT_PANEL) {
            Some(section) => section.id.clone(),
            None => sections.sections()[0].id.clone(),
        };

        let settings = Arc::new(SettingsStore::new(Box::new(PersistedSettings::new(storage.clone()))));
        let navigation = Arc::new(NavigationStore::with_initial_panel(initial_panel));
        let sound = Arc::new(SoundEffects::new(settings.clone(), audio, scheduler.clone()));

        let surface = Arc::new(DocumentAttributes::new());
        let theme = ThemeApplicator::attach(&settings, surface.clone());

        let ctx = PanelContext {
            navigation: navigation.clone(),
            settings,
            sound: sound.clone(),
            scheduler,
            storage,
        };
        let main_panel = MainPanel::attach(sections.clone(), components.clone(), ctx.clone());
        let sidebar = Sidebar::new(sections.clone(), navigation, sound);

        ::log::info!(
            "Desktop ready: {} sections, {} components",
            sections.len(),
            components.len()
        );

        Self {
            config,
            ctx,
            surface,
            theme,
            sections,
            components,
            main_panel,
            sidebar,
        }
    }

    /// First launch, unless the config skips it
    pub fn needs_boot(&self) -> bool {
        !self.config.skip_boot && !self.ctx.settings.state().has_seen_boot
    }

    pub fn start_boot(&self) -> BootSequence {
        BootSequence::start(
            self.ctx.scheduler.as_ref(),
            self.ctx.sound.clone(),
            self.ctx.settings.clone(),
        )
    }

    pub fn context(&self) -> &PanelContext {
        &self.ctx
    }

    pub fn surface(&self) -> &DocumentAttributes {
        &self.surface
    }

    pub fn main_panel(&self) -> &MainPanel {
        &self.main_panel
    }
}

impl Drop for DesktopApp {
    fn drop(&mut self) {
        self.theme.detach(&self.ctx.settings);
        self.main_panel.detach();
    }
}

// ============================================================================
// APP REGISTRY QUERIES
// ============================================================================

impl DesktopApp {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_installed(&self, component: &str) -> bool {
        self.components.find(component).is_some()
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl DesktopApp {
    /// Full desktop: top bar, sidebar, the framed main panel, then the widget rail
    pub fn render(&self) -> String {
        self.render_at(&clock::now())
    }

    /// Same as [`DesktopApp::render`] with the clock fixed at `now`
    pub fn render_at(&self, now: &NaiveDateTime) -> String {
        let mut out = top_bar::render(&self.sections, &self.ctx.navigation.state(), &self.ctx.settings.state());
        out.push('\n');
        out.push_str(&"-".repeat(72));
        out.push('\n');
        out.push_str(&self.sidebar.render().to_string());
        out.push('\n');
        out.push_str(&self.main_panel.render().to_string());
        out.push('\n');
        out.push_str(&Self::rail(now).to_string());
        out
    }

    /// Clock, quick links and profile card
    pub fn rail(now: &NaiveDateTime) -> PanelView {
        clock::render(now)
            .blank()
            .extend(quick_links::render())
            .blank()
            .extend(profile::render())
    }

    fn help(&self) -> String {
        let mut out = String::from("Shell commands:\n");
        for (usage, what) in SHELL_COMMANDS {
            let _ = writeln!(out, "  {:<22} {}", usage, what);
        }
        let screen = self.main_panel.screen_commands();
        if !screen.is_empty() {
            let _ = writeln!(out, "{} commands:", self.main_panel.active().title());
            for usage in screen {
                let _ = writeln!(out, "  {}", usage);
            }
        }
        out
    }

    fn describe_sections(&self) -> String {
        let active = self.ctx.navigation.active_panel();
        let mut out = String::new();
        for section in self.sections.sections() {
            let marker = if section.id == active { '>' } else { ' ' };
            let installed = if self.is_installed(&section.component) { "" } else { "  (not installed)" };
            let _ = writeln!(
                out,
                "{} {:<10} {:<6} {:<12}{}",
                marker, section.id, section.icon, section.component, installed
            );
        }
        out
    }

    fn describe_attributes(&self) -> String {
        let attributes = self.surface.attributes();
        if attributes.is_empty() {
            return "(no attributes)".to_string();
        }
        attributes
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// COMMAND HANDLING
// ============================================================================

impl DesktopApp {
    /// Run one line from the command loop
    pub fn execute(&self, line: &str) -> CommandOutcome {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return CommandOutcome::Continue(None);
        };
        ::log::debug!("Command: {} {:?}", verb, args);

        match (*verb, args) {
            ("nav", [panel_id]) => self.navigate(panel_id),
            ("back", []) => {
                if self.main_panel.go_back() {
                    CommandOutcome::Continue(None)
                } else {
                    CommandOutcome::message("No project detail is open.")
                }
            }
            ("sound", []) => {
                top_bar::toggle_sound(&self.ctx.settings, &self.ctx.sound);
                let state = if self.ctx.settings.sound_enabled() { "on" } else { "off" };
                CommandOutcome::message(format!("Sound {}", state))
            }
            ("theme", [name]) => match theme_control::apply_scheme(&self.ctx.settings, name) {
                Ok(scheme) => CommandOutcome::message(format!("Theme: {}", scheme.label())),
                Err(e) => CommandOutcome::message(e.to_string()),
            },
            ("scale", [value]) => match theme_control::apply_scale(&self.ctx.settings, value) {
                Ok(scale) => CommandOutcome::message(format!("Scale: {}", scale.label())),
                Err(e) => CommandOutcome::message(e.to_string()),
            },
            ("play", [kind]) => {
                self.ctx.sound.play_named(kind);
                CommandOutcome::Continue(None)
            }
            ("sections", []) => CommandOutcome::message(self.describe_sections()),
            ("themes", []) => CommandOutcome::message(theme_control::render(&self.ctx.settings).to_string()),
            ("attrs", []) => CommandOutcome::message(self.describe_attributes()),
            ("reset", []) => {
                self.ctx.settings.reset();
                self.ctx.navigation.reset();
                CommandOutcome::message("Settings and navigation reset.")
            }
            ("help", []) => CommandOutcome::message(self.help()),
            ("quit", []) | ("exit", []) => CommandOutcome::Quit,
            _ => {
                if self.main_panel.handle_command(verb, args) {
                    CommandOutcome::Continue(None)
                } else {
                    CommandOutcome::message(format!("Unknown command '{}', try 'help'.", line.trim()))
                }
            }
        }
    }

    fn navigate(&self, panel_id: &str) -> CommandOutcome {
        match self.sidebar.select(panel_id) {
            SidebarSelection::Unchanged => CommandOutcome::Continue(None),
            SidebarSelection::Navigated if self.sections.find_by_id(panel_id).is_none() => {
                CommandOutcome::message(format!("No module named '{}'.", panel_id))
            }
            SidebarSelection::Navigated => CommandOutcome::Continue(None),
        }
    }
}

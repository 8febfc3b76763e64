//! Module list on the left of the desktop

use am_core::{NavigationStore, SoundEffects, SoundKind};
use am_widgets::{PanelView, SectionRegistry};
use std::sync::Arc;

/// Outcome of picking a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSelection {
    /// Already active, nothing happened
    Unchanged,
    Navigated,
}

pub struct Sidebar {
    sections: Arc<SectionRegistry>,
    navigation: Arc<NavigationStore>,
    sound: Arc<SoundEffects>,
}

impl Sidebar {
    pub fn new(sections: Arc<SectionRegistry>, navigation: Arc<NavigationStore>, sound: Arc<SoundEffects>) -> Self {
        Self {
            sections,
            navigation,
            sound,
        }
    }

    /// Re-selecting the active module is a no-op
    pub fn select(&self, panel_id: &str) -> SidebarSelection {
        if self.navigation.active_panel() == panel_id {
            return SidebarSelection::Unchanged;
        }
        self.sound.play(SoundKind::Navigate);
        self.navigation.set_active_panel(panel_id);
        SidebarSelection::Navigated
    }

    pub fn footer(&self) -> String {
        format!("SYS {} modules loaded", self.sections.len())
    }

    pub fn render(&self) -> PanelView {
        let active = self.navigation.active_panel();
        let view = PanelView::new().line("// Modules");
        self.sections
            .sections()
            .iter()
            .fold(view, |view, section| {
                view.item(
                    section.id == active,
                    format!("{:<6} {:<9} {:<10} {}", section.icon, section.title, section.id, section.hint),
                )
            })
            .line(self.footer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_core::{DisabledAudioFactory, ManualScheduler};
    use am_widgets::PanelContext;

    fn sidebar() -> (Sidebar, PanelContext) {
        let ctx = PanelContext::ephemeral(Arc::new(ManualScheduler::new()), Box::new(DisabledAudioFactory));
        let sidebar = Sidebar::new(
            Arc::new(SectionRegistry::builtin()),
            ctx.navigation.clone(),
            ctx.sound.clone(),
        );
        (sidebar, ctx)
    }

    #[test]
    fn test_select_navigates() {
        let (sidebar, ctx) = sidebar();
        assert_eq!(sidebar.select("blog"), SidebarSelection::Navigated);
        assert_eq!(ctx.navigation.active_panel(), "blog");
    }

    #[test]
    fn test_reselect_keeps_detail_open() {
        let (sidebar, ctx) = sidebar();
        sidebar.select("portfolio");
        ctx.navigation.open_project_detail("repos");

        assert_eq!(sidebar.select("portfolio"), SidebarSelection::Unchanged);
        assert_eq!(ctx.navigation.state().active_project_id.as_deref(), Some("repos"));
    }

    #[test]
    fn test_render_marks_active() {
        let (sidebar, _ctx) = sidebar();
        let view = sidebar.render();
        assert_eq!(view.lines()[1], format!("> {:<6} {:<9} {:<10} {}", "[USR]", "User", "about-me", "Neural profile & capabilities"));
        assert!(view.contains("SYS 5 modules loaded"));
    }
}

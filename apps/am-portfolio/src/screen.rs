//! Portfolio screen - project grid with a preview pane

use crate::projects::{find_project, Project, PROJECTS};
use am_core::SoundKind;
use am_widgets::{PanelContext, PanelScreen, PanelView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Icons,
    List,
}

impl ViewMode {
    fn parse(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "icons" | "grid" => Some(ViewMode::Icons),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

pub struct PortfolioScreen {
    ctx: PanelContext,
    view_mode: ViewMode,
    selected: Option<&'static Project>,
}

impl PortfolioScreen {
    pub fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            view_mode: ViewMode::default(),
            selected: None,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    /// Open the drill-down for `id`
    pub fn open(&mut self, id: &str) -> bool {
        match find_project(id) {
            Some(project) => {
                self.selected = Some(project);
                self.ctx.sound.play(SoundKind::Open);
                self.ctx.navigation.open_project_detail(project.id);
                true
            }
            None => {
                ::log::debug!("No project '{}'", id);
                self.ctx.sound.play(SoundKind::Error);
                false
            }
        }
    }

    fn is_selected(&self, project: &Project) -> bool {
        self.selected.is_some_and(|selected| selected.id == project.id)
    }

    fn render_icons(&self, view: PanelView) -> PanelView {
        PROJECTS.iter().fold(view, |view, project| {
            view.item(
                self.is_selected(project),
                format!("[{}] {:<16} {}", project.icon, project.name, project.status),
            )
        })
    }

    fn render_list(&self, view: PanelView) -> PanelView {
        let header = view.line(format!("  {:<16} {:<12} {}", "Name", "Status", "Tech"));
        PROJECTS.iter().fold(header, |view, project| {
            let tech: Vec<&str> = project.tech.iter().map(|(name, _)| *name).collect();
            view.item(
                self.is_selected(project),
                format!("{:<16} {:<12} {}", project.name, project.status, tech.join(", ")),
            )
        })
    }
}

impl PanelScreen for PortfolioScreen {
    fn render(&self) -> PanelView {
        let toolbar = match self.view_mode {
            ViewMode::Icons => "[GRID]  LIST ",
            ViewMode::List => " GRID  [LIST]",
        };
        let view = PanelView::new().line(toolbar).blank();
        let mut view = match self.view_mode {
            ViewMode::Icons => self.render_icons(view),
            ViewMode::List => self.render_list(view),
        };

        if let Some(project) = self.selected {
            let tech: Vec<&str> = project.tech.iter().take(3).map(|(name, _)| *name).collect();
            view = view
                .blank()
                .line(format!("[{}] {}", project.icon, project.name))
                .line(project.summary)
                .line(tech.join(" · "));
        }

        let status = match self.selected {
            Some(project) => format!("> {}", project.name),
            None => "> select a project".to_string(),
        };
        view.blank().line(format!("{} project(s)  {}", PROJECTS.len(), status))
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("view", [mode]) => match ViewMode::parse(mode) {
                Some(mode) => {
                    self.view_mode = mode;
                    true
                }
                None => false,
            },
            ("select", [id]) => match find_project(id) {
                Some(project) => {
                    self.selected = Some(project);
                    true
                }
                None => false,
            },
            ("open", [id]) => {
                self.open(id);
                true
            }
            ("open", []) => match self.selected {
                Some(project) => {
                    self.open(project.id);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &["view <icons|list>", "select <id>", "open [id]"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_core::{DisabledAudioFactory, ManualScheduler};
    use std::sync::Arc;

    fn screen() -> PortfolioScreen {
        let ctx = PanelContext::ephemeral(Arc::new(ManualScheduler::new()), Box::new(DisabledAudioFactory));
        ctx.navigation.set_active_panel("portfolio");
        PortfolioScreen::new(ctx)
    }

    #[test]
    fn test_grid_lists_all_projects() {
        let portfolio = screen();
        let view = portfolio.render();
        for project in &PROJECTS {
            assert!(view.contains(project.name));
        }
        assert!(view.contains("5 project(s)  > select a project"));
    }

    #[test]
    fn test_select_shows_preview() {
        let mut portfolio = screen();
        assert!(portfolio.handle_command("select", &["clearpath"]));
        let view = portfolio.render();
        assert!(view.contains("> [CLR] ClearPath"));
        assert!(view.contains("> ClearPath"));
        assert_eq!(portfolio.ctx.navigation.state().active_project_id, None);
    }

    #[test]
    fn test_open_drills_down() {
        let mut portfolio = screen();
        assert!(portfolio.handle_command("open", &["flowspace"]));
        let state = portfolio.ctx.navigation.state();
        assert_eq!(state.active_panel, "portfolio");
        assert_eq!(state.active_project_id.as_deref(), Some("flowspace"));
    }

    #[test]
    fn test_open_selected_and_unknown() {
        let mut portfolio = screen();
        assert!(!portfolio.handle_command("open", &[]));

        assert!(portfolio.handle_command("open", &["nope"]));
        assert_eq!(portfolio.ctx.navigation.state().active_project_id, None);

        portfolio.handle_command("select", &["repos"]);
        assert!(portfolio.handle_command("open", &[]));
        assert_eq!(portfolio.ctx.navigation.state().active_project_id.as_deref(), Some("repos"));
    }

    #[test]
    fn test_list_mode() {
        let mut portfolio = screen();
        assert!(portfolio.handle_command("view", &["list"]));
        assert_eq!(portfolio.view_mode(), ViewMode::List);
        assert!(portfolio.render().contains("Next.js 15, TypeScript"));
        assert!(!portfolio.handle_command("view", &["tiles"]));
    }
}

//! Project detail - drill-down view for one project

use crate::projects::{find_project, Project, DEFAULT_PROJECT, PROJECTS};
use am_widgets::{PanelScreen, PanelView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Overview,
    Features,
    TechStack,
    Philosophy,
}

impl DetailTab {
    const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Features,
        DetailTab::TechStack,
        DetailTab::Philosophy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Features => "Features",
            DetailTab::TechStack => "Tech Stack",
            DetailTab::Philosophy => "Philosophy",
        }
    }
}

pub struct ProjectDetailScreen {
    project: &'static Project,
    active_tab: DetailTab,
}

impl ProjectDetailScreen {
    /// Unknown ids show the default project
    pub fn new(project_id: &str) -> Self {
        let project = find_project(project_id)
            .or_else(|| {
                ::log::debug!("Unknown project '{}', showing '{}'", project_id, DEFAULT_PROJECT);
                find_project(DEFAULT_PROJECT)
            })
            .unwrap_or(&PROJECTS[0]);

        Self {
            project,
            active_tab: DetailTab::Overview,
        }
    }

    pub fn project(&self) -> &'static Project {
        self.project
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    /// Philosophy is only offered when the project has one
    pub fn tabs(&self) -> Vec<DetailTab> {
        let count = if self.project.philosophy.is_some() { 4 } else { 3 };
        DetailTab::ALL[..count].to_vec()
    }

    fn parse_tab(&self, arg: &str) -> Option<DetailTab> {
        let tabs = self.tabs();
        if let Ok(n) = arg.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| tabs.get(i).copied());
        }
        let wanted = arg.replace(|c: char| c == '-' || c == '_', " ");
        tabs.into_iter().find(|tab| {
            tab.label().eq_ignore_ascii_case(&wanted)
                || tab
                    .label()
                    .split(' ')
                    .next()
                    .is_some_and(|first| first.eq_ignore_ascii_case(arg))
        })
    }
}

impl PanelScreen for ProjectDetailScreen {
    fn render(&self) -> PanelView {
        let project = self.project;
        let tab_bar = self
            .tabs()
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.label().to_uppercase())
                } else {
                    format!(" {} ", tab.label().to_uppercase())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let view = PanelView::new()
            .line(format!("[{}] {}  ({})", project.icon, project.name, project.status))
            .line(project.tagline)
            .blank()
            .line(tab_bar)
            .blank();

        match self.active_tab {
            DetailTab::Overview => {
                let view = view.line(project.description);
                if project.links.is_empty() {
                    view
                } else {
                    project
                        .links
                        .iter()
                        .fold(view.blank(), |view, (label, icon)| view.line(format!("[{}] {}", icon, label)))
                }
            }
            DetailTab::Features => project
                .features
                .iter()
                .fold(view, |view, feature| view.line(format!("> {}", feature))),
            DetailTab::TechStack => project
                .tech
                .iter()
                .fold(view, |view, (name, icon)| view.line(format!("[{}] {}", icon, name))),
            DetailTab::Philosophy => view.line(format!("\"{}\"", project.philosophy.unwrap_or_default())),
        }
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("tab", [arg]) => match self.parse_tab(arg) {
                Some(tab) => {
                    self.active_tab = tab;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &["tab <1-4|name>"]
    }
}

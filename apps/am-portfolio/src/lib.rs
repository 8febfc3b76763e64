//! AM Portfolio - project grid and the project drill-down
//!
//! The grid opens a project through the navigation store; the main panel then
//! mounts [`ProjectDetailApp`] with the project id.

pub mod detail;
pub mod projects;
pub mod screen;

pub use detail::{DetailTab, ProjectDetailScreen};
pub use projects::{find_project, Project, ProjectStatus, DEFAULT_PROJECT, PROJECTS};
pub use screen::{PortfolioScreen, ViewMode};

use am_widgets::{DetailApp, DetailProps, PanelApp, PanelContext, PanelInfo, PanelScreen};

/// Portfolio panel descriptor
pub struct PortfolioApp;

impl PanelApp for PortfolioApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "Projects",
            component: "Portfolio",
            description: "Deployed systems & builds",
        }
    }

    fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(PortfolioScreen::new(ctx.clone()))
    }
}

/// Project drill-down descriptor
pub struct ProjectDetailApp;

impl DetailApp for ProjectDetailApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "Project",
            component: "ProjectDetail",
            description: "Single project overview, features, stack and philosophy",
        }
    }

    fn mount(_ctx: &PanelContext, props: DetailProps) -> Box<dyn PanelScreen> {
        Box::new(ProjectDetailScreen::new(&props.project_id))
    }
}

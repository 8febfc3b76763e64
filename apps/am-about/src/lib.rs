//! AM About - profile panel and the "now" status page

pub mod now;
pub mod screen;

pub use now::NowScreen;
pub use screen::{AboutScreen, AboutTab};

use am_widgets::{PanelApp, PanelContext, PanelInfo, PanelScreen};

/// About panel descriptor
pub struct AboutApp;

impl PanelApp for AboutApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "User",
            component: "AboutMe",
            description: "Profile, skills, journey and channels",
        }
    }

    fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(AboutScreen::new(ctx.clone()))
    }
}

/// Now page descriptor
///
/// Registered as a component but not listed in the default sections.
pub struct NowApp;

impl PanelApp for NowApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "System Status",
            component: "NowPage",
            description: "What is being built, read and practiced right now",
        }
    }

    fn mount(_ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(NowScreen)
    }
}

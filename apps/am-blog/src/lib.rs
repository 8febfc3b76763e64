//! AM Blog - transmission logs

pub mod posts;
pub mod screen;

pub use posts::{posts, BlogPost};
pub use screen::BlogScreen;

use am_widgets::{PanelApp, PanelContext, PanelInfo, PanelScreen};

/// Blog panel descriptor
pub struct BlogApp;

impl PanelApp for BlogApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "Notes",
            component: "Blog",
            description: "Transmission logs & ideas",
        }
    }

    fn mount(_ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(BlogScreen::new())
    }
}

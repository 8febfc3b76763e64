//! AM Contact - comm channel form

pub mod form;
pub mod screen;

pub use form::{ContactForm, FormField, SendStatus, ValidationError};
pub use screen::{ContactScreen, SEND_DELAY};

use am_widgets::{PanelApp, PanelContext, PanelInfo, PanelScreen};

/// Contact panel descriptor
pub struct ContactApp;

impl PanelApp for ContactApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "Contact",
            component: "Contact",
            description: "Open a comm channel",
        }
    }

    fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(ContactScreen::new(ctx.clone()))
    }
}

//! AM Forge - weekly training plan, fuel, supplements and body stats

pub mod data;
pub mod lookup;
pub mod screen;
pub mod stats;

pub use lookup::{exercise_entry, exercise_info, ExerciseInfo, EXERCISES};
pub use screen::{ForgeScreen, SidePanel};
pub use stats::{ForgeData, ForgeLog, ForgeProfile, FORGE_DATA_KEY};

use am_widgets::{PanelApp, PanelContext, PanelInfo, PanelScreen};

/// FORGE panel descriptor
pub struct ForgeApp;

impl PanelApp for ForgeApp {
    fn info() -> PanelInfo {
        PanelInfo {
            name: "FORGE",
            component: "ForgeHealth",
            description: "Training plan, nutrition and body stats",
        }
    }

    fn mount(ctx: &PanelContext) -> Box<dyn PanelScreen> {
        Box::new(ForgeScreen::new(ctx))
    }
}

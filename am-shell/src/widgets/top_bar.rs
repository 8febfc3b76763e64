//! Title bar: breadcrumb of the active module plus sound and theme state

use am_core::{NavigationState, SettingsState, SettingsStore, SoundEffects, SoundKind};
use am_widgets::SectionRegistry;

pub const SITE_TITLE: &str = "AMARTEL.OS";

/// Breadcrumb for the active module
///
/// `Projects > PROJECT_DETAIL` inside a drill-down, the upper-cased title
/// otherwise, `SYSTEM` for an unknown panel.
pub fn display_module(sections: &SectionRegistry, navigation: &NavigationState) -> String {
    let section = sections.find_by_id(&navigation.active_panel);
    match (&navigation.active_project_id, section) {
        (Some(_), section) => format!("{} > PROJECT_DETAIL", section.map_or("", |s| s.title.as_str())),
        (None, Some(section)) => section.title.to_uppercase(),
        (None, None) => "SYSTEM".to_string(),
    }
}

pub fn render(sections: &SectionRegistry, navigation: &NavigationState, settings: &SettingsState) -> String {
    let sound = if settings.sound_enabled { "SND" } else { "MUT" };
    format!(
        "{}  |  {}  |  {}  {} {}  Online",
        SITE_TITLE,
        display_module(sections, navigation),
        sound,
        settings.color_scheme.label(),
        settings.ui_scale.label()
    )
}

/// Sound button: flip the setting, then click (heard only when turning on)
pub fn toggle_sound(settings: &SettingsStore, sound: &SoundEffects) {
    settings.toggle_sound();
    sound.play(SoundKind::Click);
}

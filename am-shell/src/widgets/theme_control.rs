//! Theme picker: six color schemes and five UI scales

use am_core::{ColorScheme, SettingsError, SettingsStore, UiScale};
use am_widgets::PanelView;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ThemeInputError {
    #[error(transparent)]
    Rejected(#[from] SettingsError),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Apply a scheme by its wire name (`matrix`, `neon-cyber`, ...)
pub fn apply_scheme(settings: &SettingsStore, name: &str) -> Result<ColorScheme, ThemeInputError> {
    settings.set_color_scheme_named(name)?;
    Ok(settings.state().color_scheme)
}

/// Apply a scale given as a number (`1.1`) or a label (`XL`)
pub fn apply_scale(settings: &SettingsStore, input: &str) -> Result<UiScale, ThemeInputError> {
    if let Some(scale) = UiScale::ALL.into_iter().find(|s| s.label().eq_ignore_ascii_case(input)) {
        settings.set_ui_scale(scale);
        return Ok(scale);
    }
    let value: f64 = input
        .parse()
        .map_err(|_| ThemeInputError::NotANumber(input.to_string()))?;
    settings.set_ui_scale_value(value)?;
    Ok(settings.state().ui_scale)
}

pub fn render(settings: &SettingsStore) -> PanelView {
    let state = settings.state();
    let view = ColorScheme::ALL
        .into_iter()
        .fold(PanelView::new().heading("Theme"), |view, scheme| {
            view.item(
                scheme == state.color_scheme,
                format!("{:<16} {}", scheme.label(), scheme.as_str()),
            )
        });

    let scales = UiScale::ALL
        .iter()
        .map(|scale| {
            if *scale == state.ui_scale {
                format!("[{}]", scale.label())
            } else {
                format!(" {} ", scale.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    view.blank().line(format!("Scale  {}", scales))
}

//! AM desktop shell
//!
//! Wires the stores from `am-core` and the panel apps into a text desktop:
//! a top bar, the module sidebar and the main panel, driven by a command loop.

pub mod app;
pub mod config;
pub mod widgets;

pub use app::{installed_components, CommandOutcome, DesktopApp};
pub use config::{ConfigError, ShellConfig};

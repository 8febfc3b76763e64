//! Shell widgets drawn around the main panel

pub mod boot;
pub mod clock;
pub mod profile;
pub mod quick_links;
pub mod sidebar;
pub mod theme_control;
pub mod top_bar;

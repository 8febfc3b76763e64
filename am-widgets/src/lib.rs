//! # AM Widgets
//!
//! Panel plumbing shared by the AM desktop shell and its apps.
//!
//! ## Modules
//!
//! - [`sections`] - ordered section catalogue ([`SectionRegistry`])
//! - [`app_trait`] - collaborator panel interface (`PanelApp`, `DetailApp`, `ComponentRegistry`)
//! - [`main_panel`] - resolves navigation state to the mounted screen
//!
//! ## Panel Apps
//!
//! Apps implement [`PanelApp`] and are registered by component name:
//!
//! ```rust,ignore
//! use am_widgets::{ComponentRegistry, MainPanel, SectionRegistry};
//!
//! let mut components = ComponentRegistry::new();
//! components.register::<am_blog::BlogApp>();
//!
//! let panel = MainPanel::attach(
//!     Arc::new(SectionRegistry::builtin()),
//!     Arc::new(components),
//!     ctx,
//! );
//! println!("{}", panel.render());
//! ```

pub mod app_trait;
pub mod main_panel;
pub mod sections;

// Re-export app trait types for convenience
pub use app_trait::{
    ComponentRegistry, DetailApp, DetailProps, PanelApp, PanelContext, PanelInfo, PanelScreen, PanelView,
};
pub use main_panel::{resolve, MainPanel, PanelFrame, Resolution, FALLBACK_TITLE, SETTLE_DURATION};
pub use sections::{RegistryError, SectionDescriptor, SectionRegistry};

//! # Section Registry
//!
//! The ordered catalogue of navigable panels. Insertion order is display order
//! in the sidebar. The registry is validated once at construction and never
//! changes afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Rejected section configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section list is empty")]
    Empty,

    #[error("duplicate section id: {0}")]
    DuplicateId(String),

    #[error("section id must not be blank")]
    BlankId,
}

/// Static metadata for one panel
///
/// Styling tokens are opaque here and handed through to the panel frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Name of the component mounted for this section
    pub component: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub accent_color: String,
    #[serde(default)]
    pub glow_color: String,
    #[serde(default)]
    pub accent_rgb: String,
    /// Whether a project drill-down can open inside this panel
    #[serde(default)]
    pub drill_down: bool,
}

impl SectionDescriptor {
    fn builtin(id: &str, title: &str, icon: &str, component: &str, hint: &str, accent: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            component: component.to_string(),
            hint: hint.to_string(),
            accent_color: format!("var(--accent-{})", accent),
            glow_color: format!("var(--glow-{})", accent),
            accent_rgb: format!("var(--accent-{}-rgb)", accent),
            drill_down: false,
        }
    }

    fn with_drill_down(mut self) -> Self {
        self.drill_down = true;
        self
    }
}

static BUILTIN_SECTIONS: Lazy<Vec<SectionDescriptor>> = Lazy::new(|| {
    vec![
        SectionDescriptor::builtin("about-me", "User", "[USR]", "AboutMe", "Neural profile & capabilities", "cyan"),
        SectionDescriptor::builtin("portfolio", "Projects", "[PRJ]", "Portfolio", "Deployed systems & builds", "amber")
            .with_drill_down(),
        SectionDescriptor::builtin("blog", "Notes", "[LOG]", "Blog", "Transmission logs & ideas", "green"),
        SectionDescriptor::builtin("contact", "Contact", "[COM]", "Contact", "Open a comm channel", "magenta"),
        SectionDescriptor::builtin("forge", "FORGE", "[FRG]", "ForgeHealth", "Current health routine", "orange"),
    ]
});

/// Ordered, validated list of sections
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Validate and wrap a section list
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if section.id.trim().is_empty() {
                return Err(RegistryError::BlankId);
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateId(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// The five built-in desktop sections
    pub fn builtin() -> Self {
        Self {
            sections: BUILTIN_SECTIONS.clone(),
        }
    }

    /// Use `configured` when it validates, else the built-ins
    pub fn from_config_or_builtin(configured: Option<Vec<SectionDescriptor>>) -> Self {
        match configured.map(Self::new) {
            Some(Ok(registry)) => registry,
            Some(Err(e)) => {
                ::log::warn!("Ignoring configured sections: {}, using built-ins", e);
                Self::builtin()
            }
            None => Self::builtin(),
        }
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn find_by_id(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Position of `id` in display order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let registry = SectionRegistry::builtin();
        let ids: Vec<&str> = registry.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["about-me", "portfolio", "blog", "contact", "forge"]);
        assert_eq!(registry.index_of("contact"), Some(3));
    }

    #[test]
    fn test_only_portfolio_drills_down() {
        let registry = SectionRegistry::builtin();
        let drill: Vec<&str> = registry
            .sections()
            .iter()
            .filter(|s| s.drill_down)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(drill, vec!["portfolio"]);
    }

    #[test]
    fn test_lookup() {
        let registry = SectionRegistry::builtin();
        let forge = registry.find_by_id("forge").unwrap();
        assert_eq!(forge.component, "ForgeHealth");
        assert_eq!(forge.accent_color, "var(--accent-orange)");
        assert!(registry.find_by_id("settings").is_none());
    }

    #[test]
    fn test_validation() {
        assert_eq!(SectionRegistry::new(vec![]).unwrap_err(), RegistryError::Empty);

        let blog = SectionRegistry::builtin().find_by_id("blog").cloned().unwrap();
        let err = SectionRegistry::new(vec![blog.clone(), blog.clone()]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("blog".into()));

        let mut blank = blog;
        blank.id = "  ".into();
        assert_eq!(SectionRegistry::new(vec![blank]).unwrap_err(), RegistryError::BlankId);
    }

    #[test]
    fn test_config_fallback() {
        assert_eq!(SectionRegistry::from_config_or_builtin(Some(vec![])).len(), 5);

        let json = r#"[{"id":"blog","title":"Notes","icon":"[LOG]","component":"Blog"}]"#;
        let sections: Vec<SectionDescriptor> = serde_json::from_str(json).unwrap();
        let registry = SectionRegistry::from_config_or_builtin(Some(sections));
        assert_eq!(registry.len(), 1);
        assert!(!registry.sections()[0].drill_down);
        assert_eq!(registry.sections()[0].hint, "");
    }
}

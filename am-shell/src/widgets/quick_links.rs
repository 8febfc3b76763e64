//! Quick links widget

use am_widgets::PanelView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub icon: &'static str,
    pub label: &'static str,
    /// `#` when the link has no target yet
    pub href: &'static str,
}

impl QuickLink {
    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }

    /// Where the link goes, if anywhere
    pub fn target(&self) -> Option<&'static str> {
        match self.href {
            "#" | "" => None,
            href => Some(href.strip_prefix("mailto:").unwrap_or(href)),
        }
    }
}

pub const LINKS: [QuickLink; 4] = [
    QuickLink {
        icon: "WEB",
        label: "Website",
        href: "#",
    },
    QuickLink {
        icon: "X",
        label: "Twitter / X",
        href: "#",
    },
    QuickLink {
        icon: "LNK",
        label: "LinkedIn",
        href: "#",
    },
    QuickLink {
        icon: "MSG",
        label: "Email",
        href: "mailto:hello@alexmartel.com",
    },
];

pub fn render() -> PanelView {
    LINKS
        .iter()
        .fold(PanelView::new().heading("[LNK] Quick Links"), |view, link| {
            let icon = format!("[{}]", link.icon);
            match link.target() {
                Some(target) => view.line(format!("{:<5} {:<12} {}", icon, link.label, target)),
                None => view.line(format!("{:<5} {}", icon, link.label)),
            }
        })
}

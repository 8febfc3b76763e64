//! Mini profile card

use am_widgets::PanelView;

pub const INITIALS: &str = "AM";
pub const NAME: &str = "Alex Martel";
pub const ROLE: &str = "Creator · Builder";
pub const TAGS: [&str; 3] = ["Dev", "Coach", "Design"];

pub fn render() -> PanelView {
    let tags = TAGS
        .iter()
        .map(|tag| format!("[{}]", tag.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ");
    PanelView::new()
        .heading("[USR] Profile")
        .line(format!("({})", INITIALS))
        .line(NAME.to_uppercase())
        .line(ROLE)
        .line(tags)
}

//! Blog screen - post list with a reading pane

use crate::posts::{find_post, posts, BlogPost};
use am_widgets::{PanelScreen, PanelView};

#[derive(Default)]
pub struct BlogScreen {
    selected: Option<&'static BlogPost>,
    tag_filter: Option<String>,
}

impl BlogScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&'static BlogPost> {
        self.selected
    }

    /// Posts passing the tag filter, newest first
    pub fn visible_posts(&self) -> Vec<&'static BlogPost> {
        posts()
            .iter()
            .filter(|post| self.tag_filter.as_deref().map_or(true, |tag| post.has_tag(tag)))
            .collect()
    }
}

impl PanelScreen for BlogScreen {
    fn render(&self) -> PanelView {
        let mut view = PanelView::new().line("// Transmission Logs");
        if let Some(tag) = &self.tag_filter {
            view = view.line(format!("// filter: #{}", tag));
        }
        view = view.blank().line(format!("  {:<54} {:<13} {}", "Title", "Date", "Tags"));

        let visible = self.visible_posts();
        for post in &visible {
            let active = self.selected.is_some_and(|selected| selected.id == post.id);
            view = view.item(
                active,
                format!("{:<54} {:<13} {}", post.title, post.display_date(), post.tags.join(" ")),
            );
        }

        if let Some(post) = self.selected {
            view = view
                .blank()
                .line(post.title)
                .line(post.display_date())
                .line(post.excerpt)
                .line(post.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" "));
        }

        view.blank().line(format!("{} log(s) found", visible.len()))
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("read", [id]) => match find_post(id) {
                Some(post) => {
                    self.selected = Some(post);
                    true
                }
                None => false,
            },
            ("list", []) => {
                self.selected = None;
                true
            }
            ("tag", [tag]) => {
                self.tag_filter = Some(tag.to_string());
                if self.selected.is_some_and(|post| !post.has_tag(tag)) {
                    self.selected = None;
                }
                true
            }
            ("tag", []) => {
                self.tag_filter = None;
                true
            }
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &["read <id>", "list", "tag [name]"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_posts() {
        let blog = BlogScreen::new();
        let view = blog.render();
        assert!(view.contains("4 log(s) found"));
        assert!(view.contains("Jan 15, 2025"));
    }

    #[test]
    fn test_read_and_back_to_list() {
        let mut blog = BlogScreen::new();
        assert!(blog.handle_command("read", &["micro-workouts"]));
        assert!(blog.render().contains("#fitness #habits #repos"));

        assert!(!blog.handle_command("read", &["missing"]));
        assert_eq!(blog.selected().map(|p| p.id), Some("micro-workouts"));

        assert!(blog.handle_command("list", &[]));
        assert!(blog.selected().is_none());
    }

    #[test]
    fn test_tag_filter() {
        let mut blog = BlogScreen::new();
        blog.handle_command("read", &["terminal-design"]);
        assert!(blog.handle_command("tag", &["flow"]));
        assert_eq!(blog.visible_posts().len(), 1);
        assert!(blog.selected().is_none());
        assert!(blog.render().contains("1 log(s) found"));

        blog.handle_command("tag", &[]);
        assert_eq!(blog.visible_posts().len(), 4);
    }
}

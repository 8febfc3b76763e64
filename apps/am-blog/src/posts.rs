//! Blog post catalogue, newest first

use chrono::NaiveDate;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    /// "Jan 15, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// (id, title, ISO date, excerpt, tags)
type RawPost = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str]);

const RAW_POSTS: [RawPost; 4] = [
    (
        "flow-states-101",
        "Flow States 101: The Science Behind Peak Performance",
        "2025-01-15",
        "Understanding the neurochemistry of flow and how to trigger it consistently in your daily work...",
        &["flow", "productivity", "science"],
    ),
    (
        "fourflow-introduction",
        "Introducing the FourFlow Framework",
        "2025-01-10",
        "Spirit, Story, Space, Self - a holistic approach to designing your life for maximum flow...",
        &["fourflow", "philosophy", "framework"],
    ),
    (
        "micro-workouts",
        "The Power of Micro-Workouts",
        "2025-01-05",
        "Why distributed movement throughout the day beats traditional gym sessions for most people...",
        &["fitness", "habits", "repos"],
    ),
    (
        "terminal-design",
        "Terminal Aesthetics in Modern Apps",
        "2024-12-28",
        "Exploring the psychological impact of minimalist, terminal-inspired user interfaces...",
        &["design", "ux", "minimalism"],
    ),
];

static POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    let mut posts: Vec<BlogPost> = RAW_POSTS
        .iter()
        .filter_map(|&(id, title, date, excerpt, tags)| match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(date) => Some(BlogPost {
                id,
                title,
                date,
                excerpt,
                tags,
            }),
            Err(e) => {
                ::log::warn!("Skipping post '{}' with bad date '{}': {}", id, date, e);
                None
            }
        })
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
});

/// All posts, newest first
pub fn posts() -> &'static [BlogPost] {
    &POSTS
}

pub fn find_post(id: &str) -> Option<&'static BlogPost> {
    posts().iter().find(|post| post.id == id)
}

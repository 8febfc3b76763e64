//! Now page - current processes

use am_widgets::{PanelScreen, PanelView};

struct NowSection {
    title: &'static str,
    icon: &'static str,
    items: [&'static str; 3],
}

const NOW_SECTIONS: [NowSection; 4] = [
    NowSection {
        title: "Building",
        icon: "BLD",
        items: [
            "FourFlowOS: this neural interface",
            "REP.OS: micro-workout tracker (beta)",
            "FlowSpace: focus & productivity PWA",
        ],
    },
    NowSection {
        title: "Reading",
        icon: "LOG",
        items: [
            "Flow by Mihaly Csikszentmihalyi",
            "Refactoring UI by Adam Wathan",
            "The Almanack of Naval Ravikant",
        ],
    },
    NowSection {
        title: "Practicing",
        icon: "PRC",
        items: [
            "Morning flow rituals",
            "Micro-workouts throughout the day",
            "Evening reflection journaling",
        ],
    },
    NowSection {
        title: "Exploring",
        icon: "EXP",
        items: [
            "Procedural audio for generative soundscapes",
            "CSS-only animation techniques",
            "Minimalist design philosophy",
        ],
    },
];

/// Stateless status page
pub struct NowScreen;

impl PanelScreen for NowScreen {
    fn render(&self) -> PanelView {
        let header = PanelView::new()
            .heading("System Status")
            .line("// Current processes. Updated regularly.");

        NOW_SECTIONS.iter().fold(header, |view, section| {
            let view = view.blank().line(format!("[{}] {}", section.icon, section.title));
            section
                .items
                .iter()
                .fold(view, |view, item| view.line(format!("  - {}", item)))
        })
    }
}

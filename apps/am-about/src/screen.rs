//! About screen - tabbed profile

use am_widgets::{PanelContext, PanelScreen, PanelView};

/// Tabs in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    About,
    Skills,
    Journey,
    Connect,
}

impl AboutTab {
    pub const ALL: [AboutTab; 4] = [AboutTab::About, AboutTab::Skills, AboutTab::Journey, AboutTab::Connect];

    pub fn label(&self) -> &'static str {
        match self {
            AboutTab::About => "About",
            AboutTab::Skills => "Skills",
            AboutTab::Journey => "Journey",
            AboutTab::Connect => "Connect",
        }
    }

    /// Parse a 1-based index or a tab name
    pub fn parse(arg: &str) -> Option<Self> {
        if let Ok(n) = arg.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|tab| tab.label().eq_ignore_ascii_case(arg))
    }
}

const SKILLS: [(&str, u8); 6] = [
    ("React / Next.js", 95),
    ("TypeScript", 90),
    ("React Native", 85),
    ("Node.js", 80),
    ("Tailwind CSS", 95),
    ("Firebase / Supabase", 85),
];

const PHILOSOPHY: [&str; 6] = [
    "Flow States",
    "Energy Mgmt",
    "Minimalist UX",
    "User Psych",
    "PWA Dev",
    "Agile/Lean",
];

const JOURNEY: [(&str, &str, &str); 5] = [
    (
        "2024",
        "FourFlow Framework",
        "Synthesized years of research into a cohesive framework for cultivating flow states.",
    ),
    (
        "2024",
        "REP.OS Launch",
        "Built a minimalist fitness tracker that challenges the complexity of modern apps.",
    ),
    (
        "2023",
        "FlowSpace Development",
        "Started building productivity tools based on flow psychology.",
    ),
    (
        "2022",
        "Flow Research",
        "Deep dive into Csikszentmihalyi's work and modern flow science.",
    ),
    (
        "2020",
        "Full-Stack Journey",
        "Transitioned to building complete products from concept to deployment.",
    ),
];

const CHANNELS: [(&str, &str, &str); 4] = [
    ("WEB", "Website", "alexmartel.com"),
    ("X  ", "Twitter / X", "@alexmartel"),
    ("LNK", "LinkedIn", "/in/alexmartel"),
    ("MSG", "Email", "hello@alexmartel.com"),
];

/// Width of the skill bars in characters
const BAR_WIDTH: usize = 20;

pub struct AboutScreen {
    ctx: PanelContext,
    active_tab: AboutTab,
}

impl AboutScreen {
    pub fn new(ctx: PanelContext) -> Self {
        Self {
            ctx,
            active_tab: AboutTab::About,
        }
    }

    pub fn active_tab(&self) -> AboutTab {
        self.active_tab
    }

    fn tab_bar(&self) -> String {
        AboutTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.label().to_uppercase())
                } else {
                    format!(" {} ", tab.label().to_uppercase())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_about(view: PanelView) -> PanelView {
        view.line("Alex Martel")
            .line("Creator · Builder · Flow Engineer")
            .line("[Developer] [Coach] [Designer]")
            .blank()
            .heading("Bio")
            .line("My work sits at the intersection of technology, psychology, and mindful design.")
            .line("I design and develop digital products that help people achieve more with less friction.")
            .line("Creator of the FourFlow framework, a holistic approach to cultivating flow states")
            .line("through Spirit, Story, Space, and Self.")
            .blank()
            .line("\"My path has led me from the haze of hesitation to the clear rhythm of inspired action.\"")
    }

    fn render_skills(view: PanelView) -> PanelView {
        let view = SKILLS.iter().fold(view.heading("Technical Skills"), |view, (name, level)| {
            let filled = BAR_WIDTH * usize::from(*level) / 100;
            view.line(format!(
                "{:<20} {}{} {}%",
                name,
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                level
            ))
        });
        PHILOSOPHY
            .iter()
            .fold(view.blank().heading("Frameworks & Philosophy"), |view, item| {
                view.line(format!("> {}", item))
            })
    }

    fn render_journey(view: PanelView) -> PanelView {
        JOURNEY.iter().fold(
            view.line("// Timeline of pivotal moments that shaped my approach."),
            |view, (year, title, desc)| view.line(format!("{}  {}", year, title)).line(format!("      {}", desc)),
        )
    }

    fn render_connect(view: PanelView) -> PanelView {
        CHANNELS
            .iter()
            .fold(view.heading("Channels"), |view, (icon, label, value)| {
                view.line(format!("[{}] {:<12} {}", icon, label, value))
            })
            .blank()
            .line("[COM] Open Comm Channel  (contact)")
    }
}

impl PanelScreen for AboutScreen {
    fn render(&self) -> PanelView {
        let view = PanelView::new().line(self.tab_bar()).blank();
        match self.active_tab {
            AboutTab::About => Self::render_about(view),
            AboutTab::Skills => Self::render_skills(view),
            AboutTab::Journey => Self::render_journey(view),
            AboutTab::Connect => Self::render_connect(view),
        }
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("tab", [arg]) => match AboutTab::parse(arg) {
                Some(tab) => {
                    self.active_tab = tab;
                    true
                }
                None => false,
            },
            // The comm channel button only exists on the Connect tab
            ("contact", []) if self.active_tab == AboutTab::Connect => {
                ::log::debug!("Opening comm channel");
                self.ctx.navigation.set_active_panel("contact");
                true
            }
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &["tab <1-4|name>", "contact"]
    }
}

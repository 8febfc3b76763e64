//! Project catalogue

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Beta,
    Development,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "live",
            ProjectStatus::Beta => "beta",
            ProjectStatus::Development => "development",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A project with its grid summary and drill-down content
#[derive(Debug)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Grid preview text
    pub summary: &'static str,
    pub status: ProjectStatus,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// (name, icon)
    pub tech: &'static [(&'static str, &'static str)],
    /// (label, icon)
    pub links: &'static [(&'static str, &'static str)],
    pub philosophy: Option<&'static str>,
}

/// Shown when a drill-down asks for an unknown id
pub const DEFAULT_PROJECT: &str = "repos";

pub static PROJECTS: [Project; 5] = [
    Project {
        id: "repos",
        name: "REP.OS",
        icon: "RPT",
        summary: "Minimalist fitness tracking app with terminal aesthetics. \"REPS. LOGGED. DONE.\" Track micro-workouts throughout your day.",
        status: ProjectStatus::Beta,
        tagline: "REPS. LOGGED. DONE.",
        description: "A minimalist fitness tracking application with terminal aesthetics. REP.OS promotes micro-workouts distributed throughout the day rather than traditional gym session blocks.",
        features: &[
            "One-tap rep logging with animated feedback",
            "Personal records tracking with historical data",
            "Streak mechanics with target completion",
            "Terminal-inspired monospace UI",
            "PWA - installable on any device",
            "Offline-first with local storage",
            "CSV/JSON data export",
        ],
        tech: &[("Next.js 15", "NXT"), ("TypeScript", "TSC"), ("Tailwind CSS", "TWD"), ("PWA", "PWA")],
        links: &[("Live Demo", "WEB"), ("GitHub", "GIT")],
        philosophy: Some("Movement is identity. Every rep is a vote for the person you want to become."),
    },
    Project {
        id: "flowspace",
        name: "FlowSpace",
        icon: "FLW",
        summary: "Productivity PWA based on the FourFlow framework. Plan, Focus, Review with flow-optimized workflows.",
        status: ProjectStatus::Beta,
        tagline: "Plan. Focus. Review.",
        description: "A productivity PWA based on the FourFlow framework. FlowSpace helps you cultivate sustained focus through the PLAN, FOCUS, REVIEW workflow, counting each choice to stay focused as a \"Focus Rep\".",
        features: &[
            "Four-pillar structure (Spirit, Story, Space, Self)",
            "Focus Reps - gamified attention training",
            "Navigation Mode vs Focus Mode UI",
            "Local-first IndexedDB storage",
            "Privacy-focused, offline-capable",
            "Zen minimalist focus interface",
        ],
        tech: &[("React 18", "RCT"), ("Vite", "VTE"), ("Zustand", "ZST"), ("IndexedDB", "IDB")],
        links: &[("Live Demo", "WEB")],
        philosophy: Some("A focus muscle trainer, a meaning-maker, and a flow companion."),
    },
    Project {
        id: "clearpath",
        name: "ClearPath",
        icon: "CLR",
        summary: "Comprehensive smoking cessation app. Evidence-based approaches to breaking habits and building healthier ones.",
        status: ProjectStatus::Development,
        tagline: "Your journey to clarity.",
        description: "A smoking cessation app using evidence-based approaches to breaking habits. ClearPath combines behavioral science with compassionate design to support users through their quit journey.",
        features: &[
            "Personalized quit plan creation",
            "Craving management tools",
            "Progress tracking & milestones",
            "Health recovery timeline",
            "Money saved calculator",
            "Community support features",
        ],
        tech: &[("React Native", "RCN"), ("TypeScript", "TSC"), ("Expo", "EXP")],
        links: &[],
        philosophy: Some("Recovery is not linear. ClearPath meets you where you are."),
    },
    Project {
        id: "infinite-banker",
        name: "Infinite Banker",
        icon: "FIN",
        summary: "Financial education app teaching the infinite banking concept. Build wealth through strategic insurance products.",
        status: ProjectStatus::Development,
        tagline: "Be your own bank.",
        description: "A financial education app teaching the infinite banking concept: building wealth through whole life insurance policies and becoming your own source of financing.",
        features: &[
            "Interactive policy illustrations",
            "Loan vs withdrawal calculator",
            "Educational content library",
            "Policy performance tracking",
            "Compound growth visualizations",
        ],
        tech: &[("Vite", "VTE"), ("React", "RCT"), ("Supabase", "SPA"), ("Tailwind", "TWD")],
        links: &[],
        philosophy: None,
    },
    Project {
        id: "amartel-os",
        name: "AMARTEL.OS",
        icon: "SYS",
        summary: "This portfolio: a neon cyberpunk desktop experience built from scratch.",
        status: ProjectStatus::Live,
        tagline: "A neon neural interface.",
        description: "A cyberpunk desktop experience with neon-lit panels, a living grid background and synthesized sound, built from scratch.",
        features: &[
            "Section registry driven panels",
            "Six color schemes and five UI scales",
            "Synthesized electronic sound effects",
            "Terminal-style boot sequence",
        ],
        tech: &[("Next.js", "NXT"), ("Tailwind CSS", "TWD"), ("Zustand", "ZST"), ("Web Audio API", "AUD")],
        links: &[],
        philosophy: Some("Your portfolio should feel like you. Not a template, a living reflection of your craft."),
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

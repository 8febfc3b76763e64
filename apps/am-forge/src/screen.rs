//! FORGE screen - week strip, the selected day's workout, and a side column
//!
//! The side column shows one of the tabbed panels, or the coaching note for an
//! exercise. Closing the note returns to whichever tab was open before it.

use crate::data::{
    supp_schedule, Tip, WeekDay, Workout, MACROS, MEALS, QUOTES, RECOVERY_STEPS, SLEEP_PROTOCOL, THURSDAY, TIPS,
    WEEK_PLAN, WORKOUTS,
};
use crate::lookup::exercise_info;
use crate::stats::ForgeData;
use am_widgets::{PanelContext, PanelScreen, PanelView};
use chrono::{Datelike, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanel {
    Fuel,
    Supps,
    Sleep,
    Stats,
    Recovery,
    Exercise,
}

impl SidePanel {
    /// Tabs in display order; `Exercise` is reached through `info`, not a tab
    pub const TABS: [SidePanel; 5] = [
        SidePanel::Fuel,
        SidePanel::Supps,
        SidePanel::Sleep,
        SidePanel::Stats,
        SidePanel::Recovery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidePanel::Fuel => "FUEL",
            SidePanel::Supps => "SUPPS",
            SidePanel::Sleep => "SLEEP",
            SidePanel::Stats => "STATS",
            SidePanel::Recovery => "SOS",
            SidePanel::Exercise => "INFO",
        }
    }

    fn parse_tab(s: &str) -> Option<SidePanel> {
        if s.eq_ignore_ascii_case("recovery") {
            return Some(SidePanel::Recovery);
        }
        Self::TABS.into_iter().find(|tab| tab.label().eq_ignore_ascii_case(s))
    }
}

pub struct ForgeScreen {
    today: usize,
    date_label: String,
    selected_day: usize,
    side: SidePanel,
    prev_side: SidePanel,
    selected_exercise: Option<&'static str>,
    data: ForgeData,
    quote: &'static str,
    tip: &'static Tip,
}

impl ForgeScreen {
    /// Today's plan with body stats from the panel storage
    pub fn new(ctx: &PanelContext) -> Self {
        let data = ForgeData::load(ctx.storage.as_ref());
        Self::for_date(data, Local::now().date_naive(), &mut rand::thread_rng())
    }

    /// Screen as it would open on `date`; quote and tip are drawn from `rng` once
    pub fn for_date<R: Rng + ?Sized>(data: ForgeData, date: NaiveDate, rng: &mut R) -> Self {
        let today = date.weekday().num_days_from_sunday() as usize;
        Self {
            today,
            date_label: date.format("%a, %b %-d").to_string(),
            selected_day: today,
            side: SidePanel::Fuel,
            prev_side: SidePanel::Fuel,
            selected_exercise: None,
            data,
            quote: QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]),
            tip: TIPS.choose(rng).unwrap_or(&TIPS[0]),
        }
    }

    pub fn selected_day(&self) -> usize {
        self.selected_day
    }

    pub fn is_today(&self) -> bool {
        self.selected_day == self.today
    }

    pub fn side_panel(&self) -> SidePanel {
        self.side
    }

    pub fn selected_exercise(&self) -> Option<&'static str> {
        self.selected_exercise
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }

    pub fn tip(&self) -> &'static Tip {
        self.tip
    }

    pub fn workout(&self) -> &'static Workout {
        &WORKOUTS[self.selected_day]
    }

    /// Game-day supplements follow the calendar, not the day being viewed
    pub fn is_game_day(&self) -> bool {
        self.today == THURSDAY
    }

    pub fn select_day(&mut self, day: usize) -> bool {
        if day >= WEEK_PLAN.len() {
            return false;
        }
        self.selected_day = day;
        true
    }

    pub fn show_tab(&mut self, tab: SidePanel) {
        self.selected_exercise = None;
        self.side = tab;
    }

    /// Open the coaching note for the workout line at `index`
    ///
    /// Lines without a note are refused.
    pub fn show_exercise(&mut self, index: usize) -> bool {
        let Some(line) = self.workout().exercises.get(index) else {
            return false;
        };
        let text = line.trim();
        if exercise_info(text).is_none() {
            return false;
        }
        if self.side != SidePanel::Exercise {
            self.prev_side = self.side;
        }
        self.selected_exercise = Some(text);
        self.side = SidePanel::Exercise;
        true
    }

    pub fn close_exercise(&mut self) {
        self.side = self.prev_side;
        self.selected_exercise = None;
    }

    fn parse_day(&self, arg: &str) -> Option<usize> {
        if arg.eq_ignore_ascii_case("today") {
            return Some(self.today);
        }
        if let Ok(n) = arg.parse::<usize>() {
            return n.checked_sub(1);
        }
        WEEK_PLAN
            .iter()
            .position(|day: &WeekDay| day.day.eq_ignore_ascii_case(arg) || day.day_full.eq_ignore_ascii_case(arg))
    }

    fn render_header(&self, view: PanelView) -> PanelView {
        view.line(format!(
            "FORGE  \"{}\"  [{} lbs | {}% BF]  {}",
            self.quote,
            self.data.current_weight(),
            self.data.current_bf(),
            self.date_label
        ))
        .blank()
    }

    fn render_week(&self, mut view: PanelView) -> PanelView {
        for (i, day) in WEEK_PLAN.iter().enumerate() {
            let today = if i == self.today { " *" } else { "" };
            view = view.item(
                i == self.selected_day,
                format!("{} {:<16} {:<14} {}{}", day.day, day.focus, day.duration, day.intensity, today),
            );
        }
        view.blank()
    }

    fn render_workout(&self, view: PanelView) -> PanelView {
        let workout = self.workout();
        let heading = if self.is_today() {
            "Today's Workout"
        } else {
            workout.short_title()
        };
        let viewing = if self.is_today() { "" } else { "  (viewing)" };

        let mut view = view
            .line(format!("{} | {}{}", heading, WEEK_PLAN[self.selected_day].day_full, viewing))
            .line(format!("Mission: {}", workout.mission))
            .line(workout.benefit)
            .blank();

        for (i, line) in workout.exercises.iter().enumerate() {
            let text = line.trim();
            let indent = if line.starts_with("  ") { "  - " } else { "" };
            let marker = match exercise_info(text) {
                Some(_) if self.selected_exercise == Some(text) => "  [i]",
                Some(_) => "  [?]",
                None => "",
            };
            view = view.line(format!("{:>2}. {}{}{}", i + 1, indent, text, marker));
        }

        if workout.note.is_empty() {
            view
        } else {
            view.blank().line(format!("! {}", workout.note))
        }
    }

    fn render_side(&self, view: PanelView) -> PanelView {
        let tabs = SidePanel::TABS
            .iter()
            .map(|tab| {
                if *tab == self.side {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let view = view.blank().line(tabs).blank();

        match self.side {
            SidePanel::Fuel => {
                let view = MEALS.iter().fold(view.line("// Daily Fuel"), |view, meal| {
                    let mut view = view.line(format!("{:>8}  {}", meal.time, meal.name));
                    if !meal.items.is_empty() {
                        view = view.line(format!("          {}", meal.items));
                    }
                    if !meal.supps.is_empty() {
                        view = view.line(format!("          + {}", meal.supps));
                    }
                    view
                });
                let macros = MACROS
                    .iter()
                    .map(|(value, label)| format!("{} {}", value, label))
                    .collect::<Vec<_>>()
                    .join("  ");
                view.blank().line(macros)
            }
            SidePanel::Supps => {
                let title = if self.is_game_day() {
                    "// Supplement Schedule (Game Day)"
                } else {
                    "// Supplement Schedule"
                };
                supp_schedule(self.is_game_day())
                    .iter()
                    .fold(view.line(title), |view, block| {
                        block
                            .items
                            .iter()
                            .fold(view.line(block.title), |view, item| view.line(format!("  {}", item)))
                    })
            }
            SidePanel::Sleep => SLEEP_PROTOCOL
                .iter()
                .fold(view.line("// Sleep Protocol"), |view, item| view.line(format!("  {}", item)))
                .blank()
                .line(format!("Tip [{}]", self.tip.category))
                .line(self.tip.text),
            SidePanel::Stats => self.render_stats(view),
            SidePanel::Recovery => RECOVERY_STEPS
                .iter()
                .fold(
                    view.line("// Recovery Mode").line("One Rule: Next Meal, Back to Default"),
                    |view, step| view.line(format!("  * {}", step)),
                )
                .blank()
                .line("One bad meal in 21 is <5%. You're fine."),
            SidePanel::Exercise => {
                let view = view.line("< back  (close)");
                match self.selected_exercise.and_then(|text| exercise_info(text).map(|info| (text, info))) {
                    Some((text, info)) => view
                        .line(text)
                        .blank()
                        .line("Form")
                        .line(info.form)
                        .blank()
                        .line("Why It Matters")
                        .line(info.tip),
                    None => view,
                }
            }
        }
    }

    fn render_stats(&self, view: PanelView) -> PanelView {
        let data = &self.data;
        let mut view = view
            .line("// Body Stats")
            .field("Weight", format!("{} ({})", data.current_weight(), data.weight_change_label()))
            .field("Body Fat", format!("{}% (Goal: {}%)", data.current_bf(), data.profile.goal_bf))
            .field("Entries", format!("{} since day 1", data.logs.len()))
            .blank();

        view = match data.chart_points() {
            Some(points) => {
                let polyline = points
                    .iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let first = data.logs.first().map_or("", |log| log.date.as_str());
                let last = data.latest().map_or("", |log| log.date.as_str());
                view.line("Weight trend")
                    .line(polyline)
                    .line(format!("{} .. {}", first, last))
            }
            None => view.line("Log more data points to see trend"),
        };

        if data.logs.is_empty() {
            return view;
        }
        data.recent_logs().fold(view.blank().line("Recent Logs"), |view, log| {
            view.line(format!("  {} lbs / {}% BF  {}", log.weight, log.bf, log.date))
        })
    }
}

impl PanelScreen for ForgeScreen {
    fn render(&self) -> PanelView {
        let view = self.render_header(PanelView::new());
        let view = self.render_week(view);
        let view = self.render_workout(view);
        self.render_side(view)
    }

    fn handle_command(&mut self, verb: &str, args: &[&str]) -> bool {
        match (verb, args) {
            ("day", [arg]) => match self.parse_day(arg) {
                Some(day) => self.select_day(day),
                None => false,
            },
            ("panel", [arg]) => match SidePanel::parse_tab(arg) {
                Some(tab) => {
                    self.show_tab(tab);
                    true
                }
                None => false,
            },
            ("info", [arg]) => match arg.parse::<usize>() {
                Ok(n) if n > 0 => self.show_exercise(n - 1),
                _ => false,
            },
            ("close", []) => {
                if self.side != SidePanel::Exercise {
                    return false;
                }
                self.close_exercise();
                true
            }
            _ => false,
        }
    }

    fn commands(&self) -> &'static [&'static str] {
        &[
            "day <1-7|sun..sat|today>",
            "panel <fuel|supps|sleep|stats|sos>",
            "info <n>",
            "close",
        ]
    }
}

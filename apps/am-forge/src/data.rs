//! Static FORGE content: weekly plan, workouts, fuel, supplements and protocols
//!
//! Day indices follow the week as it is shown: 0 = Sunday .. 6 = Saturday.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Low,
    Med,
    High,
    Game,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Med => "med",
            Intensity::High => "high",
            Intensity::Game => "game",
        }
    }

    /// Accent used for the day strip
    pub fn color(&self) -> &'static str {
        match self {
            Intensity::Low => "green",
            Intensity::Med => "amber",
            Intensity::High => "red",
            Intensity::Game => "purple",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub day: &'static str,
    pub day_full: &'static str,
    pub focus: &'static str,
    pub duration: &'static str,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workout {
    pub title: &'static str,
    pub mission: &'static str,
    pub benefit: &'static str,
    /// Lines starting with two spaces belong to the circuit above them
    pub exercises: &'static [&'static str],
    pub note: &'static str,
}

impl Workout {
    /// "Monday" out of "Monday - Upper Push/Pull"
    pub fn short_title(&self) -> &'static str {
        self.title.split(" - ").next().unwrap_or(self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub time: &'static str,
    pub name: &'static str,
    pub items: &'static str,
    pub supps: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppBlock {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub category: &'static str,
    pub text: &'static str,
}

pub const THURSDAY: usize = 4;

pub static WEEK_PLAN: [WeekDay; 7] = [
    WeekDay { day: "Sun", day_full: "Sunday", focus: "Active Recovery", duration: "15-20 min", intensity: Intensity::Low },
    WeekDay { day: "Mon", day_full: "Monday", focus: "Upper Push/Pull", duration: "30 min", intensity: Intensity::Med },
    WeekDay { day: "Tue", day_full: "Tuesday", focus: "Lower + Core", duration: "30 min", intensity: Intensity::Med },
    WeekDay { day: "Wed", day_full: "Wednesday", focus: "HIIT + Mobility", duration: "25 min", intensity: Intensity::High },
    WeekDay { day: "Thu", day_full: "Thursday", focus: "Pre-Game", duration: "15 min + game", intensity: Intensity::Game },
    WeekDay { day: "Fri", day_full: "Friday", focus: "Recovery", duration: "25 min", intensity: Intensity::Low },
    WeekDay { day: "Sat", day_full: "Saturday", focus: "Full Body", duration: "40 min", intensity: Intensity::High },
];

pub static WORKOUTS: [Workout; 7] = [
    Workout {
        title: "Sunday - Active Recovery",
        mission: "Let your body rebuild so Monday hits harder.",
        benefit: "Active recovery flushes metabolic waste, reduces soreness, and restores your nervous system. You come back Monday stronger than if you trained through.",
        exercises: &["Light walk: 20 min outdoors if possible", "Or full rest - listen to your body"],
        note: "",
    },
    Workout {
        title: "Monday - Upper Push/Pull",
        mission: "Build the upper body strength that wins 50/50 battles.",
        benefit: "Push/pull balance builds shoulders, back, and chest evenly, giving you the physical presence to shield the ball, hold off defenders, and win aerial duels.",
        exercises: &[
            "Pull-ups: 4 x max reps (aim 8-12)",
            "DB Bench Press: 4 x 10",
            "DB Rows: 4 x 10 each arm",
            "DB Shoulder Press: 3 x 10",
            "Push-ups: 2 x max",
            "DB Bicep Curls: 2 x 12",
        ],
        note: "Focus on controlled reps. Increase weight every 2 weeks.",
    },
    Workout {
        title: "Tuesday - Lower Body + Core",
        mission: "Build explosive legs and an unbreakable core.",
        benefit: "Stronger legs mean faster sprints, sharper cuts, and harder shots. A solid core transfers all that power and keeps you injury-proof.",
        exercises: &[
            "DB Goblet Squats: 4 x 12",
            "DB Romanian Deadlifts: 4 x 10",
            "DB Bulgarian Split Squats: 3 x 10 each leg",
            "DB Calf Raises: 3 x 15",
            "Plank: 3 x 45 sec",
            "Dead Bugs: 3 x 10 each side",
        ],
        note: "Keep core braced throughout. Go deep on split squats.",
    },
    Workout {
        title: "Wednesday - Airbike HIIT + Mobility",
        mission: "Train your engine to outlast everyone on the pitch.",
        benefit: "High-intensity intervals build the same energy system soccer demands: repeated sprints with short recovery. Mobility work keeps your hips and spine moving freely so you stay agile.",
        exercises: &[
            "Airbike: 10 rounds - 20 sec all-out / 40 sec easy",
            "Hip flexor stretch: 2 x 30 sec each",
            "World's greatest stretch: 5 each side",
            "Pigeon pose: 1 min each side",
            "Thoracic spine rotations: 10 each side",
        ],
        note: "This session mimics soccer game intensity. Push hard on the bike.",
    },
    Workout {
        title: "Thursday - Pre-Game Activation",
        mission: "Prime your body and mind to enter flow state.",
        benefit: "Light activation wakes up your muscles without fatiguing them. Box breathing and visualization shift your brain into calm focus, the entry point for flow, where your best soccer happens.",
        exercises: &[
            "Light airbike: 3 min easy",
            "Leg swings: 10 each direction",
            "Bodyweight squats: 10",
            "High knees: 20",
            "Box breathing: 2 min (4-4-4-4)",
            "Visualization: 1 min - see yourself in flow",
        ],
        note: "Do this 15 min before leaving. Take FLOW + L-theanine. Eat banana + honey.",
    },
    Workout {
        title: "Friday - Recovery",
        mission: "Accelerate recovery from game day and loosen up.",
        benefit: "Low-intensity movement increases blood flow to repair muscle damage from Thursday's game. Stretching restores range of motion so tightness doesn't accumulate into injury.",
        exercises: &[
            "Airbike: 15 min easy/conversational pace",
            "Full body stretch: 10 min (hamstrings, quads, hips, shoulders, back)",
            "Foam roll if available",
        ],
        note: "Nasal breathing only during the airbike. Stay relaxed.",
    },
    Workout {
        title: "Saturday - Full Body Circuit",
        mission: "Push your limits. This is your hardest session of the week.",
        benefit: "Full-body circuits build functional strength and conditioning simultaneously. Minimal rest trains your body to perform under fatigue, exactly what the 80th minute of a game demands.",
        exercises: &[
            "4 rounds (90 sec rest between rounds):",
            "  Pull-ups: 8 reps",
            "  DB Thrusters: 10 reps",
            "  DB Walking Lunges: 10 each leg",
            "  Push-ups: 15 reps",
            "  DB Renegade Rows: 8 each arm",
            "  Airbike: 1 min hard",
            "Core finisher - 3 x (10 V-ups + 20 bicycle crunches)",
        ],
        note: "Minimal rest between exercises within each round. This is your hardest session.",
    },
];

pub static MEALS: [Meal; 5] = [
    Meal {
        time: "7:00 AM",
        name: "Breakfast",
        items: "3 eggs + 1 extra white scrambled in olive oil. Smoothie: blueberries, spinach, banana, OJ, creatine, greens, collagen. Egg yolk coffee.",
        supps: "APEX, FLOW (creatine + greens in smoothie)",
    },
    Meal {
        time: "12:30 PM",
        name: "Lunch (Post-Workout)",
        items: "Veggie-loaded ground beef rice bowl (8oz beef, 1.5 cups rice in broth, bell pepper, onion, peas, carrots). Side steamed broccoli.",
        supps: "Whey isolate shake or collagen",
    },
    Meal {
        time: "3:30 PM",
        name: "Snack",
        items: "Apple or banana, small handful almonds or walnuts (~1oz)",
        supps: "",
    },
    Meal {
        time: "4:30 PM",
        name: "Dinner (Family)",
        items: "Pick a protein (6-8oz) + carb + veggies. Combos: stir fry, taco bowls, sheet pan chicken, salmon + rice.",
        supps: "Zinc 15-30mg",
    },
    Meal {
        time: "9:30 PM",
        name: "Evening Supps",
        items: "",
        supps: "Mag glycinate 400mg, glycine 3g, L-theanine 200mg, MOON",
    },
];

/// Daily macro targets as (value, label)
pub const MACROS: [(&str, &str); 4] = [("~2,700", "Cal"), ("190g", "Protein"), ("285g", "Carbs"), ("92g", "Fats")];

const PRE_GAME: SuppBlock = SuppBlock {
    title: "Pre-Game",
    items: &["FLOW (extra dose)", "L-theanine: 200mg", "Electrolyte mix", "Banana + honey"],
};

const PRE_WORKOUT: SuppBlock = SuppBlock {
    title: "Pre-Workout",
    items: &["L-citrulline: 6-8g", "Electrolyte mix", "BioSteel (optional)"],
};

/// Supplement blocks for the day; the third slot depends on game day
pub fn supp_schedule(game_day: bool) -> [SuppBlock; 6] {
    [
        SuppBlock { title: "Pre-Breakfast", items: &["NAC: 600mg (empty stomach)"] },
        SuppBlock {
            title: "Morning",
            items: &["APEX (test/energy)", "FLOW (cognitive)", "Creatine 5g", "Green powder", "Collagen protein"],
        },
        if game_day { PRE_GAME } else { PRE_WORKOUT },
        SuppBlock { title: "Post-Workout", items: &["Whey isolate shake", "(or collagen if whey issues)"] },
        SuppBlock { title: "With Dinner", items: &["Zinc: 15-30mg"] },
        SuppBlock {
            title: "Evening",
            items: &["Mag glycinate: 400mg", "Glycine: 3g", "L-theanine: 200mg", "MOON (sleep support)"],
        },
    ]
}

pub static QUOTES: [&str; 14] = [
    "The body achieves what the mind believes.",
    "Discipline is choosing between what you want now and what you want most.",
    "You don't have to be extreme, just consistent.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Your only limit is you.",
    "Fall in love with the process and the results will come.",
    "Hard work beats talent when talent doesn't work hard.",
    "The best project you'll ever work on is you.",
    "One day or day one. You decide.",
    "What you do every day matters more than what you do once in a while.",
    "Strength does not come from the body. It comes from the will.",
    "Be stronger than your excuses.",
    "It never gets easier. You just get stronger.",
];

pub static TIPS: [Tip; 10] = [
    Tip { category: "Sleep", text: "Mouth taping forces nasal breathing during sleep, which reduces snoring and improves oxygen saturation. Start with a small strip of surgical tape." },
    Tip { category: "Flow State", text: "Box breathing (4-4-4-4) before soccer activates the parasympathetic nervous system. You'll feel calm but alert. Perfect for finding flow." },
    Tip { category: "Recovery", text: "One bad meal in a week of 21 meals is less than 5%. Don't spiral. Just make the next meal the default: eggs + smoothie or beef rice bowl." },
    Tip { category: "Nutrition", text: "Batch prep the beef rice mix in one big pot: brown beef, cook rice in broth, add veggies. Portion into containers for the week." },
    Tip { category: "Anti-Inflammation", text: "Your sensitivity foods (gluten, dairy, corn, oats) cause chronic low-grade inflammation. Avoiding them is your biggest lever for recovery and performance." },
    Tip { category: "Training", text: "Progressive overload doesn't mean huge jumps. Adding 1 rep or 2.5 lbs every 2 weeks compounds into massive gains over a year." },
    Tip { category: "Sleep", text: "Magnesium glycinate + glycine + L-theanine is one of the most effective natural sleep stacks. Take 30-60 min before bed." },
    Tip { category: "Hydration", text: "Drink at least half your bodyweight in ounces daily (~90 oz). Add electrolytes to your first glass of water each morning." },
    Tip { category: "Flow State", text: "Visualization primes your motor cortex. Spend 1 minute before games seeing yourself receive, turn, and play. Your brain rehearses the movements." },
    Tip { category: "Nutrition", text: "Egg yolk coffee (Vietnamese-style): whip a yolk with sugar until frothy, pour over hot coffee. Rich, creamy, dairy-free, and adds healthy fats." },
];

pub static SLEEP_PROTOCOL: [&str; 8] = [
    "Bed 10:30pm / Wake 6:30am",
    "Mag + glycine + L-theanine before bed",
    "MOON supplement",
    "Cool room: 65-68F",
    "Mouth taping (nasal breathing)",
    "Sleep on side, not back",
    "No food 2-3 hrs before bed",
    "Buteyko breathing: 5 min daily",
];

pub static RECOVERY_STEPS: [&str; 6] = [
    "Don't skip meals to \"make up\" for it",
    "Don't punish with extra cardio",
    "Next meal: eggs + smoothie (AM) or beef rice bowl (PM)",
    "Hydrate extra: 2-3 extra glasses of water",
    "Alcohol-heavy? Extra electrolytes next morning",
    "Inflammatory meal? Green powder + extra veggies next day",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_lines_up_with_workouts() {
        for (day, workout) in WEEK_PLAN.iter().zip(WORKOUTS.iter()) {
            assert_eq!(workout.short_title(), day.day_full);
        }
        assert_eq!(WEEK_PLAN[THURSDAY].intensity, Intensity::Game);
    }

    #[test]
    fn test_game_day_swaps_pre_workout() {
        let regular = supp_schedule(false);
        let game = supp_schedule(true);
        assert_eq!(regular[2].title, "Pre-Workout");
        assert_eq!(game[2].title, "Pre-Game");
        assert_eq!(regular[..2], game[..2]);
        assert_eq!(regular[3..], game[3..]);
    }
}

//! Exercise coaching notes and the lookup from a workout line to its note
//!
//! Lookup is two passes over [`EXERCISES`] in table order: the first key that
//! starts the line wins, otherwise the first key found anywhere in it. Earlier
//! keys shadow later ones, so "Airbike: 15 min" resolves to `Airbike` and
//! "Light airbike: 3 min" only matches `Light airbike` because it starts there.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseInfo {
    /// Why it matters
    pub tip: &'static str,
    /// How to do it
    pub form: &'static str,
}

/// Ordered (key, info) table; order decides ties
pub static EXERCISES: &[(&str, ExerciseInfo)] = &[
    (
        "Light walk",
        ExerciseInfo {
            tip: "Keep a relaxed pace. This is about movement, not intensity. Walking outdoors gives you sunlight exposure which helps regulate circadian rhythm and boosts vitamin D.",
            form: "Stand tall, swing arms naturally, breathe through your nose. Aim for a pace where you could easily hold a conversation.",
        },
    ),
    (
        "full rest",
        ExerciseInfo {
            tip: "Rest days are when your muscles actually grow and repair. Sleep quality matters most today. Prioritize 8 hours and stay hydrated.",
            form: "If you feel restless, light stretching or a 5-minute walk is fine. Avoid anything that elevates your heart rate significantly.",
        },
    ),
    (
        "Pull-ups",
        ExerciseInfo {
            tip: "The king of upper body exercises. Builds lats, biceps, rear delts, and grip strength. If you can't hit 8 reps, use a resistance band for assistance.",
            form: "Start from a dead hang, squeeze shoulder blades together, pull until chin clears the bar. Lower slowly (2-3 sec). Avoid kipping or swinging.",
        },
    ),
    (
        "DB Bench Press",
        ExerciseInfo {
            tip: "Dumbbells allow a greater range of motion than barbell bench and work each side independently, fixing strength imbalances.",
            form: "Plant feet flat, arch your upper back slightly, lower dumbbells to chest level with elbows at ~45 degrees. Press up in a slight arc, not straight up.",
        },
    ),
    (
        "DB Rows",
        ExerciseInfo {
            tip: "Single-arm rows build a thick back and correct left-right imbalances. This is your primary horizontal pull, so don't rush it.",
            form: "Place one knee and hand on a bench. Keep your back flat and core braced. Pull the dumbbell to your hip, squeezing your shoulder blade. Lower with control.",
        },
    ),
    (
        "DB Shoulder Press",
        ExerciseInfo {
            tip: "Builds strong, capped shoulders that protect the joint during contact. Seated is more strict; standing engages more core stabilization.",
            form: "Start with dumbbells at ear height, palms facing forward. Press straight up until arms are extended. Don't arch your lower back. Brace your core.",
        },
    ),
    (
        "Push-ups",
        ExerciseInfo {
            tip: "A timeless bodyweight move that hits chest, triceps, and anterior delts. Going to max reps at the end ensures full fatigue for growth.",
            form: "Hands slightly wider than shoulders, body in a straight line from head to heels. Lower until chest nearly touches the floor. Keep elbows at 45 degrees, not flared.",
        },
    ),
    (
        "DB Bicep Curls",
        ExerciseInfo {
            tip: "Isolation finisher for the biceps. Use a weight where the last 2-3 reps are genuinely hard. Alternating arms lets you focus on each side.",
            form: "Stand tall, elbows pinned to your sides. Curl with a slight supination (rotate pinky up at top). Lower slowly; the eccentric is where growth happens.",
        },
    ),
    (
        "DB Goblet Squats",
        ExerciseInfo {
            tip: "The goblet position forces an upright torso, making this one of the safest and most effective squat variations. Great for building quads, glutes, and core.",
            form: "Hold a dumbbell vertically at chest height, elbows pointing down. Sit between your legs, keeping chest tall. Go as deep as mobility allows. Drive through your heels.",
        },
    ),
    (
        "DB Romanian Deadlifts",
        ExerciseInfo {
            tip: "Targets the posterior chain: hamstrings, glutes, and lower back. Essential for sprint speed and injury prevention. You should feel a deep hamstring stretch.",
            form: "Hold dumbbells in front of thighs. Hinge at the hips, pushing them back. Keep a slight knee bend and flat back. Lower until you feel a strong hamstring stretch, then squeeze glutes to stand.",
        },
    ),
    (
        "DB Bulgarian Split Squats",
        ExerciseInfo {
            tip: "One of the best single-leg exercises for building explosive leg power. Mimics the single-leg drive of sprinting and cutting in soccer.",
            form: "Rear foot on a bench, front foot about 2 feet ahead. Lower until your back knee nearly touches the ground. Keep front knee tracking over toes. Drive up through the front heel.",
        },
    ),
    (
        "DB Calf Raises",
        ExerciseInfo {
            tip: "Strong calves are your shock absorbers for running, jumping, and quick direction changes. High reps (15+) work best since calves are endurance muscles.",
            form: "Hold dumbbells at your sides, balls of feet on a step or plate. Rise as high as you can, pause for 1 second at the top, then lower slowly past parallel for a full stretch.",
        },
    ),
    (
        "Plank",
        ExerciseInfo {
            tip: "Trains anti-extension, your core's ability to resist your spine collapsing. Foundational for every athletic movement and protects your lower back.",
            form: "Forearms on the ground, body in a straight line. Squeeze glutes, brace abs as if someone's about to punch your stomach. Don't let your hips sag or pike up.",
        },
    ),
    (
        "Dead Bugs",
        ExerciseInfo {
            tip: "Teaches your core to stabilize while your limbs move independently, exactly what happens when you sprint or kick. Low back must stay glued to the floor.",
            form: "Lie face-up, arms straight up, knees bent at 90 degrees. Extend opposite arm and leg slowly while pressing your lower back into the floor. Return and switch sides.",
        },
    ),
    (
        "Airbike",
        ExerciseInfo {
            tip: "The airbike is unmatched for conditioning. It works arms and legs simultaneously with no impact. The harder you push, the harder it resists. Perfect for HIIT.",
            form: "Sit upright, grip the handles, and push/pull with arms while driving with legs. For all-out intervals, stand slightly off the seat and give maximum effort.",
        },
    ),
    (
        "Hip flexor stretch",
        ExerciseInfo {
            tip: "Tight hip flexors are the #1 cause of lower back pain in athletes. This stretch counteracts hours of sitting and keeps your stride length long and powerful.",
            form: "Half-kneeling position, back knee on the ground. Tuck your pelvis under (posterior tilt) and shift forward. You should feel the stretch in the front of the back leg's hip.",
        },
    ),
    (
        "World's greatest stretch",
        ExerciseInfo {
            tip: "Lives up to its name: hits hip flexors, hamstrings, thoracic spine, and groin in one flowing movement. The best bang-for-your-buck mobility drill.",
            form: "Lunge forward, place both hands inside the front foot. Rotate your chest toward the front knee, reaching one arm to the sky. Hold briefly, switch sides. Move fluidly.",
        },
    ),
    (
        "Pigeon pose",
        ExerciseInfo {
            tip: "Deep hip opener targeting the external rotators and glutes. Critical for soccer players who need full hip mobility for passing, shooting, and agility.",
            form: "From a lunge, bring front shin across your body (angle depends on flexibility). Square your hips to the ground. Walk hands forward and hold. Breathe into the stretch.",
        },
    ),
    (
        "Thoracic spine rotations",
        ExerciseInfo {
            tip: "Opens up the mid-back which gets stiff from training and sitting. Better thoracic mobility means better posture, breathing, and overhead movement.",
            form: "On all fours or side-lying, place one hand behind your head. Rotate your upper body, opening your chest to the ceiling. Follow your elbow with your eyes. Move slowly.",
        },
    ),
    (
        "Light airbike",
        ExerciseInfo {
            tip: "Easy spinning warms up the body without creating fatigue. The goal is to raise your core temperature and get blood flowing to your muscles before activation.",
            form: "Keep the pace conversational; you should be able to talk easily. Use smooth, rhythmic pedaling. Focus on nasal breathing to keep your nervous system calm.",
        },
    ),
    (
        "Leg swings",
        ExerciseInfo {
            tip: "Dynamic stretching that warms up the hip joint through its full range. Prepares your legs for the multi-directional demands of soccer.",
            form: "Hold onto something for balance. Swing one leg forward and back like a pendulum (10 reps), then side to side (10 reps). Keep your core stable and let the leg move freely.",
        },
    ),
    (
        "Bodyweight squats",
        ExerciseInfo {
            tip: "Activates the quads, glutes, and ankles before heavier movements or game play. A simple way to confirm your joints feel good and ready to load.",
            form: "Feet shoulder-width, toes slightly out. Sit back and down, keeping chest tall. Go to at least parallel. Stand by driving through your heels. No added weight needed.",
        },
    ),
    (
        "High knees",
        ExerciseInfo {
            tip: "Elevates your heart rate and primes the hip flexors for sprinting. Also wakes up the nervous system for fast, reactive movements on the pitch.",
            form: "Drive knees up to hip height with quick, light ground contacts. Pump your arms in sync. Stay on the balls of your feet. Focus on speed, not distance covered.",
        },
    ),
    (
        "Box breathing",
        ExerciseInfo {
            tip: "Navy SEALs use this to control stress and enter a focused state. Four equal counts of inhale-hold-exhale-hold activates your parasympathetic nervous system.",
            form: "Inhale through nose for 4 seconds, hold for 4, exhale through nose for 4, hold empty for 4. Repeat for 2 minutes. Sit or stand comfortably with eyes closed.",
        },
    ),
    (
        "Visualization",
        ExerciseInfo {
            tip: "Mental rehearsal activates the same motor cortex pathways as physical practice. Elite athletes use this to prime confidence and decision-making before competition.",
            form: "Close your eyes. Picture yourself on the pitch: receiving the ball, turning, making passes, scoring. Make it vivid with sounds, movements and emotions. See success, feel flow.",
        },
    ),
    (
        "Full body stretch",
        ExerciseInfo {
            tip: "Post-game stretching restores muscle length and promotes blood flow for recovery. Focus on areas that feel tight, typically hamstrings, quads, hip flexors, and calves.",
            form: "Hold each stretch 30-60 seconds, breathing deeply. Don't bounce. Target: hamstrings, quads, hip flexors, calves, chest, shoulders, and lower back. Go in order head to toe.",
        },
    ),
    (
        "Foam roll",
        ExerciseInfo {
            tip: "Self-myofascial release breaks up adhesions and increases blood flow to sore tissues. Especially useful for quads, IT band, calves, and upper back after game day.",
            form: "Roll slowly over each muscle group, pausing on tender spots for 20-30 seconds. Apply moderate pressure: uncomfortable but not painful. Breathe and relax into it.",
        },
    ),
    (
        "DB Thrusters",
        ExerciseInfo {
            tip: "A full-body power exercise combining a front squat with an overhead press. Extremely metabolically demanding; builds total-body strength and cardio simultaneously.",
            form: "Hold dumbbells at shoulders, squat to parallel, then drive up explosively and press dumbbells overhead in one fluid motion. Use the leg drive to help the press.",
        },
    ),
    (
        "DB Walking Lunges",
        ExerciseInfo {
            tip: "Builds single-leg strength, balance, and hip stability. Walking lunges mimic the gait pattern of running and improve deceleration ability on the field.",
            form: "Hold dumbbells at sides, step forward into a lunge until both knees are at 90 degrees. Push off the front foot and step into the next lunge. Keep torso upright throughout.",
        },
    ),
    (
        "DB Renegade Rows",
        ExerciseInfo {
            tip: "Combines a plank with a row: anti-rotation core training plus back strength in one exercise. Builds the stability needed for contact situations in soccer.",
            form: "In push-up position on dumbbells, row one dumbbell to your hip while keeping hips square to the ground. Don't rotate or shift. Alternate sides. Widen your feet for more stability.",
        },
    ),
    (
        "V-ups",
        ExerciseInfo {
            tip: "Advanced core exercise that works the upper and lower abs simultaneously. The V-shape motion demands coordination between your upper and lower body.",
            form: "Lie flat, arms overhead. Simultaneously lift legs and torso, reaching hands toward toes to form a V. Lower back down with control. Keep legs as straight as possible.",
        },
    ),
    (
        "bicycle crunches",
        ExerciseInfo {
            tip: "Targets the obliques and hip flexors through a cross-body rotation. One of the most effective exercises for building rotational core strength used in kicking and turning.",
            form: "Lie face-up, hands behind head. Bring opposite elbow to knee while extending the other leg. Alternate in a pedaling motion. Don't pull on your neck; rotate from your torso.",
        },
    ),
];

/// Coaching note for a workout line, if any key matches
pub fn exercise_info(text: &str) -> Option<&'static ExerciseInfo> {
    exercise_entry(text).map(|(_, info)| info)
}

/// Matching table entry, key included
pub fn exercise_entry(text: &str) -> Option<&'static (&'static str, ExerciseInfo)> {
    let lower = text.to_lowercase();
    let keys = || EXERCISES.iter().map(|entry| (entry, entry.0.to_lowercase()));

    keys()
        .find(|(_, key)| lower.starts_with(key.as_str()))
        .or_else(|| keys().find(|(_, key)| lower.contains(key.as_str())))
        .map(|(entry, _)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_for(text: &str) -> Option<&'static str> {
        exercise_entry(text).map(|(key, _)| *key)
    }

    #[test]
    fn test_prefix_pass() {
        assert_eq!(key_for("Pull-ups: 4 x max reps (aim 8-12)"), Some("Pull-ups"));
        assert_eq!(key_for("plank: 3 x 45 sec"), Some("Plank"));
        assert_eq!(key_for("Light airbike: 3 min easy"), Some("Light airbike"));
    }

    #[test]
    fn test_contains_pass() {
        assert_eq!(key_for("Or full rest - listen to your body"), Some("full rest"));
        assert_eq!(key_for("Core finisher - 3 x (10 V-ups + 20 bicycle crunches)"), Some("V-ups"));
    }

    #[test]
    fn test_prefix_beats_earlier_contains() {
        // "Airbike" comes before "Light airbike" in the table but is only contained
        assert_eq!(key_for("Light airbike then more airbike"), Some("Light airbike"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(key_for("4 rounds (90 sec rest between rounds):"), None);
        assert!(exercise_info("").is_none());
    }

    #[test]
    fn test_every_workout_line_with_a_key_resolves() {
        for workout in &crate::data::WORKOUTS {
            for line in workout.exercises {
                let text = line.trim();
                if let Some((key, _)) = exercise_entry(text) {
                    assert!(text.to_lowercase().contains(&key.to_lowercase()));
                }
            }
        }
    }
}

use crate::{Equipment, Exercise, ExerciseID, MuscleGroup, Name};

/// The built-in exercise catalog, seeded into the record store on first
/// open. Entry ids are deterministic: the n-th entry (1-based) becomes
/// `ExerciseID::from(n)`, so seeded ids are stable across installations.
#[must_use]
pub fn exercises() -> Vec<Exercise> {
    ENTRIES
        .iter()
        .enumerate()
        .filter_map(|(i, &(name, muscle_group, equipment, rep_range))| {
            Some(Exercise {
                id: ExerciseID::from(i as u128 + 1),
                name: Name::new(name).ok()?,
                muscle_group,
                equipment,
                rep_range: rep_range.map(str::to_string),
            })
        })
        .collect()
}

/// (name, primary muscle group, equipment, typical rep range)
#[allow(clippy::type_complexity)]
const ENTRIES: [(&str, MuscleGroup, Equipment, Option<&str>); 170] = [
    ("Barbell Bench Press", MuscleGroup::MidChest, Equipment::Barbell, Some("5-8")),
    ("Incline Barbell Bench Press", MuscleGroup::UpperChest, Equipment::Barbell, Some("6-10")),
    ("Decline Barbell Bench Press", MuscleGroup::LowerChest, Equipment::Barbell, Some("6-10")),
    ("Dumbbell Bench Press", MuscleGroup::MidChest, Equipment::Dumbbell, Some("8-12")),
    ("Incline Dumbbell Press", MuscleGroup::UpperChest, Equipment::Dumbbell, Some("8-12")),
    ("Decline Dumbbell Press", MuscleGroup::LowerChest, Equipment::Dumbbell, Some("8-12")),
    ("Dumbbell Flyes", MuscleGroup::MidChest, Equipment::Dumbbell, Some("10-15")),
    ("Incline Dumbbell Flyes", MuscleGroup::UpperChest, Equipment::Dumbbell, Some("10-15")),
    ("Cable Flyes", MuscleGroup::MidChest, Equipment::Cable, Some("12-15")),
    ("Low to High Cable Flyes", MuscleGroup::UpperChest, Equipment::Cable, Some("12-15")),
    ("High to Low Cable Flyes", MuscleGroup::LowerChest, Equipment::Cable, Some("12-15")),
    ("Chest Press Machine", MuscleGroup::MidChest, Equipment::Machine, Some("8-12")),
    ("Pec Deck Machine", MuscleGroup::MidChest, Equipment::Machine, Some("12-15")),
    ("Push-ups", MuscleGroup::MidChest, Equipment::Bodyweight, Some("10-20")),
    ("Dips (Chest Variation)", MuscleGroup::LowerChest, Equipment::Bodyweight, Some("8-12")),
    ("Landmine Press", MuscleGroup::UpperChest, Equipment::Barbell, Some("8-12")),
    ("Deadlift", MuscleGroup::LowerBack, Equipment::Barbell, Some("3-6")),
    ("Romanian Deadlift", MuscleGroup::LowerBack, Equipment::Barbell, Some("6-10")),
    ("Barbell Row", MuscleGroup::MidBack, Equipment::Barbell, Some("6-10")),
    ("Pendlay Row", MuscleGroup::MidBack, Equipment::Barbell, Some("5-8")),
    ("T-Bar Row", MuscleGroup::MidBack, Equipment::Barbell, Some("8-12")),
    ("Pull-ups", MuscleGroup::Lats, Equipment::Bodyweight, Some("5-10")),
    ("Chin-ups", MuscleGroup::Lats, Equipment::Bodyweight, Some("5-10")),
    ("Wide Grip Pull-ups", MuscleGroup::Lats, Equipment::Bodyweight, Some("5-10")),
    ("Lat Pulldown", MuscleGroup::Lats, Equipment::Machine, Some("8-12")),
    ("Wide Grip Lat Pulldown", MuscleGroup::Lats, Equipment::Machine, Some("8-12")),
    ("Close Grip Lat Pulldown", MuscleGroup::Lats, Equipment::Machine, Some("8-12")),
    ("Seated Cable Row", MuscleGroup::MidBack, Equipment::Cable, Some("8-12")),
    ("Single Arm Dumbbell Row", MuscleGroup::Lats, Equipment::Dumbbell, Some("8-12")),
    ("Dumbbell Row (Both Arms)", MuscleGroup::MidBack, Equipment::Dumbbell, Some("8-12")),
    ("Chest Supported Row", MuscleGroup::MidBack, Equipment::Dumbbell, Some("10-12")),
    ("Face Pulls", MuscleGroup::UpperBack, Equipment::Cable, Some("15-20")),
    ("Straight Arm Pulldown", MuscleGroup::Lats, Equipment::Cable, Some("12-15")),
    ("Machine Row", MuscleGroup::MidBack, Equipment::Machine, Some("8-12")),
    ("Inverted Row", MuscleGroup::MidBack, Equipment::Bodyweight, Some("8-15")),
    ("Rack Pulls", MuscleGroup::UpperBack, Equipment::Barbell, Some("5-8")),
    ("Good Mornings", MuscleGroup::LowerBack, Equipment::Barbell, Some("8-12")),
    ("Hyperextensions", MuscleGroup::LowerBack, Equipment::Bodyweight, Some("12-15")),
    ("Overhead Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("5-8")),
    ("Seated Overhead Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("6-10")),
    ("Push Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("5-8")),
    ("Dumbbell Shoulder Press", MuscleGroup::FrontDelts, Equipment::Dumbbell, Some("8-12")),
    ("Seated Dumbbell Press", MuscleGroup::FrontDelts, Equipment::Dumbbell, Some("8-12")),
    ("Arnold Press", MuscleGroup::FrontDelts, Equipment::Dumbbell, Some("8-12")),
    ("Lateral Raises", MuscleGroup::SideDelts, Equipment::Dumbbell, Some("12-15")),
    ("Cable Lateral Raises", MuscleGroup::SideDelts, Equipment::Cable, Some("12-15")),
    ("Machine Lateral Raises", MuscleGroup::SideDelts, Equipment::Machine, Some("12-15")),
    ("Front Raises", MuscleGroup::FrontDelts, Equipment::Dumbbell, Some("12-15")),
    ("Barbell Front Raises", MuscleGroup::FrontDelts, Equipment::Barbell, Some("12-15")),
    ("Reverse Flyes", MuscleGroup::RearDelts, Equipment::Dumbbell, Some("12-15")),
    ("Cable Reverse Flyes", MuscleGroup::RearDelts, Equipment::Cable, Some("12-15")),
    ("Bent Over Lateral Raises", MuscleGroup::RearDelts, Equipment::Dumbbell, Some("12-15")),
    ("Rear Delt Machine", MuscleGroup::RearDelts, Equipment::Machine, Some("12-15")),
    ("Upright Row", MuscleGroup::SideDelts, Equipment::Barbell, Some("10-12")),
    ("Dumbbell Upright Row", MuscleGroup::SideDelts, Equipment::Dumbbell, Some("10-12")),
    ("Shoulder Press Machine", MuscleGroup::FrontDelts, Equipment::Machine, Some("8-12")),
    ("Pike Push-ups", MuscleGroup::FrontDelts, Equipment::Bodyweight, Some("8-12")),
    ("Barbell Curl", MuscleGroup::Biceps, Equipment::Barbell, Some("8-12")),
    ("EZ Bar Curl", MuscleGroup::Biceps, Equipment::Barbell, Some("8-12")),
    ("Preacher Curl", MuscleGroup::Biceps, Equipment::Barbell, Some("10-12")),
    ("Dumbbell Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("8-12")),
    ("Alternating Dumbbell Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("8-12")),
    ("Hammer Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("8-12")),
    ("Incline Dumbbell Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("10-12")),
    ("Concentration Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("10-12")),
    ("Cable Curl", MuscleGroup::Biceps, Equipment::Cable, Some("10-15")),
    ("Cable Hammer Curl", MuscleGroup::Biceps, Equipment::Cable, Some("10-15")),
    ("Machine Curl", MuscleGroup::Biceps, Equipment::Machine, Some("10-12")),
    ("Spider Curl", MuscleGroup::Biceps, Equipment::Barbell, Some("10-12")),
    ("Drag Curl", MuscleGroup::Biceps, Equipment::Barbell, Some("8-12")),
    ("Close Grip Bench Press", MuscleGroup::Triceps, Equipment::Barbell, Some("6-10")),
    ("Tricep Dips", MuscleGroup::Triceps, Equipment::Bodyweight, Some("8-12")),
    ("Tricep Pushdown", MuscleGroup::Triceps, Equipment::Cable, Some("10-15")),
    ("Rope Tricep Pushdown", MuscleGroup::Triceps, Equipment::Cable, Some("10-15")),
    ("Overhead Tricep Extension", MuscleGroup::Triceps, Equipment::Dumbbell, Some("10-12")),
    ("Skull Crushers", MuscleGroup::Triceps, Equipment::Barbell, Some("8-12")),
    ("Dumbbell Skull Crushers", MuscleGroup::Triceps, Equipment::Dumbbell, Some("8-12")),
    ("Cable Overhead Extension", MuscleGroup::Triceps, Equipment::Cable, Some("12-15")),
    ("Tricep Kickbacks", MuscleGroup::Triceps, Equipment::Dumbbell, Some("12-15")),
    ("Diamond Push-ups", MuscleGroup::Triceps, Equipment::Bodyweight, Some("10-15")),
    ("Bench Dips", MuscleGroup::Triceps, Equipment::Bodyweight, Some("12-20")),
    ("JM Press", MuscleGroup::Triceps, Equipment::Barbell, Some("8-12")),
    ("Wrist Curls", MuscleGroup::Forearms, Equipment::Barbell, Some("15-20")),
    ("Reverse Wrist Curls", MuscleGroup::Forearms, Equipment::Barbell, Some("15-20")),
    ("Dumbbell Wrist Curls", MuscleGroup::Forearms, Equipment::Dumbbell, Some("15-20")),
    ("Farmers Walk", MuscleGroup::Forearms, Equipment::Dumbbell, Some("30-60s")),
    ("Reverse Curls", MuscleGroup::Forearms, Equipment::Barbell, Some("10-12")),
    ("Barbell Squat", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Front Squat", MuscleGroup::Quads, Equipment::Barbell, Some("6-10")),
    ("Pause Squat", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Box Squat", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Goblet Squat", MuscleGroup::Quads, Equipment::Dumbbell, Some("10-15")),
    ("Leg Press", MuscleGroup::Quads, Equipment::Machine, Some("8-15")),
    ("Hack Squat", MuscleGroup::Quads, Equipment::Machine, Some("8-12")),
    ("Leg Extension", MuscleGroup::Quads, Equipment::Machine, Some("12-15")),
    ("Bulgarian Split Squat", MuscleGroup::Quads, Equipment::Dumbbell, Some("8-12")),
    ("Walking Lunges", MuscleGroup::Quads, Equipment::Dumbbell, Some("10-15")),
    ("Reverse Lunges", MuscleGroup::Quads, Equipment::Dumbbell, Some("10-15")),
    ("Step-ups", MuscleGroup::Quads, Equipment::Dumbbell, Some("10-12")),
    ("Sissy Squats", MuscleGroup::Quads, Equipment::Bodyweight, Some("10-15")),
    ("Romanian Deadlift", MuscleGroup::Hamstrings, Equipment::Barbell, Some("8-12")),
    ("Stiff Leg Deadlift", MuscleGroup::Hamstrings, Equipment::Barbell, Some("8-12")),
    ("Dumbbell RDL", MuscleGroup::Hamstrings, Equipment::Dumbbell, Some("10-12")),
    ("Single Leg RDL", MuscleGroup::Hamstrings, Equipment::Dumbbell, Some("10-12")),
    ("Leg Curl", MuscleGroup::Hamstrings, Equipment::Machine, Some("12-15")),
    ("Seated Leg Curl", MuscleGroup::Hamstrings, Equipment::Machine, Some("12-15")),
    ("Lying Leg Curl", MuscleGroup::Hamstrings, Equipment::Machine, Some("12-15")),
    ("Nordic Curls", MuscleGroup::Hamstrings, Equipment::Bodyweight, Some("5-8")),
    ("Good Mornings", MuscleGroup::Hamstrings, Equipment::Barbell, Some("8-12")),
    ("Glute Ham Raise", MuscleGroup::Hamstrings, Equipment::Bodyweight, Some("8-12")),
    ("Hip Thrust", MuscleGroup::Glutes, Equipment::Barbell, Some("8-12")),
    ("Barbell Glute Bridge", MuscleGroup::Glutes, Equipment::Barbell, Some("10-15")),
    ("Single Leg Hip Thrust", MuscleGroup::Glutes, Equipment::Bodyweight, Some("10-15")),
    ("Cable Pull Through", MuscleGroup::Glutes, Equipment::Cable, Some("12-15")),
    ("Kettlebell Swing", MuscleGroup::Glutes, Equipment::Dumbbell, Some("15-20")),
    ("Cable Kickbacks", MuscleGroup::Glutes, Equipment::Cable, Some("12-15")),
    ("Smith Machine Hip Thrust", MuscleGroup::Glutes, Equipment::Machine, Some("8-12")),
    ("Sumo Deadlift", MuscleGroup::Glutes, Equipment::Barbell, Some("5-8")),
    ("Standing Calf Raise", MuscleGroup::Calves, Equipment::Machine, Some("12-20")),
    ("Seated Calf Raise", MuscleGroup::Calves, Equipment::Machine, Some("15-20")),
    ("Dumbbell Calf Raise", MuscleGroup::Calves, Equipment::Dumbbell, Some("15-20")),
    ("Single Leg Calf Raise", MuscleGroup::Calves, Equipment::Bodyweight, Some("15-20")),
    ("Leg Press Calf Raise", MuscleGroup::Calves, Equipment::Machine, Some("15-20")),
    ("Plank", MuscleGroup::Abs, Equipment::Bodyweight, Some("30-60s")),
    ("Crunches", MuscleGroup::Abs, Equipment::Bodyweight, Some("15-25")),
    ("Hanging Leg Raises", MuscleGroup::Abs, Equipment::Bodyweight, Some("10-15")),
    ("Hanging Knee Raises", MuscleGroup::Abs, Equipment::Bodyweight, Some("10-15")),
    ("Cable Crunches", MuscleGroup::Abs, Equipment::Cable, Some("15-20")),
    ("Ab Wheel Rollout", MuscleGroup::Abs, Equipment::Bodyweight, Some("10-15")),
    ("Bicycle Crunches", MuscleGroup::Abs, Equipment::Bodyweight, Some("15-20")),
    ("Mountain Climbers", MuscleGroup::Abs, Equipment::Bodyweight, Some("15-20")),
    ("Decline Sit-ups", MuscleGroup::Abs, Equipment::Bodyweight, Some("15-20")),
    ("V-ups", MuscleGroup::Abs, Equipment::Bodyweight, Some("10-15")),
    ("Dragon Flags", MuscleGroup::Abs, Equipment::Bodyweight, Some("5-10")),
    ("L-sit", MuscleGroup::Abs, Equipment::Bodyweight, Some("15-30s")),
    ("Russian Twists", MuscleGroup::Obliques, Equipment::Bodyweight, Some("15-20")),
    ("Cable Woodchoppers", MuscleGroup::Obliques, Equipment::Cable, Some("12-15")),
    ("Side Plank", MuscleGroup::Obliques, Equipment::Bodyweight, Some("30-60s")),
    ("Oblique Crunches", MuscleGroup::Obliques, Equipment::Bodyweight, Some("15-20")),
    ("Dumbbell Side Bend", MuscleGroup::Obliques, Equipment::Dumbbell, Some("12-15")),
    ("Pallof Press", MuscleGroup::Obliques, Equipment::Cable, Some("10-12")),
    ("Windshield Wipers", MuscleGroup::Obliques, Equipment::Bodyweight, Some("10-15")),
    ("Clean and Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("5-8")),
    ("Power Clean", MuscleGroup::UpperBack, Equipment::Barbell, Some("3-5")),
    ("Hang Clean", MuscleGroup::UpperBack, Equipment::Barbell, Some("3-5")),
    ("Snatch", MuscleGroup::UpperBack, Equipment::Barbell, Some("2-4")),
    ("Hang Snatch", MuscleGroup::UpperBack, Equipment::Barbell, Some("2-4")),
    ("Thrusters", MuscleGroup::Quads, Equipment::Barbell, Some("8-12")),
    ("Burpees", MuscleGroup::Abs, Equipment::Bodyweight, Some("10-15")),
    ("Battle Ropes", MuscleGroup::FrontDelts, Equipment::Bodyweight, Some("30-60s")),
    ("Zercher Squat", MuscleGroup::Quads, Equipment::Barbell, Some("6-10")),
    ("Anderson Squat", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Pin Squat", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Safety Bar Squat", MuscleGroup::Quads, Equipment::Barbell, Some("6-10")),
    ("Belt Squat", MuscleGroup::Quads, Equipment::Machine, Some("8-12")),
    ("Trap Bar Deadlift", MuscleGroup::Quads, Equipment::Barbell, Some("5-8")),
    ("Deficit Deadlift", MuscleGroup::LowerBack, Equipment::Barbell, Some("5-8")),
    ("Block Pull", MuscleGroup::UpperBack, Equipment::Barbell, Some("5-8")),
    ("Seal Row", MuscleGroup::MidBack, Equipment::Barbell, Some("8-12")),
    ("Meadows Row", MuscleGroup::Lats, Equipment::Barbell, Some("8-12")),
    ("Landmine Row", MuscleGroup::MidBack, Equipment::Barbell, Some("8-12")),
    ("Bradford Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("8-12")),
    ("Viking Press", MuscleGroup::FrontDelts, Equipment::Barbell, Some("8-12")),
    ("Lu Raise", MuscleGroup::SideDelts, Equipment::Dumbbell, Some("12-15")),
    ("Cuban Press", MuscleGroup::RearDelts, Equipment::Dumbbell, Some("10-12")),
    ("Waiter Curl", MuscleGroup::Biceps, Equipment::Dumbbell, Some("10-15")),
    ("21s (Bicep Curls)", MuscleGroup::Biceps, Equipment::Barbell, Some("21")),
    ("Zottman Curl", MuscleGroup::Forearms, Equipment::Dumbbell, Some("8-12")),
    ("Tate Press", MuscleGroup::Triceps, Equipment::Dumbbell, Some("10-12")),
    ("California Press", MuscleGroup::Triceps, Equipment::Barbell, Some("8-12")),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(exercises().len(), 170);
    }

    #[test]
    fn test_catalog_ids_are_unique_and_deterministic() {
        let ids = exercises().iter().map(|e| e.id).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 170);
        assert_eq!(exercises()[0].id, ExerciseID::from(1_u128));
        assert_eq!(exercises()[169].id, ExerciseID::from(170_u128));
    }

    #[test]
    fn test_catalog_first_entry() {
        let exercise = &exercises()[0];
        assert_eq!(exercise.name, Name::new("Barbell Bench Press").unwrap());
        assert_eq!(exercise.muscle_group, MuscleGroup::MidChest);
        assert_eq!(exercise.equipment, Equipment::Barbell);
        assert_eq!(exercise.rep_range.as_deref(), Some("5-8"));
    }

    #[test]
    fn test_catalog_covers_every_muscle_group() {
        let covered = exercises()
            .iter()
            .map(|e| e.muscle_group)
            .collect::<BTreeSet<_>>();
        assert_eq!(covered.len(), MuscleGroup::iter().count());
    }
}

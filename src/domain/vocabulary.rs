pub const EQUIPMENT_BARBELL: &str = "Barbell";
pub const EQUIPMENT_SQUAT_RACK: &str = "Squat Rack";
pub const EQUIPMENT_NONE: &str = "None";
pub const EQUIPMENT_PULLUP_BAR: &str = "Pullup Bar";
pub const EQUIPMENT_DUMBBELLS: &str = "Dumbbells";
pub const EQUIPMENT_WEIGHT_PLATES: &str = "Weight Plates";
pub const EQUIPMENT_LAT_PULLDOWN_MACHINE: &str = "Lat Pulldown Machine";
pub const EQUIPMENT_SMITH_MACHINE: &str = "Smith Machine";
pub const EQUIPMENT_CABLE_MACHINE: &str = "Cable Machine";
pub const EQUIPMENT_FLAT_BENCH: &str = "Flat Bench";
pub const EQUIPMENT_DECLINE_BENCH: &str = "Decline Bench";
pub const EQUIPMENT_INCLINE_BENCH: &str = "Incline Bench";
pub const EQUIPMENT_CHEST_PRESS_MACHINE: &str = "Chest Press Machine";
pub const EQUIPMENT_LEG_CURL_MACHINE: &str = "Leg Curl Machine";
pub const EQUIPMENT_LEG_EXTENSION_MACHINE: &str = "Leg Extension Machine";
pub const EQUIPMENT_LEG_PRESS_MACHINE: &str = "Leg Press Machine";
pub const EQUIPMENT_EZ_BAR: &str = "EZ Bar";

pub const ALL_EQUIPMENT_NAMES: &[&str] = &[
    EQUIPMENT_BARBELL,
    EQUIPMENT_SQUAT_RACK,
    EQUIPMENT_NONE,
    EQUIPMENT_PULLUP_BAR,
    EQUIPMENT_DUMBBELLS,
    EQUIPMENT_WEIGHT_PLATES,
    EQUIPMENT_LAT_PULLDOWN_MACHINE,
    EQUIPMENT_SMITH_MACHINE,
    EQUIPMENT_CABLE_MACHINE,
    EQUIPMENT_FLAT_BENCH,
    EQUIPMENT_DECLINE_BENCH,
    EQUIPMENT_INCLINE_BENCH,
    EQUIPMENT_CHEST_PRESS_MACHINE,
    EQUIPMENT_LEG_CURL_MACHINE,
    EQUIPMENT_LEG_EXTENSION_MACHINE,
    EQUIPMENT_LEG_PRESS_MACHINE,
    EQUIPMENT_EZ_BAR,
];

pub const MUSCLE_BACK: &str = "Back";
pub const MUSCLE_BICEPS: &str = "Biceps";
pub const MUSCLE_CHEST: &str = "Chest";
pub const MUSCLE_LEGS: &str = "Legs";
pub const MUSCLE_SHOULDERS: &str = "Shoulders";
pub const MUSCLE_TRICEPS: &str = "Triceps";
pub const MUSCLE_OBLIQUES: &str = "Obliques";
pub const MUSCLE_ABS: &str = "Abs";
pub const MUSCLE_FULL_BODY: &str = "Full Body";

pub const ALL_MUSCLE_GROUP_NAMES: &[&str] = &[
    MUSCLE_BACK,
    MUSCLE_BICEPS,
    MUSCLE_CHEST,
    MUSCLE_LEGS,
    MUSCLE_SHOULDERS,
    MUSCLE_TRICEPS,
    MUSCLE_OBLIQUES,
    MUSCLE_ABS,
    MUSCLE_FULL_BODY,
];

/// Case-insensitive membership test against a fixed list.
pub fn is_valid(name: &str, list: &[&str]) -> bool {
    list.iter()
        .any(|valid| valid.to_lowercase() == name.to_lowercase())
}

pub fn is_valid_equipment(name: &str) -> bool {
    is_valid(name, ALL_EQUIPMENT_NAMES)
}

pub fn is_valid_muscle_group(name: &str) -> bool {
    is_valid(name, ALL_MUSCLE_GROUP_NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_are_valid_in_any_case() {
        assert!(is_valid_equipment("Barbell"));
        assert!(is_valid_equipment("barbell"));
        assert!(is_valid_equipment("EZ BAR"));
        assert!(is_valid_muscle_group("full body"));
        assert!(is_valid_muscle_group("ABS"));
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(!is_valid_equipment("Kettlebell"));
        assert!(!is_valid_equipment(""));
        assert!(!is_valid_muscle_group("Calves"));
    }

    #[test]
    fn test_lists_do_not_cross() {
        assert!(!is_valid_equipment(MUSCLE_BACK));
        assert!(!is_valid_muscle_group(EQUIPMENT_BARBELL));
    }
}

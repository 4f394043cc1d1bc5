//! Exercise filtering.
//!
//! An exercise is kept when its equipment matches any requested equipment
//! name AND its muscles match any requested muscle name. Names compare
//! case-insensitively, and an empty filter list leaves its dimension
//! unconstrained. The input list is never modified and the output keeps the
//! input order.
//!
//! Stored tags are not assumed to come from the vocabulary: an unknown tag
//! simply never matches a filter it is not equal to.

use crate::domain::model::{Exercise, FilterRequest};

/// Returns true when `needles` is empty, otherwise when at least one
/// haystack entry equals one needle ignoring case.
///
/// Case folding is `str::to_lowercase`. The vocabulary is ASCII, where this
/// agrees with full Unicode case folding; a few non-ASCII pairs (final and
/// medial sigma, for one) would compare unequal.
pub fn matches_any<H, N>(haystack: &[H], needles: &[N]) -> bool
where
    H: AsRef<str>,
    N: AsRef<str>,
{
    let needles: Vec<String> = needles
        .iter()
        .map(|needle| needle.as_ref().to_lowercase())
        .collect();
    matches_normalized(haystack, &needles)
}

/// A filter request with its needles lower-cased once, reusable across every
/// exercise of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    equipment: Vec<String>,
    muscles: Vec<String>,
}

impl ExerciseFilter {
    pub fn new(request: &FilterRequest) -> Self {
        Self {
            equipment: normalize(&request.equipment),
            muscles: normalize(&request.muscles),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.equipment.is_empty() && self.muscles.is_empty()
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        matches_normalized(&exercise.equipment, &self.equipment)
            && matches_normalized(&exercise.muscles, &self.muscles)
    }

    pub fn apply(&self, exercises: &[Exercise]) -> Vec<Exercise> {
        exercises
            .iter()
            .filter(|exercise| self.matches(exercise))
            .cloned()
            .collect()
    }
}

/// Filters a catalog snapshot. See the module docs for the matching rules.
pub fn filter_exercises(exercises: &[Exercise], request: &FilterRequest) -> Vec<Exercise> {
    ExerciseFilter::new(request).apply(exercises)
}

fn normalize(names: &[String]) -> Vec<String> {
    names.iter().map(|name| name.to_lowercase()).collect()
}

// needles 已轉小寫
fn matches_normalized<H: AsRef<str>>(haystack: &[H], needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }

    haystack.iter().any(|item| {
        let item = item.as_ref().to_lowercase();
        needles.iter().any(|needle| *needle == item)
    })
}

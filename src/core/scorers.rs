//! Category scorers.
//!
//! Each scorer compares one candidate attribute group against the matching
//! preference and returns a normalized sub-score in [0, 1]. Absent candidate
//! fields are neutral inputs: they never cause an error.

use crate::models::{CandidateProfile, Preferences, RangePreference};

/// Wildcard accepted in community, diet, smoking and drinking preferences
pub const ANY: &str = "Any";

/// Sub-score lost per year outside the preferred age range
pub const AGE_DECAY_PER_YEAR: f64 = 0.2;

/// Sub-score lost per centimeter outside the preferred height range
pub const HEIGHT_DECAY_PER_CM: f64 = 0.05;

/// Multiplier applied to incomes quoted in lakhs
pub const LAKH: f64 = 100_000.0;

/// Education text that always satisfies the education check
const ALWAYS_ACCEPTED_EDUCATION: [&str; 2] = ["Ph.D", "Masters"];

const BASE_CREDIT: f64 = 0.2;

const HOROSCOPE_NEUTRAL: f64 = 0.5;
const HOROSCOPE_SAME_STAR: f64 = 0.8;
const HOROSCOPE_BASE: f64 = 0.6;

#[inline]
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Full credit inside the range, then linear decay per unit outside, floored at 0
#[inline]
fn range_decay_score(value: u16, range: Option<&RangePreference>, decay_per_unit: f64) -> f64 {
    match range {
        None => 1.0,
        Some(range) if range.contains(value) => 1.0,
        Some(range) => {
            let diff = range.distance_to(value) as f64;
            (1.0 - diff * decay_per_unit).max(0.0)
        }
    }
}

/// Calculate age score (0-1)
#[inline]
pub fn calculate_age_score(age: u8, range: Option<&RangePreference>) -> f64 {
    range_decay_score(u16::from(age), range, AGE_DECAY_PER_YEAR)
}

/// Calculate height score (0-1)
#[inline]
pub fn calculate_height_score(height_cm: u16, range: Option<&RangePreference>) -> f64 {
    range_decay_score(height_cm, range, HEIGHT_DECAY_PER_CM)
}

fn accepts(set: &[String], value: Option<&str>) -> bool {
    set.is_empty() || value.is_some_and(|v| set.iter().any(|s| s == v))
}

fn accepts_or_any(set: &[String], value: Option<&str>) -> bool {
    accepts(set, value) || set.iter().any(|s| s == ANY)
}

/// Religion and community, half credit each
pub fn calculate_social_score(profile: &CandidateProfile, preferences: &Preferences) -> f64 {
    let mut score = 0.0;

    if accepts(&preferences.religions, profile.religion.as_deref()) {
        score += 0.5;
    }

    if accepts_or_any(&preferences.communities, profile.community.as_deref()) {
        score += 0.5;
    }

    clamp01(score)
}

/// Parse free-text income such as "12 Lakhs" or "850000"
///
/// Takes the first number in the text, including a '.' directly before its
/// first digit. A sign is not part of the number. A "Lakh" suffix multiplies
/// it by 100,000. Anything unparseable is 0.
pub fn parse_income(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };

    let Some(first_digit) = text.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };
    let start = if text[..first_digit].ends_with('.') {
        first_digit - 1
    } else {
        first_digit
    };

    let number: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    let Ok(value) = number.parse::<f64>() else {
        return 0.0;
    };

    let value = if text.contains("Lakh") { value * LAKH } else { value };

    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn education_matches(education: Option<&str>, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }

    let education = education.unwrap_or_default();
    keywords.iter().any(|k| education.contains(k.as_str()))
        || ALWAYS_ACCEPTED_EDUCATION
            .iter()
            .any(|valve| education.contains(valve))
}

/// Education and income on top of a base credit
pub fn calculate_career_score(profile: &CandidateProfile, preferences: &Preferences) -> f64 {
    let mut score = BASE_CREDIT;

    if education_matches(profile.education.as_deref(), &preferences.education_keywords) {
        score += 0.4;
    }

    if parse_income(profile.income.as_deref()) >= preferences.min_income {
        score += 0.4;
    }

    clamp01(score)
}

fn habit_matches(candidate: Option<&str>, preferred: Option<&str>) -> bool {
    match preferred {
        None => true,
        Some(ANY) => true,
        Some(preferred) => candidate == Some(preferred),
    }
}

/// Diet, smoking and drinking on top of a base credit
pub fn calculate_lifestyle_score(profile: &CandidateProfile, preferences: &Preferences) -> f64 {
    let mut score = BASE_CREDIT;

    if accepts_or_any(&preferences.diets, profile.diet.as_deref()) {
        score += 0.4;
    }

    if habit_matches(profile.smoking.as_deref(), preferences.smoking.as_deref()) {
        score += 0.2;
    }

    if habit_matches(profile.drinking.as_deref(), preferences.drinking.as_deref()) {
        score += 0.2;
    }

    clamp01(score)
}

fn known_star(star: Option<&str>) -> Option<&str> {
    star.map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("unknown"))
}

/// Horoscope affinity placeholder
///
/// Neutral when either star is unknown, higher for the same star, flat
/// otherwise. This is not an astrological compatibility computation.
pub fn calculate_horoscope_score(seeker_star: Option<&str>, candidate_star: Option<&str>) -> f64 {
    match (known_star(seeker_star), known_star(candidate_star)) {
        (Some(seeker), Some(candidate)) if seeker.eq_ignore_ascii_case(candidate) => {
            HOROSCOPE_SAME_STAR
        }
        (Some(_), Some(_)) => HOROSCOPE_BASE,
        _ => HOROSCOPE_NEUTRAL,
    }
}

/// Whether a preferred location appears in the candidate's location text
///
/// False when the seeker has no location preference.
pub fn location_matches(profile: &CandidateProfile, preferences: &Preferences) -> bool {
    let location = profile.location.as_deref().unwrap_or_default();
    preferences
        .locations
        .iter()
        .any(|l| location.contains(l.as_str()))
}

/// Binary location score: 1.0 if any preferred location appears in the
/// candidate's location text (or there is no preference), else 0.0
pub fn calculate_location_score(profile: &CandidateProfile, preferences: &Preferences) -> f64 {
    if preferences.locations.is_empty() || location_matches(profile, preferences) {
        1.0
    } else {
        0.0
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive numeric range preference (years for age, centimeters for height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePreference {
    pub min: u16,
    pub max: u16,
}

impl RangePreference {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance to the nearer bound, 0 when inside the range
    #[inline]
    pub fn distance_to(&self, value: u16) -> u16 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0
        }
    }

    /// Widen both ends by `by`, saturating at the integer limits
    pub fn widened(&self, by: u16) -> Self {
        Self {
            min: self.min.saturating_sub(by),
            max: self.max.saturating_add(by),
        }
    }

    pub fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.min > self.max {
            return Err(ValidationError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Seeker preferences
///
/// Empty sets and absent ranges mean "no constraint" for that check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<RangePreference>,
    #[serde(rename = "heightRange", default)]
    pub height_range: Option<RangePreference>,
    #[serde(rename = "maritalStatuses", default)]
    pub marital_statuses: Vec<String>,
    #[serde(default)]
    pub religions: Vec<String>,
    #[serde(default)]
    pub communities: Vec<String>,
    #[serde(rename = "educationKeywords", default)]
    pub education_keywords: Vec<String>,
    #[serde(rename = "occupationCategories", default)]
    pub occupation_categories: Vec<String>,
    #[serde(rename = "minIncome", default)]
    pub min_income: f64,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub stars: Vec<String>,
}

impl Preferences {
    /// Check the hard preconditions of a scoring run
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(range) = &self.age_range {
            range.validate("age")?;
        }
        if let Some(range) = &self.height_range {
            range.validate("height")?;
        }
        Ok(())
    }
}

/// The seeker on whose behalf a scoring run happens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerContext {
    #[serde(rename = "seekerId")]
    pub seeker_id: String,
    #[serde(default)]
    pub star: Option<String>,
}

/// Candidate profile as supplied by the profile directory. Never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub age: u8,
    #[serde(rename = "heightCm")]
    pub height_cm: u16,
    #[serde(rename = "maritalStatus", default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub income: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub star: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
}

/// Occupations the seeker has previously viewed or liked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionHistory {
    #[serde(rename = "viewedOccupations", default)]
    pub viewed_occupations: Vec<String>,
    #[serde(rename = "likedOccupations", default)]
    pub liked_occupations: Vec<String>,
}

/// Explanation label attached to a scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTag {
    #[serde(rename = "Nearby Match")]
    NearbyMatch,
    #[serde(rename = "Community Match")]
    CommunityMatch,
    #[serde(rename = "Career Match")]
    CareerMatch,
    #[serde(rename = "Super Match")]
    SuperMatch,
    #[serde(rename = "Verified")]
    Verified,
    #[serde(rename = "Flexible Match")]
    FlexibleMatch,
}

impl MatchTag {
    pub fn label(&self) -> &'static str {
        match self {
            MatchTag::NearbyMatch => "Nearby Match",
            MatchTag::CommunityMatch => "Community Match",
            MatchTag::CareerMatch => "Career Match",
            MatchTag::SuperMatch => "Super Match",
            MatchTag::Verified => "Verified",
            MatchTag::FlexibleMatch => "Flexible Match",
        }
    }
}

impl std::fmt::Display for MatchTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted category contributions. Location and boosts are not included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Age plus height
    pub basic: f64,
    pub social: f64,
    pub career: f64,
    pub lifestyle: f64,
    pub horoscope: f64,
}

/// Scored match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub profile: CandidateProfile,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub tags: Vec<MatchTag>,
    #[serde(rename = "isFallback")]
    pub is_fallback: bool,
}

impl ScoredCandidate {
    pub fn has_tag(&self, tag: MatchTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Scoring weights
///
/// Category allocations are points awarded for a full sub-score. The seven
/// categories plus both boost ceilings exceed 100; the total is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub age: f64,
    pub height: f64,
    pub social: f64,
    pub career: f64,
    pub lifestyle: f64,
    pub horoscope: f64,
    pub location: f64,
    pub liked_occupation_boost: f64,
    pub verified_boost: f64,
    pub premium_boost: f64,
    pub behavioral_cap: f64,
    pub trust_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 15.0,
            height: 10.0,
            social: 20.0,
            career: 20.0,
            lifestyle: 15.0,
            horoscope: 10.0,
            location: 5.0,
            liked_occupation_boost: 2.0,
            verified_boost: 3.0,
            premium_boost: 2.0,
            behavioral_cap: 5.0,
            trust_cap: 5.0,
        }
    }
}

/// How far the fallback relaxer widens numeric ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxationPolicy {
    pub age_widen_years: u16,
    pub height_widen_cm: u16,
}

impl Default for RelaxationPolicy {
    fn default() -> Self {
        Self {
            age_widen_years: 2,
            height_widen_cm: 5,
        }
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::MatchOptions;
use crate::models::{RelaxationPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub fallback: FallbackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Point allocations per category plus boost amounts and ceilings
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_height_weight")]
    pub height: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
    #[serde(default = "default_career_weight")]
    pub career: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_horoscope_weight")]
    pub horoscope: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_liked_occupation_boost")]
    pub liked_occupation_boost: f64,
    #[serde(default = "default_verified_boost")]
    pub verified_boost: f64,
    #[serde(default = "default_premium_boost")]
    pub premium_boost: f64,
    #[serde(default = "default_boost_cap")]
    pub behavioral_cap: f64,
    #[serde(default = "default_boost_cap")]
    pub trust_cap: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_age_weight(),
            height: default_height_weight(),
            social: default_social_weight(),
            career: default_career_weight(),
            lifestyle: default_lifestyle_weight(),
            horoscope: default_horoscope_weight(),
            location: default_location_weight(),
            liked_occupation_boost: default_liked_occupation_boost(),
            verified_boost: default_verified_boost(),
            premium_boost: default_premium_boost(),
            behavioral_cap: default_boost_cap(),
            trust_cap: default_boost_cap(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        Self {
            age: w.age,
            height: w.height,
            social: w.social,
            career: w.career,
            lifestyle: w.lifestyle,
            horoscope: w.horoscope,
            location: w.location,
            liked_occupation_boost: w.liked_occupation_boost,
            verified_boost: w.verified_boost,
            premium_boost: w.premium_boost,
            behavioral_cap: w.behavioral_cap,
            trust_cap: w.trust_cap,
        }
    }
}

fn default_age_weight() -> f64 { 15.0 }
fn default_height_weight() -> f64 { 10.0 }
fn default_social_weight() -> f64 { 20.0 }
fn default_career_weight() -> f64 { 20.0 }
fn default_lifestyle_weight() -> f64 { 15.0 }
fn default_horoscope_weight() -> f64 { 10.0 }
fn default_location_weight() -> f64 { 5.0 }
fn default_liked_occupation_boost() -> f64 { 2.0 }
fn default_verified_boost() -> f64 { 3.0 }
fn default_premium_boost() -> f64 { 2.0 }
fn default_boost_cap() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default)]
    pub min_score: u8,
    #[serde(default = "default_min_results")]
    pub min_results: usize,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0,
            min_results: default_min_results(),
            max_pool_size: default_max_pool_size(),
        }
    }
}

impl MatchingSettings {
    /// Defaults for a request that did not override them
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            min_score: self.min_score,
            min_results: self.min_results,
            limit: self.default_limit as usize,
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_min_results() -> usize { 5 }
fn default_max_pool_size() -> usize { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    #[serde(default = "default_age_widen_years")]
    pub age_widen_years: u16,
    #[serde(default = "default_height_widen_cm")]
    pub height_widen_cm: u16,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            age_widen_years: default_age_widen_years(),
            height_widen_cm: default_height_widen_cm(),
        }
    }
}

impl From<&FallbackSettings> for RelaxationPolicy {
    fn from(f: &FallbackSettings) -> Self {
        Self {
            age_widen_years: f.age_widen_years,
            height_widen_cm: f.height_widen_cm,
        }
    }
}

fn default_age_widen_years() -> u16 { 2 }
fn default_height_widen_cm() -> u16 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn relaxation_policy(&self) -> RelaxationPolicy {
        RelaxationPolicy::from(&self.fallback)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

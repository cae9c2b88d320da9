//! Core types for nutriplan
//!
//! This module defines the closed enumerations the calculator works with and the
//! boundary record handed to the core. Every enumeration has exactly one
//! designated default and parses leniently: an unrecognized string maps to that
//! default instead of failing.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Biological sex used to pick the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Map a free-form string onto the binary switch.
    ///
    /// Only `"male"` (any case, no surrounding whitespace) selects
    /// [`Gender::Male`]; every other value, including the empty string, selects
    /// [`Gender::Female`].
    pub fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from_key(&value)
    }
}

/// Named calorie-offset / macro-ratio regime applied on top of TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DietPhase {
    ExtremeCutting,
    Cutting,
    MiniCutting,
    Maintenance,
    MiniBulking,
    Bulking,
    ExtremeBulking,
}

impl DietPhase {
    pub const ALL: [DietPhase; 7] = [
        DietPhase::ExtremeCutting,
        DietPhase::Cutting,
        DietPhase::MiniCutting,
        DietPhase::Maintenance,
        DietPhase::MiniBulking,
        DietPhase::Bulking,
        DietPhase::ExtremeBulking,
    ];

    /// Fallback for unrecognized phase names
    pub const DEFAULT: DietPhase = DietPhase::Maintenance;

    /// Strict, case-insensitive parse. Returns `None` for unknown keys,
    /// including keys padded with whitespace.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(key))
    }

    /// Lenient parse: unknown keys become [`DietPhase::DEFAULT`].
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = Self::DEFAULT.as_str(), "unknown diet phase");
            Self::DEFAULT
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietPhase::ExtremeCutting => "extreme_cutting",
            DietPhase::Cutting => "cutting",
            DietPhase::MiniCutting => "mini_cutting",
            DietPhase::Maintenance => "maintenance",
            DietPhase::MiniBulking => "mini_bulking",
            DietPhase::Bulking => "bulking",
            DietPhase::ExtremeBulking => "extreme_bulking",
        }
    }
}

impl Default for DietPhase {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<String> for DietPhase {
    fn from(value: String) -> Self {
        DietPhase::from_key(&value)
    }
}

/// Daily physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
        ActivityLevel::VeryIntense,
    ];

    /// Fallback for unrecognized activity names
    pub const DEFAULT: ActivityLevel = ActivityLevel::Sedentary;

    /// Exact, case-sensitive parse. Returns `None` for unknown keys.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == key)
    }

    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = Self::DEFAULT.as_str(), "unknown activity level");
            Self::DEFAULT
        })
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::VeryIntense => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
            ActivityLevel::VeryIntense => "very_intense",
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::from_key(&value)
    }
}

/// Validated input handed to the calculation core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age_years: u32,
    pub gender: Gender,
    pub diet_phase: DietPhase,
    pub activity_level: ActivityLevel,
    /// Number of meals the daily target is split across
    pub meal_count: u32,
}

impl PlanInput {
    /// Check the numeric preconditions the core relies on.
    ///
    /// The enumerated fields need no check: they were already mapped onto
    /// their defaults during deserialization.
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_positive("weight_kg", self.weight_kg)?;
        ensure_positive("height_cm", self.height_cm)?;
        if self.age_years == 0 {
            return Err(InputError::NotPositive { field: "age_years" });
        }
        if self.meal_count == 0 {
            return Err(InputError::NotPositive { field: "meal_count" });
        }
        Ok(())
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    // NaN fails this comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NotPositive { field })
    }
}

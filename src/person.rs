//! Energy profile
//!
//! A [`Person`] derives three values from its biometrics, once, at
//! construction:
//! - BMR via Mifflin-St Jeor
//! - total daily expenditure (BMR x activity multiplier)
//! - diet target (total expenditure + diet phase offset, truncated)

use serde::Serialize;

use crate::types::{ActivityLevel, DietPhase, Gender, PlanInput};

/// Mifflin-St Jeor constant for men (kcal)
pub const MALE_BMR_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor constant for women (kcal)
pub const FEMALE_BMR_CONSTANT: f64 = -161.0;

/// Biometrics plus the energy values derived from them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    diet_phase: DietPhase,
    activity_level: ActivityLevel,
    bmr_kcal: f64,
    total_expenditure_kcal: f64,
    diet_target_kcal: i32,
}

impl Person {
    /// Build a person and compute its energy profile.
    ///
    /// Inputs are expected to be validated already (positive weight, height
    /// and age).
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: Gender,
        diet_phase: DietPhase,
        activity_level: ActivityLevel,
    ) -> Self {
        let bmr_kcal = compute_bmr(weight_kg, height_cm, age_years, gender);
        let total_expenditure_kcal = compute_total_expenditure(bmr_kcal, activity_level);
        let diet_target_kcal = compute_diet_target(total_expenditure_kcal, diet_phase);

        tracing::debug!(
            bmr_kcal,
            total_expenditure_kcal,
            diet_target_kcal,
            diet_phase = diet_phase.as_str(),
            activity_level = activity_level.as_str(),
            "energy profile computed"
        );

        Self {
            weight_kg,
            height_cm,
            age_years,
            gender,
            diet_phase,
            activity_level,
            bmr_kcal,
            total_expenditure_kcal,
            diet_target_kcal,
        }
    }

    /// Build a person from string keys, applying the lenient fallbacks
    /// (female, maintenance, sedentary) to unrecognized values.
    pub fn from_keys(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: &str,
        diet_phase: &str,
        activity_level: &str,
    ) -> Self {
        Self::new(
            weight_kg,
            height_cm,
            age_years,
            Gender::from_key(gender),
            DietPhase::from_key(diet_phase),
            ActivityLevel::from_key(activity_level),
        )
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn diet_phase(&self) -> DietPhase {
        self.diet_phase
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Basal metabolic rate (kcal/day)
    pub fn bmr_kcal(&self) -> f64 {
        self.bmr_kcal
    }

    /// Total daily energy expenditure (kcal/day)
    pub fn total_expenditure_kcal(&self) -> f64 {
        self.total_expenditure_kcal
    }

    /// Calorie target after the diet phase offset (kcal/day)
    pub fn diet_target_kcal(&self) -> i32 {
        self.diet_target_kcal
    }
}

impl From<&PlanInput> for Person {
    fn from(input: &PlanInput) -> Self {
        Person::new(
            input.weight_kg,
            input.height_cm,
            input.age_years,
            input.gender,
            input.diet_phase,
            input.activity_level,
        )
    }
}

fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let constant = match gender {
        Gender::Male => MALE_BMR_CONSTANT,
        Gender::Female => FEMALE_BMR_CONSTANT,
    };
    (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * f64::from(age_years)) + constant
}

fn compute_total_expenditure(bmr_kcal: f64, activity_level: ActivityLevel) -> f64 {
    bmr_kcal * activity_level.multiplier()
}

/// Truncates toward zero, not rounding
fn compute_diet_target(total_expenditure_kcal: f64, diet_phase: DietPhase) -> i32 {
    (total_expenditure_kcal + f64::from(diet_phase.calorie_offset())).trunc() as i32
}

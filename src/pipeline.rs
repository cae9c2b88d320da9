//! Pipeline orchestration
//!
//! This module provides the public API for nutriplan. It chains the stages
//! from input to report:
//! 1. PlanInput (or RawForm) validation
//! 2. Person - energy profile
//! 3. MealPlanner - macro split and meal distribution
//! 4. ReportEncoder - JSON envelope

use crate::error::ComputeError;
use crate::form::RawForm;
use crate::meal::MealPlanner;
use crate::person::Person;
use crate::report::{NutritionReport, ProfileSummary, ReportEncoder};
use crate::types::PlanInput;

/// Compute the full report for validated input.
///
/// Pure: identical input always yields an identical report. `input.meal_count`
/// must be positive.
pub fn compute_plan(input: &PlanInput) -> NutritionReport {
    let person = Person::from(input);
    let plan = MealPlanner::compute(&person, input.meal_count);

    NutritionReport {
        profile: ProfileSummary::from(&person),
        plan,
    }
}

/// Convert a `PlanInput` JSON object into a report envelope JSON.
///
/// # Example
/// ```ignore
/// let report = plan_to_json(r#"{
///     "weight_kg": 80, "height_cm": 180, "age_years": 25,
///     "gender": "male", "diet_phase": "maintenance",
///     "activity_level": "moderate", "meal_count": 4
/// }"#.to_string())?;
/// ```
pub fn plan_to_json(raw_json: String) -> Result<String, ComputeError> {
    let input: PlanInput = serde_json::from_str(&raw_json)?;
    input.validate()?;
    ReportEncoder::new().encode_to_json(compute_plan(&input))
}

/// Convert a `RawForm` JSON object (string fields as typed by a user) into a
/// report envelope JSON.
pub fn form_to_json(raw_json: String) -> Result<String, ComputeError> {
    let form: RawForm = serde_json::from_str(&raw_json)?;
    let input = form.validate()?;
    ReportEncoder::new().encode_to_json(compute_plan(&input))
}

//! Form input adapter
//!
//! Turns the raw strings a user types into a form into a validated
//! [`PlanInput`]. This is where unit suffixes, decimal commas and display
//! labels are handled; the core never sees unvalidated text.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::labels::Labeled;
use crate::types::{ensure_positive, ActivityLevel, DietPhase, Gender, PlanInput};

/// Form fields exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub gender: String,
    pub diet_phase: String,
    pub activity_level: String,
    pub meal_count: String,
}

impl RawForm {
    /// Validate and convert into a [`PlanInput`].
    ///
    /// Numbers accept a decimal comma and an optional unit suffix (`80,5kg`,
    /// `180 cm`). Selections accept a canonical key or a display label in any
    /// locale; an unrecognized but non-empty selection is passed on and
    /// resolved by the core's fallback rules.
    pub fn validate(&self) -> Result<PlanInput, InputError> {
        let weight_kg = parse_decimal("weight", &self.weight, "kg")?;
        let height_cm = parse_decimal("height", &self.height, "cm")?;
        let age_years = parse_count("age", &self.age)?;
        let meal_count = parse_count("meal_count", &self.meal_count)?;

        ensure_positive("weight", weight_kg)?;
        ensure_positive("height", height_cm)?;

        let gender = resolve_selection("gender", &self.gender, Gender::from_key)?;
        let diet_phase = resolve_selection("diet_phase", &self.diet_phase, DietPhase::from_key)?;
        let activity_level = resolve_selection(
            "activity_level",
            &self.activity_level,
            ActivityLevel::from_key,
        )?;

        Ok(PlanInput {
            weight_kg,
            height_cm,
            age_years,
            gender,
            diet_phase,
            activity_level,
            meal_count,
        })
    }
}

/// Normalize a typed number: lowercase, drop the unit, decimal comma to dot
fn sanitize(raw: &str, unit: &str) -> String {
    let lowered = raw.trim().to_lowercase().replace(',', ".");
    let without_unit = match lowered.strip_suffix(unit) {
        Some(rest) => rest,
        None => &lowered,
    };
    without_unit.trim().to_string()
}

fn parse_decimal(field: &'static str, raw: &str, unit: &str) -> Result<f64, InputError> {
    sanitize(raw, unit)
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Whole, strictly positive number
fn parse_count(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let value = raw.trim().parse::<i64>().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if value <= 0 {
        return Err(InputError::NotPositive { field });
    }

    u32::try_from(value).map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn resolve_selection<T: Labeled>(
    field: &'static str,
    raw: &str,
    from_key: fn(&str) -> T,
) -> Result<T, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::MissingSelection { field });
    }
    Ok(T::from_label(text).unwrap_or_else(|| from_key(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn portuguese_form() -> RawForm {
        RawForm {
            weight: "80,5kg".to_string(),
            height: "180cm".to_string(),
            age: "25".to_string(),
            gender: "Masculino".to_string(),
            diet_phase: "Manutenção".to_string(),
            activity_level: "Moderado".to_string(),
            meal_count: "4".to_string(),
        }
    }

    #[test]
    fn test_validate_localized_form() {
        let input = portuguese_form().validate().unwrap();

        assert_eq!(
            input,
            PlanInput {
                weight_kg: 80.5,
                height_cm: 180.0,
                age_years: 25,
                gender: Gender::Male,
                diet_phase: DietPhase::Maintenance,
                activity_level: ActivityLevel::Moderate,
                meal_count: 4,
            }
        );
    }

    #[test]
    fn test_accepts_canonical_keys_and_spaced_units() {
        let form = RawForm {
            weight: " 72.3 KG ".to_string(),
            height: "168 cm".to_string(),
            gender: "female".to_string(),
            diet_phase: "MINI_BULKING".to_string(),
            activity_level: "very_intense".to_string(),
            ..portuguese_form()
        };

        let input = form.validate().unwrap();
        assert_eq!(input.weight_kg, 72.3);
        assert_eq!(input.height_cm, 168.0);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.diet_phase, DietPhase::MiniBulking);
        assert_eq!(input.activity_level, ActivityLevel::VeryIntense);
    }

    #[test]
    fn test_unrecognized_selection_falls_back() {
        let form = RawForm {
            diet_phase: "keto".to_string(),
            activity_level: "couch".to_string(),
            gender: "other".to_string(),
            ..portuguese_form()
        };

        let input = form.validate().unwrap();
        assert_eq!(input.diet_phase, DietPhase::Maintenance);
        assert_eq!(input.activity_level, ActivityLevel::Sedentary);
        assert_eq!(input.gender, Gender::Female);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let form = RawForm {
            weight: "heavy".to_string(),
            ..portuguese_form()
        };

        assert_eq!(
            form.validate(),
            Err(InputError::NotANumber {
                field: "weight",
                value: "heavy".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_fractional_age() {
        let form = RawForm {
            age: "25.5".to_string(),
            ..portuguese_form()
        };
        assert!(matches!(
            form.validate(),
            Err(InputError::NotANumber { field: "age", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive() {
        let zero_meals = RawForm {
            meal_count: "0".to_string(),
            ..portuguese_form()
        };
        assert_eq!(
            zero_meals.validate(),
            Err(InputError::NotPositive { field: "meal_count" })
        );

        let negative_weight = RawForm {
            weight: "-70".to_string(),
            ..portuguese_form()
        };
        assert_eq!(
            negative_weight.validate(),
            Err(InputError::NotPositive { field: "weight" })
        );
    }

    #[test]
    fn test_rejects_missing_selection() {
        let form = RawForm {
            activity_level: "  ".to_string(),
            ..portuguese_form()
        };
        assert_eq!(
            form.validate(),
            Err(InputError::MissingSelection { field: "activity_level" })
        );
    }

    #[test]
    fn test_empty_form_is_invalid() {
        assert!(RawForm::default().validate().is_err());
    }
}

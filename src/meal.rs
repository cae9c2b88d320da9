//! Meal planning
//!
//! Splits a person's diet target into protein, fat and carbohydrate, then
//! distributes the totals across a number of meals.
//!
//! All arithmetic runs in full precision and each daily total is rounded to one
//! decimal once, after its derivation is complete. Per-meal grams are the one
//! exception: they divide the rounded daily totals, then round again, so a
//! meal always shows an even share of the figures reported beside it.

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Atwater energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Atwater energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// Atwater energy density of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARBOHYDRATE: f64 = 4.0;

/// Grams and energy of one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroAmount {
    pub grams: f64,
    pub kcal: f64,
}

/// Daily macronutrient totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: MacroAmount,
    pub fat: MacroAmount,
    pub carbohydrate: MacroAmount,
}

/// Macronutrient grams for a single meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerMealMacros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrate_g: f64,
}

/// Daily target split into macros and meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResult {
    pub total_kcal: i32,
    pub meal_count: u32,
    pub kcal_per_meal: f64,
    pub total_macros: MacroTotals,
    pub per_meal_macros: PerMealMacros,
}

/// Unrounded macro split
#[derive(Debug, Clone, Copy)]
struct RawSplit {
    protein_g: f64,
    fat_g: f64,
    carbohydrate_g: f64,
    kcal_protein: f64,
    kcal_fat: f64,
    kcal_carbohydrate: f64,
}

/// Meal plan calculator
pub struct MealPlanner;

impl MealPlanner {
    /// Compute the macro split and per-meal distribution for a person.
    ///
    /// `meal_count` must be positive; callers validate it before reaching this
    /// point (see [`PlanInput::validate`](crate::types::PlanInput::validate)).
    pub fn compute(person: &Person, meal_count: u32) -> MealPlanResult {
        let total_kcal = person.diet_target_kcal();
        let split = split_macros(person);
        let meals = f64::from(meal_count);

        if split.kcal_carbohydrate == 0.0 {
            tracing::debug!(
                total_kcal,
                kcal_protein = split.kcal_protein,
                kcal_fat = split.kcal_fat,
                "protein and fat exceed target, carbohydrate clamped to zero"
            );
        }

        let total_macros = MacroTotals {
            protein: MacroAmount {
                grams: round1(split.protein_g),
                kcal: round1(split.kcal_protein),
            },
            fat: MacroAmount {
                grams: round1(split.fat_g),
                kcal: round1(split.kcal_fat),
            },
            carbohydrate: MacroAmount {
                grams: round1(split.carbohydrate_g),
                kcal: round1(split.kcal_carbohydrate),
            },
        };

        // Per-meal grams split the reported totals so they agree with them
        let per_meal_macros = PerMealMacros {
            protein_g: round1(total_macros.protein.grams / meals),
            fat_g: round1(total_macros.fat.grams / meals),
            carbohydrate_g: round1(total_macros.carbohydrate.grams / meals),
        };

        MealPlanResult {
            total_kcal,
            meal_count,
            kcal_per_meal: round1(f64::from(total_kcal) / meals),
            total_macros,
            per_meal_macros,
        }
    }
}

fn split_macros(person: &Person) -> RawSplit {
    let weight = person.weight_kg();
    let ratios = person.diet_phase().macro_ratios();

    let protein_g = weight * ratios.protein_g_per_kg;
    let fat_g = weight * ratios.fat_g_per_kg;

    let kcal_protein = protein_g * KCAL_PER_G_PROTEIN;
    let kcal_fat = fat_g * KCAL_PER_G_FAT;
    let remaining = f64::from(person.diet_target_kcal()) - (kcal_protein + kcal_fat);

    // Saturate rather than report a negative carbohydrate budget
    let (kcal_carbohydrate, carbohydrate_g) = if remaining < 0.0 {
        (0.0, 0.0)
    } else {
        (remaining, remaining / KCAL_PER_G_CARBOHYDRATE)
    };

    RawSplit {
        protein_g,
        fat_g,
        carbohydrate_g,
        kcal_protein,
        kcal_fat,
        kcal_carbohydrate,
    }
}

/// Round to one decimal place, halves away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityLevel, DietPhase, Gender};
    use pretty_assertions::assert_eq;

    fn reference_person() -> Person {
        Person::new(
            80.0,
            180.0,
            25,
            Gender::Male,
            DietPhase::Maintenance,
            ActivityLevel::Moderate,
        )
    }

    #[test]
    fn test_reference_plan() {
        let plan = MealPlanner::compute(&reference_person(), 4);

        let expected = MealPlanResult {
            total_kcal: 2797,
            meal_count: 4,
            kcal_per_meal: 699.3,
            total_macros: MacroTotals {
                protein: MacroAmount { grams: 128.0, kcal: 512.0 },
                fat: MacroAmount { grams: 80.0, kcal: 720.0 },
                carbohydrate: MacroAmount { grams: 391.3, kcal: 1565.0 },
            },
            per_meal_macros: PerMealMacros {
                protein_g: 32.0,
                fat_g: 20.0,
                carbohydrate_g: 97.8,
            },
        };

        assert_eq!(plan, expected);
    }

    #[test]
    fn test_cutting_plan() {
        let person = Person::new(
            60.0,
            165.0,
            30,
            Gender::Female,
            DietPhase::Cutting,
            ActivityLevel::Sedentary,
        );
        let plan = MealPlanner::compute(&person, 3);

        assert_eq!(plan.total_kcal, 1284);
        assert_eq!(plan.kcal_per_meal, 428.0);
        assert_eq!(plan.total_macros.protein, MacroAmount { grams: 132.0, kcal: 528.0 });
        assert_eq!(plan.total_macros.fat, MacroAmount { grams: 42.0, kcal: 378.0 });
        assert_eq!(plan.total_macros.carbohydrate, MacroAmount { grams: 94.5, kcal: 378.0 });
        assert_eq!(
            plan.per_meal_macros,
            PerMealMacros { protein_g: 44.0, fat_g: 14.0, carbohydrate_g: 31.5 }
        );
    }

    #[test]
    fn test_per_meal_grams_split_reported_totals() {
        // 158.25 g carbohydrate is reported as 158.3, and 158.3 / 2 rounds to 79.2
        let person = Person::new(
            30.0,
            160.0,
            30,
            Gender::Male,
            DietPhase::Cutting,
            ActivityLevel::Sedentary,
        );
        let plan = MealPlanner::compute(&person, 2);

        assert_eq!(plan.total_kcal, 1086);
        assert_eq!(plan.total_macros.carbohydrate.grams, 158.3);
        assert_eq!(
            plan.per_meal_macros,
            PerMealMacros { protein_g: 33.0, fat_g: 10.5, carbohydrate_g: 79.2 }
        );

        // 18.06 g fat is reported as 18.1, and 18.1 / 2 rounds to 9.1
        let person = Person::new(
            30.1,
            160.0,
            30,
            Gender::Female,
            DietPhase::ExtremeCutting,
            ActivityLevel::Sedentary,
        );
        let plan = MealPlanner::compute(&person, 2);

        assert_eq!(plan.total_macros.fat.grams, 18.1);
        assert_eq!(plan.per_meal_macros.fat_g, 9.1);
    }

    #[test]
    fn test_carbohydrate_clamped_to_zero() {
        // 480 g protein + 120 g fat = 3000 kcal, above the 2351 kcal target
        let person = Person::new(
            200.0,
            150.0,
            80,
            Gender::Female,
            DietPhase::ExtremeCutting,
            ActivityLevel::Sedentary,
        );
        let plan = MealPlanner::compute(&person, 5);

        assert_eq!(plan.total_kcal, 2351);
        assert_eq!(plan.total_macros.protein.kcal, 1920.0);
        assert_eq!(plan.total_macros.fat.kcal, 1080.0);
        assert_eq!(plan.total_macros.carbohydrate, MacroAmount { grams: 0.0, kcal: 0.0 });
        assert_eq!(plan.per_meal_macros.carbohydrate_g, 0.0);
    }

    #[test]
    fn test_carbohydrate_never_negative() {
        for phase in DietPhase::ALL {
            for weight in [40.0, 80.0, 120.0, 180.0, 250.0] {
                let person = Person::new(
                    weight,
                    160.0,
                    50,
                    Gender::Female,
                    phase,
                    ActivityLevel::Sedentary,
                );
                let plan = MealPlanner::compute(&person, 3);
                assert!(plan.total_macros.carbohydrate.kcal >= 0.0);
                assert!(plan.total_macros.carbohydrate.grams >= 0.0);
            }
        }
    }

    #[test]
    fn test_carbohydrate_fills_remaining_energy() {
        let person = reference_person();
        let plan = MealPlanner::compute(&person, 1);
        let macros = plan.total_macros;

        let sum = macros.protein.kcal + macros.fat.kcal + macros.carbohydrate.kcal;
        assert!((sum - f64::from(plan.total_kcal)).abs() < 0.1);
    }

    #[test]
    fn test_per_meal_grams_sum_to_totals() {
        let person = Person::new(
            73.4,
            171.0,
            41,
            Gender::Male,
            DietPhase::MiniBulking,
            ActivityLevel::Intense,
        );

        for meal_count in 1..=8u32 {
            let plan = MealPlanner::compute(&person, meal_count);
            let meals = f64::from(meal_count);
            let tolerance = 0.1 * meals;

            let total = plan.total_macros;
            let per_meal = plan.per_meal_macros;
            assert!((per_meal.protein_g * meals - total.protein.grams).abs() <= tolerance);
            assert!((per_meal.fat_g * meals - total.fat.grams).abs() <= tolerance);
            assert!(
                (per_meal.carbohydrate_g * meals - total.carbohydrate.grams).abs() <= tolerance
            );
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let person = reference_person();
        let first = MealPlanner::compute(&person, 4);
        let second = MealPlanner::compute(&person, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_round1_halves_away_from_zero() {
        assert_eq!(round1(425.25), 425.3);
        assert_eq!(round1(733.25), 733.3);
        assert_eq!(round1(97.8125), 97.8);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(-2.25), -2.3);
    }
}

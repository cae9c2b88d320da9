//! Report encoding
//!
//! Wraps a computed [`NutritionReport`] with producer metadata for JSON output
//! and renders it as localized plain text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ComputeError;
use crate::labels::{Labeled, Locale};
use crate::meal::{MacroAmount, MealPlanResult};
use crate::person::Person;
use crate::types::{ActivityLevel, DietPhase, Gender};
use crate::{NUTRIPLAN_VERSION, PRODUCER_NAME};

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Person's inputs and derived energy values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub diet_phase: DietPhase,
    pub activity_level: ActivityLevel,
    pub bmr_kcal: f64,
    pub total_expenditure_kcal: f64,
    pub diet_target_kcal: i32,
}

impl From<&Person> for ProfileSummary {
    fn from(person: &Person) -> Self {
        Self {
            weight_kg: person.weight_kg(),
            height_cm: person.height_cm(),
            age_years: person.age_years(),
            gender: person.gender(),
            diet_phase: person.diet_phase(),
            activity_level: person.activity_level(),
            bmr_kcal: person.bmr_kcal(),
            total_expenditure_kcal: person.total_expenditure_kcal(),
            diet_target_kcal: person.diet_target_kcal(),
        }
    }
}

/// Full result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    pub profile: ProfileSummary,
    pub plan: MealPlanResult,
}

/// Producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Report plus provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub report: NutritionReport,
}

/// Encoder for report envelopes
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn encode(&self, report: NutritionReport) -> ReportEnvelope {
        self.encode_at(report, Utc::now())
    }

    /// Encode with an explicit timestamp
    pub fn encode_at(&self, report: NutritionReport, computed_at: DateTime<Utc>) -> ReportEnvelope {
        ReportEnvelope {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: NUTRIPLAN_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: computed_at.to_rfc3339(),
            report,
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(&self, report: NutritionReport) -> Result<String, ComputeError> {
        let envelope = self.encode(report);
        serde_json::to_string_pretty(&envelope).map_err(ComputeError::JsonError)
    }
}

/// Section headings and field captions for one locale
struct Captions {
    profile: &'static str,
    weight: &'static str,
    height: &'static str,
    age: &'static str,
    years: &'static str,
    gender: &'static str,
    activity: &'static str,
    bmr: &'static str,
    total_expenditure: &'static str,
    diet_plan: &'static str,
    diet: &'static str,
    total_kcal: &'static str,
    meal_count: &'static str,
    kcal_per_meal: &'static str,
    total_macros: &'static str,
    per_meal: &'static str,
    protein: &'static str,
    fat: &'static str,
    carbohydrate: &'static str,
}

const EN: Captions = Captions {
    profile: "PROFILE",
    weight: "Weight",
    height: "Height",
    age: "Age",
    years: "years",
    gender: "Sex",
    activity: "Activity",
    bmr: "BMR",
    total_expenditure: "Total Expenditure",
    diet_plan: "DIET PLAN",
    diet: "Diet",
    total_kcal: "Total Calories",
    meal_count: "Number of Meals",
    kcal_per_meal: "Calories per Meal",
    total_macros: "TOTAL MACRONUTRIENTS",
    per_meal: "PER MEAL",
    protein: "Protein",
    fat: "Fat",
    carbohydrate: "Carbohydrate",
};

const PT_BR: Captions = Captions {
    profile: "PERFIL",
    weight: "Peso",
    height: "Altura",
    age: "Idade",
    years: "anos",
    gender: "Sexo",
    activity: "Atividade",
    bmr: "TMB",
    total_expenditure: "Gasto Total",
    diet_plan: "PLANO ALIMENTAR",
    diet: "Dieta",
    total_kcal: "Calorias Totais",
    meal_count: "Número de Refeições",
    kcal_per_meal: "Calorias por Refeição",
    total_macros: "MACRONUTRIENTES TOTAIS",
    per_meal: "POR REFEIÇÃO",
    protein: "Proteínas",
    fat: "Gorduras",
    carbohydrate: "Carboidratos",
};

fn captions(locale: Locale) -> &'static Captions {
    match locale {
        Locale::En => &EN,
        Locale::PtBr => &PT_BR,
    }
}

/// Render the four result sections as plain text.
///
/// BMR and total expenditure are shown as whole kcal (truncated).
pub fn render_text(report: &NutritionReport, locale: Locale) -> String {
    let c = captions(locale);
    let profile = &report.profile;
    let plan = &report.plan;
    let macros = &plan.total_macros;
    let per_meal = &plan.per_meal_macros;

    let profile_section = [
        format!("== {} ==", c.profile),
        format!("{}: {}kg", c.weight, profile.weight_kg),
        format!("{}: {}cm", c.height, profile.height_cm),
        format!("{}: {} {}", c.age, profile.age_years, c.years),
        format!("{}: {}", c.gender, profile.gender.label(locale)),
        format!("{}: {}", c.activity, profile.activity_level.label(locale)),
        format!("{}: {} kcal", c.bmr, profile.bmr_kcal.trunc() as i64),
        format!(
            "{}: {} kcal",
            c.total_expenditure,
            profile.total_expenditure_kcal.trunc() as i64
        ),
    ];

    let plan_section = [
        format!("== {} ==", c.diet_plan),
        format!("{}: {}", c.diet, profile.diet_phase.label(locale)),
        format!("{}: {} kcal", c.total_kcal, plan.total_kcal),
        format!("{}: {}", c.meal_count, plan.meal_count),
        format!("{}: {} kcal", c.kcal_per_meal, plan.kcal_per_meal),
    ];

    let macro_line = |caption: &str, amount: MacroAmount| {
        format!("{}: {}g ({} kcal)", caption, amount.grams, amount.kcal)
    };
    let macros_section = [
        format!("== {} ==", c.total_macros),
        macro_line(c.protein, macros.protein),
        macro_line(c.fat, macros.fat),
        macro_line(c.carbohydrate, macros.carbohydrate),
    ];

    let per_meal_section = [
        format!("== {} ==", c.per_meal),
        format!("{}: {}g", c.protein, per_meal.protein_g),
        format!("{}: {}g", c.fat, per_meal.fat_g),
        format!("{}: {}g", c.carbohydrate, per_meal.carbohydrate_g),
    ];

    let mut out = String::new();
    for section in [
        &profile_section[..],
        &plan_section[..],
        &macros_section[..],
        &per_meal_section[..],
    ] {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&section.join("\n"));
        out.push('\n');
    }
    out
}

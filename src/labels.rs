//! Display labels
//!
//! Static label tables for the enumerated values, in English and Brazilian
//! Portuguese. Labels are presentation-only; the core always works with the
//! canonical keys.

use serde::{Deserialize, Serialize};

use crate::types::{ActivityLevel, DietPhase, Gender};

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::PtBr];
}

/// A value that has a display label per locale
pub trait Labeled: Sized + Copy + 'static {
    /// All variants, in display order
    fn variants() -> &'static [Self];

    fn label(&self, locale: Locale) -> &'static str;

    /// Find the variant whose label matches `text` in any locale, ignoring
    /// case (accented letters included) and surrounding whitespace
    fn from_label(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        Self::variants().iter().copied().find(|v| {
            Locale::ALL
                .iter()
                .any(|&locale| v.label(locale).to_lowercase() == text)
        })
    }
}

impl Labeled for Gender {
    fn variants() -> &'static [Self] {
        &Gender::ALL
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Gender::Male) => "Male",
            (Locale::En, Gender::Female) => "Female",
            (Locale::PtBr, Gender::Male) => "Masculino",
            (Locale::PtBr, Gender::Female) => "Feminino",
        }
    }
}

impl Labeled for DietPhase {
    fn variants() -> &'static [Self] {
        &DietPhase::ALL
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, DietPhase::ExtremeCutting) => "Extreme Cutting",
            (Locale::En, DietPhase::Cutting) => "Cutting",
            (Locale::En, DietPhase::MiniCutting) => "Mini Cutting",
            (Locale::En, DietPhase::Maintenance) => "Maintenance",
            (Locale::En, DietPhase::MiniBulking) => "Mini Bulking",
            (Locale::En, DietPhase::Bulking) => "Bulking",
            (Locale::En, DietPhase::ExtremeBulking) => "Extreme Bulking",
            (Locale::PtBr, DietPhase::ExtremeCutting) => "Cutting Extremo",
            (Locale::PtBr, DietPhase::Cutting) => "Cutting",
            (Locale::PtBr, DietPhase::MiniCutting) => "Mini Cutting",
            (Locale::PtBr, DietPhase::Maintenance) => "Manutenção",
            (Locale::PtBr, DietPhase::MiniBulking) => "Mini Bulking",
            (Locale::PtBr, DietPhase::Bulking) => "Bulking",
            (Locale::PtBr, DietPhase::ExtremeBulking) => "Bulking Extremo",
        }
    }
}

impl Labeled for ActivityLevel {
    fn variants() -> &'static [Self] {
        &ActivityLevel::ALL
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, ActivityLevel::Sedentary) => "Sedentary",
            (Locale::En, ActivityLevel::Light) => "Light",
            (Locale::En, ActivityLevel::Moderate) => "Moderate",
            (Locale::En, ActivityLevel::Intense) => "Intense",
            (Locale::En, ActivityLevel::VeryIntense) => "Very Intense",
            (Locale::PtBr, ActivityLevel::Sedentary) => "Sedentário",
            (Locale::PtBr, ActivityLevel::Light) => "Leve",
            (Locale::PtBr, ActivityLevel::Moderate) => "Moderado",
            (Locale::PtBr, ActivityLevel::Intense) => "Intenso",
            (Locale::PtBr, ActivityLevel::VeryIntense) => "Muito Intenso",
        }
    }
}

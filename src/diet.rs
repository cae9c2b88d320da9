//! Diet phase table
//!
//! Macronutrient ratios (grams per kg of body weight) and daily calorie offsets
//! for each diet phase. The table is constant data; lookups by name are total
//! and resolve unknown names to the maintenance row.

use serde::Serialize;

use crate::types::DietPhase;

/// Macronutrient targets in grams per kg of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    pub fat_g_per_kg: f64,
    pub protein_g_per_kg: f64,
}

/// One row of the diet table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DietEntry {
    pub phase: DietPhase,
    #[serde(flatten)]
    pub ratios: MacroRatios,
    /// Calorie adjustment applied to TDEE (kcal/day)
    pub calorie_offset_kcal: i32,
}

const fn entry(phase: DietPhase, fat: f64, protein: f64, offset: i32) -> DietEntry {
    DietEntry {
        phase,
        ratios: MacroRatios {
            fat_g_per_kg: fat,
            protein_g_per_kg: protein,
        },
        calorie_offset_kcal: offset,
    }
}

/// Rows in [`DietPhase::ALL`] order
static DIETS: [DietEntry; 7] = [
    entry(DietPhase::ExtremeCutting, 0.6, 2.4, -500),
    entry(DietPhase::Cutting, 0.7, 2.2, -300),
    entry(DietPhase::MiniCutting, 0.8, 2.0, -100),
    entry(DietPhase::Maintenance, 1.0, 1.6, 0),
    entry(DietPhase::MiniBulking, 1.0, 1.8, 100),
    entry(DietPhase::Bulking, 1.0, 1.8, 300),
    entry(DietPhase::ExtremeBulking, 1.2, 2.0, 500),
];

/// Static lookup over the diet phase table
pub struct DietTable;

impl DietTable {
    /// Row for a known phase
    pub fn entry(phase: DietPhase) -> &'static DietEntry {
        match phase {
            DietPhase::ExtremeCutting => &DIETS[0],
            DietPhase::Cutting => &DIETS[1],
            DietPhase::MiniCutting => &DIETS[2],
            DietPhase::Maintenance => &DIETS[3],
            DietPhase::MiniBulking => &DIETS[4],
            DietPhase::Bulking => &DIETS[5],
            DietPhase::ExtremeBulking => &DIETS[6],
        }
    }

    /// Macro ratios for a phase name. Case-insensitive; unknown names get the
    /// maintenance ratios.
    pub fn lookup(phase: &str) -> MacroRatios {
        Self::entry(DietPhase::from_key(phase)).ratios
    }

    /// Calorie offset for a phase name, with the same fallback as [`lookup`].
    ///
    /// [`lookup`]: DietTable::lookup
    pub fn offset(phase: &str) -> i32 {
        Self::entry(DietPhase::from_key(phase)).calorie_offset_kcal
    }

    /// All rows, from the deepest deficit to the largest surplus
    pub fn entries() -> &'static [DietEntry] {
        &DIETS
    }
}

impl DietPhase {
    pub fn macro_ratios(&self) -> MacroRatios {
        DietTable::entry(*self).ratios
    }

    pub fn calorie_offset(&self) -> i32 {
        DietTable::entry(*self).calorie_offset_kcal
    }
}

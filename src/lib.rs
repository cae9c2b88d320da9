//! nutriplan - Compute engine for personalized nutrition targets
//!
//! nutriplan derives daily nutrition targets from basic biometrics through a
//! deterministic pipeline: energy profile (Mifflin-St Jeor BMR → TDEE → diet
//! target) → macro split → per-meal distribution → report encoding.
//!
//! ## Modules
//!
//! - **Core**: [`diet`], [`person`], [`meal`] - pure arithmetic, no I/O
//! - **Adapters**: [`form`], [`labels`], [`report`], [`pipeline`], [`ffi`]

pub mod diet;
pub mod error;
pub mod form;
pub mod labels;
pub mod meal;
pub mod person;
pub mod pipeline;
pub mod report;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use diet::{DietTable, MacroRatios};
pub use error::{ComputeError, InputError};
pub use form::RawForm;
pub use labels::{Labeled, Locale};
pub use meal::{MealPlanResult, MealPlanner};
pub use person::Person;
pub use pipeline::{compute_plan, form_to_json, plan_to_json};
pub use report::{render_text, NutritionReport, ReportEncoder};
pub use types::{ActivityLevel, DietPhase, Gender, PlanInput};

/// nutriplan version embedded in all reports
pub const NUTRIPLAN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "nutriplan";

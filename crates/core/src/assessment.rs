//! Assessment input and the body-mass index derived from it.

use healthassist_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// One submission of the symptom intake form, already parsed into numbers.
///
/// The rule engine trusts these values as given. Range checks belong to the intake boundary
/// (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomAssessmentInput {
    /// Age in whole years.
    pub age: u32,
    /// Height in centimetres.
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms.
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Free-text description of symptoms; never blank.
    pub symptoms: NonEmptyText,
}

impl SymptomAssessmentInput {
    pub fn new(age: u32, height_cm: f64, weight_kg: f64, symptoms: NonEmptyText) -> Self {
        Self {
            age,
            height_cm,
            weight_kg,
            symptoms,
        }
    }

    /// BMI for this input. Recomputed on every call, never stored.
    pub fn bmi(&self) -> f64 {
        compute_bmi(self.weight_kg, self.height_cm)
    }
}

/// Body-mass index: weight / (height in metres)^2.
///
/// A zero height yields an infinite BMI and a NaN input yields NaN; callers that care must
/// validate first.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI as displayed to the user, one decimal place.
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

//! Intake validation.
//!
//! The rule engine computes on whatever numbers it is handed. Everything a user types goes
//! through this module first, which applies the intake form's constraints: required fields,
//! numeric parsing and inclusive range bounds.

use crate::assessment::SymptomAssessmentInput;
use crate::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::{TriageError, TriageResult};
use healthassist_types::NonEmptyText;

/// Raw intake form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub symptoms: String,
}

impl IntakeForm {
    /// Parse and range-check every field.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidField` naming the first field that is missing, not a number,
    /// or outside its allowed range.
    pub fn parse(&self) -> TriageResult<SymptomAssessmentInput> {
        let age = required("age", &self.age)?
            .parse::<u32>()
            .map_err(|_| invalid("age", "must be a whole number of years"))?;
        let height_cm = parse_real("height", &self.height)?;
        let weight_kg = parse_real("weight", &self.weight)?;
        let symptoms = NonEmptyText::new(&self.symptoms)
            .map_err(|_| invalid("symptoms", "describe at least one symptom"))?;

        let input = SymptomAssessmentInput::new(age, height_cm, weight_kg, symptoms);
        validate_input(&input)?;
        Ok(input)
    }
}

/// Apply the intake bounds to already-typed input (e.g. a JSON request body).
pub fn validate_input(input: &SymptomAssessmentInput) -> TriageResult<()> {
    let (min_age, max_age) = AGE_RANGE;
    if !(min_age..=max_age).contains(&input.age) {
        return Err(invalid(
            "age",
            &format!("must be between {min_age} and {max_age}"),
        ));
    }

    check_real("height", input.height_cm, HEIGHT_RANGE_CM)?;
    check_real("weight", input.weight_kg, WEIGHT_RANGE_KG)?;
    Ok(())
}

/// Convert a JSON age number to whole years.
///
/// Fractions and non-finite values are rejected outright; negatives and overflows are reported as
/// out of range. The inclusive age bounds are still applied by [`validate_input`].
pub fn whole_years(value: f64) -> TriageResult<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(invalid("age", "must be a whole number of years"));
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        let (min_age, max_age) = AGE_RANGE;
        return Err(invalid(
            "age",
            &format!("must be between {min_age} and {max_age}"),
        ));
    }
    Ok(value as u32)
}

fn required<'a>(field: &'static str, value: &'a str) -> TriageResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "is required"));
    }
    Ok(value)
}

fn parse_real(field: &'static str, value: &str) -> TriageResult<f64> {
    required(field, value)?
        .parse::<f64>()
        .map_err(|_| invalid(field, "must be a number"))
}

fn check_real(field: &'static str, value: f64, (min, max): (f64, f64)) -> TriageResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(invalid(field, &format!("must be between {min} and {max}")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> TriageError {
    TriageError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

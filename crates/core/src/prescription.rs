//! The prescription record produced by the rule engine.

use serde::{Deserialize, Serialize};

/// Coarse triage label attached to a prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }

    /// Badge text for a results view, e.g. `MODERATE SEVERITY`.
    pub fn badge_label(self) -> String {
        format!("{} SEVERITY", self.as_str().to_uppercase())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "moderate" => Ok(Severity::Moderate),
            "high" => Ok(Severity::High),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Guidance derived from one symptom assessment.
///
/// Produced by [`crate::rules::generate_prescription`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub severity: Severity,
    pub condition: String,
    pub advice: Vec<String>,
    pub medications: Vec<String>,
    pub urgency: bool,
    pub lifestyle: Vec<String>,
}

pub(crate) fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_owned()).collect()
}

impl Default for Prescription {
    /// The record returned when no keyword rule matches.
    fn default() -> Self {
        Self {
            severity: Severity::Low,
            condition: "General Health Concern".into(),
            advice: owned(&[
                "Rest and monitor symptoms",
                "Stay hydrated",
                "Maintain a balanced diet",
            ]),
            medications: Vec::new(),
            urgency: false,
            lifestyle: owned(&[
                "Get adequate sleep (7-9 hours)",
                "Exercise regularly",
                "Manage stress levels",
            ]),
        }
    }
}

//! View models for the two screens: the assessment flow and the facility panel.
//!
//! All view state lives in these values. Each surface (an HTTP request, a CLI invocation) owns
//! its own instance, so no state is shared between users.

use crate::assessment::{format_bmi, SymptomAssessmentInput};
use crate::constants::{
    MEDICAL_DISCLAIMER, NO_FACILITIES_MESSAGE, SORTED_BY_DISTANCE_MESSAGE, URGENCY_NOTICE,
};
use crate::facility::Facility;
use crate::geo::round_to_tenth;
use crate::location::{acquire_location, LocationProvider};
use crate::prescription::Prescription;
use crate::ranking::rank_by_distance;
use crate::rules::generate_prescription;
use crate::sources::FacilitySource;
use healthassist_types::Coordinate;
use std::sync::Arc;

/// The outcome of one submitted assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResults {
    pub input: SymptomAssessmentInput,
    pub prescription: Prescription,
}

impl AssessmentResults {
    pub fn bmi(&self) -> f64 {
        self.input.bmi()
    }

    /// BMI to one decimal place, as shown on the results screen.
    pub fn bmi_display(&self) -> String {
        format_bmi(self.bmi())
    }

    pub fn disclaimer(&self) -> &'static str {
        MEDICAL_DISCLAIMER
    }

    pub fn severity_badge(&self) -> String {
        self.prescription.severity.badge_label()
    }

    pub fn urgency_notice(&self) -> Option<&'static str> {
        self.prescription.urgency.then_some(URGENCY_NOTICE)
    }

    /// The medications section is hidden when there is nothing to suggest.
    pub fn shows_medications(&self) -> bool {
        !self.prescription.medications.is_empty()
    }
}

/// Two-state assessment screen: the intake form (no results yet), or the results of the last
/// submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentFlow {
    results: Option<AssessmentResults>,
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the rule engine on `input` and move to the results state.
    ///
    /// Submitting from the results state replaces the previous results.
    pub fn submit(&mut self, input: SymptomAssessmentInput) -> &AssessmentResults {
        let prescription = generate_prescription(&input);
        tracing::info!(
            severity = %prescription.severity,
            condition = %prescription.condition,
            urgency = prescription.urgency,
            "assessment generated"
        );

        self.results.insert(AssessmentResults {
            input,
            prescription,
        })
    }

    /// "New Assessment": discard input and prescription and return to the intake form.
    pub fn reset(&mut self) {
        self.results = None;
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn is_intake(&self) -> bool {
        self.results.is_none()
    }
}

/// One row of the facility list.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityListing {
    pub facility: Facility,
    /// Distance from the user, rounded to one decimal place. Absent without a user coordinate.
    pub distance_km: Option<f64>,
    pub directions_url: String,
}

impl FacilityListing {
    /// e.g. `3.2 km away`.
    pub fn distance_badge(&self) -> Option<String> {
        self.distance_km.map(|km| format!("{km:.1} km away"))
    }
}

/// A loaded facility list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityView {
    pub origin: Option<Coordinate>,
    pub listings: Vec<FacilityListing>,
}

impl FacilityView {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn sorted_by_distance(&self) -> bool {
        self.origin.is_some()
    }

    /// The neutral status line above (or instead of) the list.
    pub fn status_message(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(NO_FACILITIES_MESSAGE)
        } else if self.sorted_by_distance() {
            Some(SORTED_BY_DISTANCE_MESSAGE)
        } else {
            None
        }
    }
}

/// Facility screen state: a binary loading/loaded flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FacilityPanel {
    #[default]
    Loading,
    Loaded(FacilityView),
}

/// Loads the facility list once per activation.
#[derive(Clone)]
pub struct FacilityFinder {
    source: Arc<dyn FacilitySource>,
}

impl FacilityFinder {
    pub fn new(source: Arc<dyn FacilitySource>) -> Self {
        Self { source }
    }

    /// Fetch once and rank around `origin` when one is given.
    ///
    /// A fetch error is logged and produces an empty view; it is never returned to the caller.
    pub async fn load(&self, origin: Option<Coordinate>) -> FacilityView {
        let facilities = match self.source.fetch_facilities().await {
            Ok(facilities) => facilities,
            Err(e) => {
                tracing::error!(source = %self.source.describe(), "Error fetching hospitals: {}", e);
                Vec::new()
            }
        };

        let listings = rank_by_distance(&facilities, origin)
            .into_iter()
            .map(|ranked| FacilityListing {
                directions_url: ranked.facility.directions_url(),
                distance_km: ranked.distance_km.map(round_to_tenth),
                facility: ranked.facility,
            })
            .collect();

        FacilityView { origin, listings }
    }

    /// Acquire the user's location once, then load.
    pub async fn activate(&self, location: &dyn LocationProvider) -> FacilityPanel {
        let origin = acquire_location(location).await;
        FacilityPanel::Loaded(self.load(origin).await)
    }
}

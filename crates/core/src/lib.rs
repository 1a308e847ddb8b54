//! # HealthAssist Core
//!
//! Core logic for the HealthAssist symptom triage service:
//! - the keyword rule engine that turns an assessment into a prescription
//! - BMI and haversine distance maths
//! - facility retrieval and distance ranking
//! - one-shot location acquisition
//! - view models for the assessment and facility screens
//!
//! **No API concerns**: HTTP servers and command-line parsing belong in `api-rest` and
//! `healthassist-cli`.

pub mod assessment;
pub mod config;
pub mod constants;
pub mod error;
pub mod facility;
pub mod geo;
pub mod location;
pub mod prescription;
pub mod ranking;
pub mod rules;
pub mod sources;
pub mod validation;
pub mod view;

pub use assessment::{compute_bmi, format_bmi, SymptomAssessmentInput};
pub use config::{FacilityStoreConfig, TriageConfig};
pub use constants::*;
pub use error::{TriageError, TriageResult};
pub use facility::{directions_url, Facility};
pub use geo::{haversine_km, round_to_tenth};
pub use location::{acquire_location, FixedLocation, LocationProvider, NoLocation, TypedLocation};
pub use prescription::{Prescription, Severity};
pub use ranking::{rank_by_distance, RankedFacility};
pub use rules::{generate_prescription, matching_rules};
pub use sources::{source_from_config, FacilitySource, FileFacilitySource, RemoteFacilitySource};
pub use validation::{validate_input, whole_years, IntakeForm};
pub use view::{
    AssessmentFlow, AssessmentResults, FacilityFinder, FacilityListing, FacilityPanel,
    FacilityView,
};

pub use healthassist_types::{Coordinate, CoordinateError, NonEmptyText};

//! Request and response bodies.

use healthassist_core::{
    whole_years, AssessmentResults, FacilityListing, FacilityView, NonEmptyText,
    SymptomAssessmentInput, TriageError,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Symptom intake as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentReq {
    /// Age in whole years (1-120). Taken as a JSON number so that fractions and negatives are
    /// reported against the `age` field.
    pub age: f64,
    /// Height in centimetres (50-250).
    pub height: f64,
    /// Weight in kilograms (10-300).
    pub weight: f64,
    /// Free-text symptoms; must not be blank.
    #[schema(value_type = String)]
    pub symptoms: NonEmptyText,
}

impl TryFrom<AssessmentReq> for SymptomAssessmentInput {
    type Error = TriageError;

    fn try_from(req: AssessmentReq) -> Result<Self, Self::Error> {
        let age = whole_years(req.age)?;
        Ok(SymptomAssessmentInput::new(
            age,
            req.height,
            req.weight,
            req.symptoms,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionRes {
    /// `low`, `moderate` or `high`.
    pub severity: String,
    pub severity_badge: String,
    pub condition: String,
    pub advice: Vec<String>,
    pub medications: Vec<String>,
    pub urgency: bool,
    pub lifestyle: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentRes {
    pub age: u32,
    pub weight: f64,
    pub bmi: f64,
    /// BMI to one decimal place.
    pub bmi_display: String,
    pub disclaimer: String,
    pub urgency_notice: Option<String>,
    pub prescription: PrescriptionRes,
}

impl From<&AssessmentResults> for AssessmentRes {
    fn from(results: &AssessmentResults) -> Self {
        let p = &results.prescription;
        Self {
            age: results.input.age,
            weight: results.input.weight_kg,
            bmi: results.bmi(),
            bmi_display: results.bmi_display(),
            disclaimer: results.disclaimer().to_string(),
            urgency_notice: results.urgency_notice().map(str::to_string),
            prescription: PrescriptionRes {
                severity: p.severity.to_string(),
                severity_badge: results.severity_badge(),
                condition: p.condition.clone(),
                advice: p.advice.clone(),
                medications: p.medications.clone(),
                urgency: p.urgency,
                lifestyle: p.lifestyle.clone(),
            },
        }
    }
}

/// Optional user location for `GET /hospitals`.
///
/// Either `lat` and `lon`, or `location` as `"lat, lon"` text. Values are kept as text so that a
/// blank or non-numeric entry is treated as an unusable location, not a malformed request; the
/// list then stays in rating order.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HospitalsQuery {
    /// Latitude in decimal degrees.
    pub lat: Option<String>,
    /// Longitude in decimal degrees.
    pub lon: Option<String>,
    /// `"latitude, longitude"`.
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HospitalRes {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub display_address: String,
    pub phone: String,
    pub tel_uri: String,
    pub latitude: f64,
    pub longitude: f64,
    pub specialty: Vec<String>,
    pub rating: f64,
    pub emergency_services: bool,
    /// Kilometres from the user, one decimal place; absent without a user location.
    pub distance_km: Option<f64>,
    pub distance_badge: Option<String>,
    pub directions_url: String,
}

impl From<&FacilityListing> for HospitalRes {
    fn from(listing: &FacilityListing) -> Self {
        let f = &listing.facility;
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            address: f.address.clone(),
            city: f.city.clone(),
            state: f.state.clone(),
            display_address: f.display_address(),
            phone: f.phone.clone(),
            tel_uri: f.tel_uri(),
            latitude: f.latitude,
            longitude: f.longitude,
            specialty: f.specialty.clone(),
            rating: f.rating,
            emergency_services: f.emergency_services,
            distance_km: listing.distance_km,
            distance_badge: listing.distance_badge(),
            directions_url: listing.directions_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HospitalsRes {
    pub sorted_by_distance: bool,
    /// The user location used for sorting, formatted `"lat, lon"` with four decimals.
    pub origin: Option<String>,
    /// `No hospitals found` when empty, the distance notice when sorted.
    pub message: Option<String>,
    pub hospitals: Vec<HospitalRes>,
}

impl From<&FacilityView> for HospitalsRes {
    fn from(view: &FacilityView) -> Self {
        Self {
            sorted_by_distance: view.sorted_by_distance(),
            origin: view.origin.map(|c| c.to_string()),
            message: view.status_message().map(str::to_string),
            hospitals: view.listings.iter().map(HospitalRes::from).collect(),
        }
    }
}

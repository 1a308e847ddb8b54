//! Constants used throughout the HealthAssist core crate.
//!
//! Thresholds, form bounds and fixed display strings live here so the engine, the view model and
//! the outer surfaces agree on them.

/// Mean Earth radius in kilometres used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// BMI strictly above this value triggers the weight-management lifestyle additions.
pub const BMI_OBESITY_THRESHOLD: f64 = 30.0;

/// Age strictly above this value triggers the older-adult additions.
pub const OLDER_ADULT_AGE: u32 = 65;

/// Age strictly below this value makes a fever urgent.
pub const YOUNG_CHILD_AGE: u32 = 5;

/// Inclusive bounds for the age field (years).
pub const AGE_RANGE: (u32, u32) = (1, 120);

/// Inclusive bounds for the height field (centimetres).
pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);

/// Inclusive bounds for the weight field (kilograms).
pub const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 300.0);

/// Default facility table queried on the hosted store.
pub const DEFAULT_FACILITY_TABLE: &str = "hospitals";

/// Default HTTP listen address for the REST service.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Driving-directions endpoint of the mapping service.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Shown when the facility list is empty, whatever the reason.
pub const NO_FACILITIES_MESSAGE: &str = "No hospitals found";

/// Shown when the facility list has been ordered by distance.
pub const SORTED_BY_DISTANCE_MESSAGE: &str =
    "Showing hospitals sorted by distance from your location";

/// Shown above every assessment.
pub const MEDICAL_DISCLAIMER: &str = "This assessment is for informational purposes only and is \
not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice \
of your physician or other qualified health provider.";

/// Shown when a prescription carries the urgency flag.
pub const URGENCY_NOTICE: &str = "Based on your symptoms, we recommend consulting a healthcare \
professional as soon as possible.";

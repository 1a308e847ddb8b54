//! Validated primitive types shared across the HealthAssist crates.
//!
//! These wrappers enforce their invariants at construction time, so code that receives one can
//! rely on it without re-checking.

/// Rejected text input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("must contain at least one non-whitespace character")]
    Blank,
}

/// Errors that can occur when creating or parsing a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude must be a finite number between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must be a finite number between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
    #[error("expected \"latitude, longitude\", got {0:?}")]
    Malformed(String),
}

/// Trimmed text with at least one visible character, such as a symptom description.
///
/// Deserializing goes through the same check, so a blank JSON string is a decode error that
/// names its field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub fn new(input: &str) -> Result<Self, TextError> {
        match input.trim() {
            "" => Err(TextError::Blank),
            trimmed => Ok(Self(trimmed.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<NonEmptyText> for String {
    fn from(text: NonEmptyText) -> Self {
        text.0
    }
}

/// A point on the Earth's surface in decimal degrees.
///
/// Fields are public because facility records from the external store are trusted as-is;
/// coordinates that come from a user go through [`Coordinate::new`] or [`Coordinate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses the `"latitude, longitude"` text a user sees (and may edit) in a location field.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let malformed = || CoordinateError::Malformed(input.to_owned());

        let (lat, lon) = input.split_once(',').ok_or_else(malformed)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| malformed())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| malformed())?;

        Self::new(latitude, longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

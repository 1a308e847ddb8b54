use healthassist_types::CoordinateError;

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("no facility store is configured")]
    FacilityStoreNotConfigured,
    #[error("failed to reach facility store: {0}")]
    FacilityRequest(reqwest::Error),
    #[error("facility store returned HTTP {status}: {body}")]
    FacilityStatus { status: u16, body: String },
    #[error("failed to decode facility records: {0}")]
    FacilityDecode(String),
    #[error("failed to read facility file: {0}")]
    FileRead(std::io::Error),
    #[error("unsupported facility file format: {0}")]
    UnsupportedFileFormat(String),

    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;

use super::{order_by_rating, FacilitySource};
use crate::facility::Facility;
use crate::{TriageError, TriageResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// Facility list kept in a local JSON or YAML file.
///
/// The file is re-read on every fetch so edits show up on the next view activation. Records are
/// returned by descending rating to match what the hosted store would return.
pub struct FileFacilitySource {
    path: PathBuf,
}

impl FileFacilitySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn parse(&self, contents: &str) -> TriageResult<Vec<Facility>> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => {
                let de = &mut serde_json::Deserializer::from_str(contents);
                serde_path_to_error::deserialize(de)
                    .map_err(|e| TriageError::FacilityDecode(e.to_string()))
            }
            "yaml" | "yml" => {
                let de = serde_yaml::Deserializer::from_str(contents);
                serde_path_to_error::deserialize(de)
                    .map_err(|e| TriageError::FacilityDecode(e.to_string()))
            }
            other => Err(TriageError::UnsupportedFileFormat(other.to_string())),
        }
    }
}

#[async_trait]
impl FacilitySource for FileFacilitySource {
    async fn fetch_facilities(&self) -> TriageResult<Vec<Facility>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(TriageError::FileRead)?;

        let mut facilities = self.parse(&contents)?;
        order_by_rating(&mut facilities);
        Ok(facilities)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

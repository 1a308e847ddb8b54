//! Facility retrieval.
//!
//! A [`FacilitySource`] is the opaque boundary to wherever facility records live. Every source
//! returns records ordered by descending rating, or an error. Sources never retry; callers get a
//! single best-effort answer per request.

mod file;
mod remote;

pub use file::FileFacilitySource;
pub use remote::RemoteFacilitySource;

use crate::config::FacilityStoreConfig;
use crate::facility::Facility;
use crate::{TriageError, TriageResult};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait FacilitySource: Send + Sync {
    /// Fetch all facilities, highest rated first.
    async fn fetch_facilities(&self) -> TriageResult<Vec<Facility>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Used when no store has been configured. Every fetch fails, which the facility view turns into
/// an empty list.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredSource;

#[async_trait]
impl FacilitySource for UnconfiguredSource {
    async fn fetch_facilities(&self) -> TriageResult<Vec<Facility>> {
        Err(TriageError::FacilityStoreNotConfigured)
    }

    fn describe(&self) -> String {
        "unconfigured".into()
    }
}

/// Build the source described by the startup configuration.
pub fn source_from_config(cfg: &FacilityStoreConfig) -> TriageResult<Arc<dyn FacilitySource>> {
    let source: Arc<dyn FacilitySource> = match cfg {
        FacilityStoreConfig::Remote {
            base_url,
            api_key,
            table,
        } => Arc::new(RemoteFacilitySource::new(base_url, api_key, table)?),
        FacilityStoreConfig::File(path) => Arc::new(FileFacilitySource::new(path.clone())),
        FacilityStoreConfig::Unconfigured => Arc::new(UnconfiguredSource),
    };

    tracing::info!(source = %source.describe(), "facility source ready");
    Ok(source)
}

/// Sort by descending rating, keeping the original order among equal ratings.
pub(crate) fn order_by_rating(facilities: &mut [Facility]) {
    facilities.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

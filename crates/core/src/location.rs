//! One-shot acquisition of the user's coordinate.
//!
//! A failed acquisition is an accepted degraded mode: it is logged and the facility view keeps
//! its rating order.

use crate::{TriageError, TriageResult};
use async_trait::async_trait;
use healthassist_types::Coordinate;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request the current coordinate once.
    async fn current_position(&self) -> TriageResult<Coordinate>;
}

/// A coordinate already known to the caller (e.g. sent by a device).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> TriageResult<Coordinate> {
        Ok(self.0)
    }
}

/// A `"latitude, longitude"` string typed into a location field.
#[derive(Debug, Clone)]
pub struct TypedLocation(pub String);

#[async_trait]
impl LocationProvider for TypedLocation {
    async fn current_position(&self) -> TriageResult<Coordinate> {
        Ok(Coordinate::parse(&self.0)?)
    }
}

/// The platform offers no location (or the user declined).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn current_position(&self) -> TriageResult<Coordinate> {
        Err(TriageError::LocationUnavailable(
            "no location provider available".into(),
        ))
    }
}

/// Ask `provider` for the coordinate once, logging and swallowing any failure.
pub async fn acquire_location(provider: &dyn LocationProvider) -> Option<Coordinate> {
    match provider.current_position().await {
        Ok(coordinate) => {
            tracing::debug!(%coordinate, "location acquired");
            Some(coordinate)
        }
        Err(e) => {
            tracing::warn!("Error getting location: {}", e);
            None
        }
    }
}

use crate::HealthRes;

/// Simple health service shared by the HTTP API and the CLI.
///
/// Reports whether the service is up. The facility store is not queried; a store outage does not
/// make the service unhealthy.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "HealthAssist is alive".into(),
        }
    }
}

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Request
//! handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_FACILITY_TABLE, DEFAULT_REST_ADDR};
use crate::{TriageError, TriageResult};
use std::path::PathBuf;

/// Where facility records come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacilityStoreConfig {
    /// Hosted PostgREST-compatible store.
    Remote {
        base_url: String,
        api_key: String,
        table: String,
    },
    /// Local JSON or YAML file.
    File(PathBuf),
    /// Nothing configured; the facility view is always empty.
    Unconfigured,
}

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct TriageConfig {
    rest_addr: String,
    facility_store: FacilityStoreConfig,
}

impl TriageConfig {
    pub fn new(rest_addr: String, facility_store: FacilityStoreConfig) -> TriageResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(TriageError::InvalidConfig(
                "REST listen address cannot be empty".into(),
            ));
        }

        Ok(Self {
            rest_addr,
            facility_store,
        })
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn facility_store(&self) -> &FacilityStoreConfig {
        &self.facility_store
    }
}

/// Read the process environment into a [`TriageConfig`].
///
/// Meant to be called once from a binary's `main`, after `.env` has been loaded.
pub fn load_from_env() -> TriageResult<TriageConfig> {
    let var = |name: &str| std::env::var(name).ok();

    let facility_store = facility_store_from_env_values(
        var("FACILITY_STORE_URL"),
        var("FACILITY_STORE_KEY"),
        var("FACILITY_TABLE"),
        var("FACILITY_DATA_FILE"),
    )?;

    TriageConfig::new(
        rest_addr_from_env_value(var("HEALTHASSIST_REST_ADDR")),
        facility_store,
    )
}

/// Listen address from an optional value, falling back to the default when unset or blank.
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}

/// Resolve the facility store from optional environment values.
///
/// A URL selects the hosted store and requires a key. Otherwise a data file selects the file
/// source. Setting both is rejected so the active source is never ambiguous.
pub fn facility_store_from_env_values(
    url: Option<String>,
    key: Option<String>,
    table: Option<String>,
    data_file: Option<String>,
) -> TriageResult<FacilityStoreConfig> {
    let url = non_blank(url);
    let data_file = non_blank(data_file);

    match (url, data_file) {
        (Some(_), Some(_)) => Err(TriageError::InvalidConfig(
            "set either FACILITY_STORE_URL or FACILITY_DATA_FILE, not both".into(),
        )),
        (Some(url), None) => {
            let parsed = reqwest::Url::parse(&url).map_err(|e| {
                TriageError::InvalidConfig(format!("FACILITY_STORE_URL is not a valid URL: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(TriageError::InvalidConfig(
                    "FACILITY_STORE_URL must use http or https".into(),
                ));
            }

            let api_key = non_blank(key).ok_or_else(|| {
                TriageError::InvalidConfig(
                    "FACILITY_STORE_KEY is required when FACILITY_STORE_URL is set".into(),
                )
            })?;

            let table = match table {
                None => DEFAULT_FACILITY_TABLE.to_string(),
                Some(t) if t.trim().is_empty() => {
                    return Err(TriageError::InvalidConfig(
                        "FACILITY_TABLE cannot be empty".into(),
                    ))
                }
                Some(t) => t.trim().to_string(),
            };

            Ok(FacilityStoreConfig::Remote {
                base_url: url,
                api_key,
                table,
            })
        }
        (None, Some(path)) => Ok(FacilityStoreConfig::File(PathBuf::from(path))),
        (None, None) => Ok(FacilityStoreConfig::Unconfigured),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

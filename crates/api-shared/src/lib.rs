//! # API Shared
//!
//! Wire types and shared services for the HealthAssist surfaces.
//!
//! Contains:
//! - request/response DTOs (`serde` + OpenAPI schemas)
//! - conversions from core view models into those DTOs
//! - `HealthService`
//!
//! Used by `api-rest` for HTTP bodies and by the CLI for `--json` output.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;

//! Shared HTTP plumbing for the example services.
//!
//! Each service in this workspace is an independent binary; what they share
//! is the boring part: a transport-agnostic error payload, a request-scoped
//! trace identifier, health probes, and tracing bootstrap. Keeping these in
//! one crate stops the three services drifting apart on observability.

pub mod error;
pub mod health;
pub mod telemetry;
pub mod trace;

pub use error::{ApiResult, Error, ErrorCode};
pub use health::HealthState;
pub use trace::{Trace, TraceId};

//! HTTP plumbing shared by Medicos binaries: health probes, request ids,
//! tracing setup and chrono wire formats.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;

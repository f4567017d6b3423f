//! Per-service normalizers: typed raw payloads and their conversion
//! into the canonical shapes the reconciliation engine consumes.
//!
//! Everything here is pure structural conversion — the upstream fetch
//! layer (auth tokens, cookies, retries) hands over already-parsed
//! response bodies and is out of scope.

pub mod doordash;
pub mod error;
pub mod grubhub;
mod parse_helpers;
pub mod postmates;

pub use error::NormalizeError;

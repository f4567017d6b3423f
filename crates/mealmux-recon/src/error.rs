use thiserror::Error;

/// Input-validation failures of the reconciliation engine.
///
/// Given valid input the engine never partially fails: an empty hit
/// list yields an empty unified list, not an error. Per-service fetch
/// failures are filtered out by the caller before the engine runs.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("menu merge requires at least the primary service's store data")]
    MissingPrimaryMenu,

    #[error("requested page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("store {store_id} has no catalog sections")]
    MissingCatalog { store_id: String },
}

pub mod config;
pub mod types;

pub use config::{ConfigError, ReconConfig};
pub use types::{
    GeoPoint, MenuPage, NormalizedMenuCategory, NormalizedMenuItem, NormalizedStoreHit,
    ServiceHits, ServiceId, ServiceMenu, UnifiedCategory, UnifiedMenu, UnifiedMenuItem,
    UnifiedStore,
};

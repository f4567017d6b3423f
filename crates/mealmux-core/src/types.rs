//! Canonical data model shared by the normalizers and the
//! reconciliation engine.
//!
//! Everything here is request-scoped: records are built fresh for one
//! search or store-detail cycle and dropped once the unified response
//! is produced. Service-specific identifier maps use `BTreeMap` so
//! serialized output is deterministically ordered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One upstream delivery platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    Postmates,
    Grubhub,
    Doordash,
}

impl ServiceId {
    /// All known services, in the canonical fan-out order. The order
    /// matters: it decides which service's hit is "first seen" when
    /// duplicates disagree, and which service is primary for menu
    /// merges.
    pub const ALL: [ServiceId; 3] = [ServiceId::Postmates, ServiceId::Grubhub, ServiceId::Doordash];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Postmates => "postmates",
            ServiceId::Grubhub => "grubhub",
            ServiceId::Doordash => "doordash",
        }
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One normalized search result for one restaurant from one service.
///
/// Immutable once created; the resolver only reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedStoreHit {
    pub service: ServiceId,
    /// The service's own identifier for the store.
    pub external_id: String,
    pub title: String,
    pub location: GeoPoint,
    /// Delivery fee in decimal currency units (dollars).
    pub delivery_fee: Option<f64>,
    pub eta_minutes: Option<u32>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

/// One search page from one service. The outer list order across
/// services fixes first-seen semantics for the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHits {
    pub service: ServiceId,
    pub hits: Vec<NormalizedStoreHit>,
}

/// The merged, service-agnostic view of one physical restaurant.
///
/// Invariant: `ids` holds at most one identifier per service, and one
/// entry for every service that contributed a member to the merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedStore {
    pub title: String,
    pub location: GeoPoint,
    pub delivery_fee: Option<f64>,
    pub eta_minutes: Option<u32>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub ids: BTreeMap<ServiceId, String>,
}

/// One normalized menu item from one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMenuItem {
    pub external_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Decimal currency units (dollars), already service-normalized —
    /// providers that report minor units are converted upstream.
    pub price: f64,
    pub image: Option<String>,
    pub subsection_id: Option<String>,
}

/// One normalized menu category from one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMenuCategory {
    pub external_category_id: String,
    pub name: String,
    pub items: Vec<NormalizedMenuItem>,
}

/// One store-detail fetch from one service. The first `ServiceMenu`
/// in a merge input is the primary service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMenu {
    pub service: ServiceId,
    pub store_id: String,
    pub categories: Vec<NormalizedMenuCategory>,
}

/// A menu item as known across services: one entry per distinct item
/// name within its category, with per-service price and id maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub subsection_id: Option<String>,
    pub prices: BTreeMap<ServiceId, f64>,
    pub ids: BTreeMap<ServiceId, String>,
}

/// A menu category as known across services, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedCategory {
    pub name: String,
    pub category_ids: BTreeMap<ServiceId, String>,
    pub items: Vec<UnifiedMenuItem>,
}

/// The full merged menu for one restaurant, insertion-ordered:
/// primary-service categories first, then categories only other
/// services know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedMenu {
    pub store_ids: BTreeMap<ServiceId, String>,
    pub categories: Vec<UnifiedCategory>,
}

/// One page of a merged menu. Pages are 1-based and each page carries
/// exactly one category with its full item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPage {
    pub store_ids: BTreeMap<ServiceId, String>,
    pub category: UnifiedCategory,
    pub page: usize,
    pub total_pages: usize,
}

//! Postmates payload types and normalization.
//!
//! ## Observed shapes
//!
//! ### Search feed
//! Search responses wrap a `feedItems` list; only items carrying a
//! `store` object are restaurant results (ads and banners have none).
//! Fee and ETA are not structured fields — they ride in `meta` badges
//! as display text, keyed by `badgeType`:
//! - `FARE` → `"$3.99 Delivery Fee"`
//! - `ETD` → `"15–25 min"` (en dash, no spaces around it)
//!
//! Rating is an optional text block (`{"text": "4.7"}`), absent for
//! unrated stores.
//!
//! ### Store detail
//! The menu lives in `catalogSectionsMap`, keyed by section UUID; the
//! entry for `sections[0].uuid` is the storefront menu. Item prices
//! are minor units (cents) and are converted to decimal here.

use serde::Deserialize;

use mealmux_core::{
    GeoPoint, NormalizedMenuCategory, NormalizedMenuItem, NormalizedStoreHit, ServiceId,
    ServiceMenu,
};

use crate::error::NormalizeError;
use crate::parse_helpers::{cents_to_decimal, parse_leading_dollar_amount, parse_leading_u32};

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct PostmatesFeed {
    pub data: PostmatesFeedData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmatesFeedData {
    pub feed_items: Vec<PostmatesFeedItem>,
}

/// One feed entry; non-store entries (banners, ads) have no `store`.
#[derive(Debug, Deserialize)]
pub struct PostmatesFeedItem {
    #[serde(default)]
    pub store: Option<PostmatesFeedStore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmatesFeedStore {
    pub store_uuid: String,
    pub title: TextBlock,
    pub map_marker: MapMarker,
    #[serde(default)]
    pub meta: Vec<MetaBadge>,
    #[serde(default)]
    pub rating: Option<TextBlock>,
    pub image: ImageSet,
}

#[derive(Debug, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
}

/// Display badge; `badge_type` selects how `text` is interpreted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaBadge {
    pub badge_type: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub items: Vec<ImageItem>,
}

#[derive(Debug, Deserialize)]
pub struct ImageItem {
    pub url: String,
}

/// Normalizes a Postmates search feed into canonical store hits.
/// Feed entries without a store object are skipped.
#[must_use]
pub fn normalize_search(feed: PostmatesFeed) -> Vec<NormalizedStoreHit> {
    feed.data
        .feed_items
        .into_iter()
        .filter_map(|item| item.store)
        .map(|store| {
            let mut delivery_fee = None;
            let mut eta_minutes = None;
            for badge in &store.meta {
                match badge.badge_type.as_str() {
                    "FARE" => delivery_fee = parse_leading_dollar_amount(&badge.text),
                    "ETD" => eta_minutes = parse_leading_u32(&badge.text),
                    _ => {}
                }
            }

            NormalizedStoreHit {
                service: ServiceId::Postmates,
                external_id: store.store_uuid,
                title: store.title.text,
                location: GeoPoint {
                    latitude: store.map_marker.latitude,
                    longitude: store.map_marker.longitude,
                },
                delivery_fee,
                eta_minutes,
                rating: store.rating.and_then(|r| r.text.parse::<f64>().ok()),
                image: store.image.items.into_iter().next().map(|i| i.url),
            }
        })
        .collect()
}

/// Top-level store-detail response.
#[derive(Debug, Deserialize)]
pub struct PostmatesStore {
    pub data: PostmatesStoreData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmatesStoreData {
    pub uuid: String,
    #[serde(default)]
    pub sections: Vec<StoreSection>,
    #[serde(default)]
    pub catalog_sections_map: std::collections::HashMap<String, Vec<CatalogSection>>,
}

#[derive(Debug, Deserialize)]
pub struct StoreSection {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSection {
    #[serde(rename = "catalogSectionUUID")]
    pub catalog_section_uuid: String,
    pub payload: CatalogPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    pub standard_items_payload: StandardItemsPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardItemsPayload {
    pub title: TextBlock,
    #[serde(default)]
    pub catalog_items: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub item_description: Option<String>,
    /// Minor currency units (cents).
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub subsection_uuid: Option<String>,
}

/// Normalizes a Postmates store detail into a canonical service menu.
///
/// # Errors
///
/// [`NormalizeError::MissingCatalog`] when the store has no sections
/// or the section list is missing from `catalogSectionsMap`.
pub fn normalize_store(store: PostmatesStore) -> Result<ServiceMenu, NormalizeError> {
    let store_id = store.data.uuid;
    let mut sections_map = store.data.catalog_sections_map;

    let catalog = store
        .data
        .sections
        .first()
        .and_then(|section| sections_map.remove(&section.uuid))
        .ok_or_else(|| NormalizeError::MissingCatalog {
            store_id: store_id.clone(),
        })?;

    let categories = catalog
        .into_iter()
        .map(|section| NormalizedMenuCategory {
            external_category_id: section.catalog_section_uuid,
            name: section.payload.standard_items_payload.title.text,
            items: section
                .payload
                .standard_items_payload
                .catalog_items
                .into_iter()
                .map(|item| NormalizedMenuItem {
                    external_id: item.uuid,
                    name: item.title,
                    description: item.item_description,
                    price: cents_to_decimal(item.price),
                    image: item.image_url,
                    subsection_id: item.subsection_uuid,
                })
                .collect(),
        })
        .collect();

    Ok(ServiceMenu {
        service: ServiceId::Postmates,
        store_id,
        categories,
    })
}

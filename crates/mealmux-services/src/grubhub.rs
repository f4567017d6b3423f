//! Grubhub payload types and normalization.
//!
//! ## Observed shapes
//!
//! - Search coordinates arrive as **decimal strings**
//!   (`"latitude": "34.0522"`); records with unparseable coordinates
//!   are skipped with a warning rather than failing the page.
//! - `delivery_fee.price` on search results is already decimal
//!   dollars, while menu item `price.amount` is minor units (cents).
//! - `delivery_time_estimate` is whole minutes.
//! - Menu item images are split into `base_url` + `public_id` and
//!   joined here.

use serde::Deserialize;

use mealmux_core::{
    GeoPoint, NormalizedMenuCategory, NormalizedMenuItem, NormalizedStoreHit, ServiceId,
    ServiceMenu,
};

use crate::parse_helpers::cents_to_decimal;

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct GrubhubSearch {
    pub search_result: GrubhubSearchResult,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubSearchResult {
    pub results: Vec<GrubhubSearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubSearchHit {
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub delivery_fee: Option<GrubhubFee>,
    pub address: GrubhubAddress,
    #[serde(default)]
    pub delivery_time_estimate: Option<u32>,
    #[serde(default)]
    pub ratings: Option<GrubhubRatings>,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubFee {
    /// Decimal dollars on search results.
    pub price: f64,
}

/// Coordinates as decimal strings, verbatim from the payload.
#[derive(Debug, Deserialize)]
pub struct GrubhubAddress {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubRatings {
    #[serde(default)]
    pub actual_rating_value: Option<f64>,
}

/// Normalizes a Grubhub search response into canonical store hits.
#[must_use]
pub fn normalize_search(search: GrubhubSearch) -> Vec<NormalizedStoreHit> {
    search
        .search_result
        .results
        .into_iter()
        .filter_map(|hit| {
            let (Ok(latitude), Ok(longitude)) = (
                hit.address.latitude.parse::<f64>(),
                hit.address.longitude.parse::<f64>(),
            ) else {
                tracing::warn!(
                    restaurant_id = %hit.restaurant_id,
                    "skipping hit with unparseable coordinates"
                );
                return None;
            };

            Some(NormalizedStoreHit {
                service: ServiceId::Grubhub,
                external_id: hit.restaurant_id,
                title: hit.name,
                location: GeoPoint {
                    latitude,
                    longitude,
                },
                delivery_fee: hit.delivery_fee.map(|fee| fee.price),
                eta_minutes: hit.delivery_time_estimate,
                rating: hit.ratings.and_then(|r| r.actual_rating_value),
                image: hit.logo,
            })
        })
        .collect()
}

/// Top-level store-detail response.
#[derive(Debug, Deserialize)]
pub struct GrubhubStore {
    pub restaurant: GrubhubRestaurant,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubRestaurant {
    pub id: String,
    #[serde(default)]
    pub menu_category_list: Vec<GrubhubMenuCategory>,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubMenuCategory {
    pub menu_category_id: String,
    pub name: String,
    #[serde(default)]
    pub menu_item_list: Vec<GrubhubMenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubMenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: GrubhubAmount,
    #[serde(default)]
    pub media_image: Option<GrubhubMediaImage>,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubAmount {
    /// Minor currency units (cents).
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct GrubhubMediaImage {
    pub base_url: String,
    pub public_id: String,
}

/// Normalizes a Grubhub store detail into a canonical service menu.
#[must_use]
pub fn normalize_store(store: GrubhubStore) -> ServiceMenu {
    let categories = store
        .restaurant
        .menu_category_list
        .into_iter()
        .map(|category| NormalizedMenuCategory {
            external_category_id: category.menu_category_id,
            name: category.name,
            items: category
                .menu_item_list
                .into_iter()
                .map(|item| NormalizedMenuItem {
                    external_id: item.id,
                    name: item.name,
                    description: item.description,
                    price: cents_to_decimal(item.price.amount),
                    image: item
                        .media_image
                        .map(|img| format!("{}{}", img.base_url, img.public_id)),
                    subsection_id: None,
                })
                .collect(),
        })
        .collect();

    ServiceMenu {
        service: ServiceId::Grubhub,
        store_id: store.restaurant.id,
        categories,
    }
}

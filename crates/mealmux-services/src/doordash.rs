//! DoorDash payload types and normalization.
//!
//! ## Observed shapes (mobile feed API)
//!
//! - Search results nest under `body[0].body`; the stable fields ride
//!   in each entry's `logging` object (numeric store id, raw
//!   coordinates). Fee and ETA exist only as display strings:
//!   `"$0.00 delivery fee"`, `"24 min"`.
//! - Store detail menus are schema.org-flavored:
//!   `menu.hasMenuSection[0]` is the section list and items carry
//!   only a `name` and an `offers.price` decimal string — no item or
//!   category ids. The names double as external ids, the only stable
//!   handle the payload offers.
//! - The detail payload does not echo the store id; callers pass the
//!   id they fetched by.

use serde::Deserialize;

use mealmux_core::{
    GeoPoint, NormalizedMenuCategory, NormalizedMenuItem, NormalizedStoreHit, ServiceId,
    ServiceMenu,
};

use crate::parse_helpers::{parse_leading_dollar_amount, parse_leading_u32};

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct DoordashFeed {
    pub body: Vec<DoordashFeedSection>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashFeedSection {
    pub body: Vec<DoordashFeedItem>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashFeedItem {
    pub logging: DoordashLogging,
    pub text: DoordashText,
    pub images: DoordashImages,
    #[serde(default)]
    pub custom: Option<DoordashCustom>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashLogging {
    pub store_id: i64,
    pub store_latitude: f64,
    pub store_longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct DoordashText {
    pub title: String,
    #[serde(default)]
    pub custom: Option<DoordashTextCustom>,
}

/// Display strings; parsed with the shared scanners.
#[derive(Debug, Deserialize)]
pub struct DoordashTextCustom {
    #[serde(default)]
    pub modality_display_string: Option<String>,
    #[serde(default)]
    pub eta_display_string: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashImages {
    pub main: DoordashImage,
}

#[derive(Debug, Deserialize)]
pub struct DoordashImage {
    pub uri: String,
}

#[derive(Debug, Deserialize)]
pub struct DoordashCustom {
    #[serde(default)]
    pub rating: Option<DoordashRating>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashRating {
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Normalizes a DoorDash mobile search feed into canonical store
/// hits. An empty `body` yields no hits.
#[must_use]
pub fn normalize_search(feed: DoordashFeed) -> Vec<NormalizedStoreHit> {
    feed.body
        .into_iter()
        .next()
        .map_or_else(Vec::new, |section| section.body)
        .into_iter()
        .map(|item| {
            let display = item.text.custom;
            let delivery_fee = display
                .as_ref()
                .and_then(|d| d.modality_display_string.as_deref())
                .and_then(parse_leading_dollar_amount);
            let eta_minutes = display
                .as_ref()
                .and_then(|d| d.eta_display_string.as_deref())
                .and_then(parse_leading_u32);

            NormalizedStoreHit {
                service: ServiceId::Doordash,
                external_id: item.logging.store_id.to_string(),
                title: item.text.title,
                location: GeoPoint {
                    latitude: item.logging.store_latitude,
                    longitude: item.logging.store_longitude,
                },
                delivery_fee,
                eta_minutes,
                rating: item.custom.and_then(|c| c.rating).and_then(|r| r.average_rating),
                image: Some(item.images.main.uri),
            }
        })
        .collect()
}

/// Top-level store-detail response.
#[derive(Debug, Deserialize)]
pub struct DoordashStore {
    pub menu: DoordashMenu,
}

#[derive(Debug, Deserialize)]
pub struct DoordashMenu {
    #[serde(rename = "hasMenuSection")]
    pub has_menu_section: Vec<Vec<DoordashMenuSection>>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashMenuSection {
    pub name: String,
    #[serde(rename = "hasMenuItem", default)]
    pub has_menu_item: Vec<DoordashMenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct DoordashMenuItem {
    pub name: String,
    pub offers: DoordashOffer,
}

#[derive(Debug, Deserialize)]
pub struct DoordashOffer {
    /// Decimal string, e.g. `"8.99"`.
    pub price: String,
}

/// Normalizes a DoorDash store detail into a canonical service menu.
///
/// `store_id` is the id the detail was fetched by — the payload does
/// not echo it. Items with unparseable prices are skipped with a
/// warning.
#[must_use]
pub fn normalize_store(store_id: &str, store: DoordashStore) -> ServiceMenu {
    let sections = store
        .menu
        .has_menu_section
        .into_iter()
        .next()
        .unwrap_or_default();

    let categories = sections
        .into_iter()
        .map(|section| {
            let category_name = section.name;
            let items = section
                .has_menu_item
                .into_iter()
                .filter_map(|item| match item.offers.price.parse::<f64>() {
                    Ok(price) => Some(NormalizedMenuItem {
                        external_id: item.name.clone(),
                        name: item.name,
                        description: None,
                        price,
                        image: None,
                        subsection_id: None,
                    }),
                    Err(_) => {
                        tracing::warn!(
                            item = %item.name,
                            price = %item.offers.price,
                            "skipping item with unparseable price"
                        );
                        None
                    }
                })
                .collect();
            NormalizedMenuCategory {
                external_category_id: category_name.clone(),
                name: category_name,
                items,
            }
        })
        .collect();

    ServiceMenu {
        service: ServiceId::Doordash,
        store_id: store_id.to_owned(),
        categories,
    }
}

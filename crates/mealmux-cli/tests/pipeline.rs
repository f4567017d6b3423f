//! Full pipeline over raw provider payloads: deserialize → normalize
//! → resolve → rank, and deserialize → normalize → merge → paginate.

use mealmux_core::{GeoPoint, ReconConfig, ServiceHits, ServiceId};
use mealmux_recon::{merge_menus, rank, resolve};
use mealmux_services::{doordash, grubhub, postmates};

const POSTMATES_FEED: &str = r#"{
    "data": {
        "feedItems": [
            {
                "store": {
                    "storeUuid": "pm-joes",
                    "title": { "text": "Joe's Pizza" },
                    "mapMarker": { "latitude": 34.0522, "longitude": -118.2437 },
                    "meta": [
                        { "badgeType": "FARE", "text": "$3.99 Delivery Fee" },
                        { "badgeType": "ETD", "text": "15–25 min" }
                    ],
                    "rating": { "text": "4.7" },
                    "image": { "items": [ { "url": "https://img.example/joes.jpg" } ] }
                }
            }
        ]
    }
}"#;

const GRUBHUB_SEARCH: &str = r#"{
    "search_result": {
        "results": [
            {
                "restaurant_id": "gh-4321",
                "name": "Joes Pizza",
                "logo": "https://img.example/joes-logo.jpg",
                "delivery_fee": { "price": 2.49 },
                "address": { "latitude": "34.0524", "longitude": "-118.2435" },
                "delivery_time_estimate": 30,
                "ratings": { "actual_rating_value": 4.5 }
            },
            {
                "restaurant_id": "gh-8888",
                "name": "Golden Dragon",
                "address": { "latitude": "34.0600", "longitude": "-118.2500" }
            }
        ]
    }
}"#;

const DOORDASH_FEED: &str = r#"{
    "body": [
        {
            "body": [
                {
                    "logging": {
                        "store_id": 777,
                        "store_latitude": 34.0523,
                        "store_longitude": -118.2436
                    },
                    "text": {
                        "title": "Joe's Pizza",
                        "custom": {
                            "modality_display_string": "$0.00 delivery fee",
                            "eta_display_string": "24 min"
                        }
                    },
                    "images": { "main": { "uri": "https://img.example/dd-joes.jpg" } },
                    "custom": { "rating": { "average_rating": 4.6 } }
                }
            ]
        }
    ]
}"#;

#[test]
fn search_pipeline_unifies_the_same_restaurant_across_all_services() {
    let hits_by_service = vec![
        ServiceHits {
            service: ServiceId::Postmates,
            hits: postmates::normalize_search(serde_json::from_str(POSTMATES_FEED).unwrap()),
        },
        ServiceHits {
            service: ServiceId::Grubhub,
            hits: grubhub::normalize_search(serde_json::from_str(GRUBHUB_SEARCH).unwrap()),
        },
        ServiceHits {
            service: ServiceId::Doordash,
            hits: doordash::normalize_search(serde_json::from_str(DOORDASH_FEED).unwrap()),
        },
    ];

    let origin = GeoPoint {
        latitude: 34.0522,
        longitude: -118.2437,
    };
    let stores = rank(resolve(&hits_by_service, &ReconConfig::default()), origin);

    assert_eq!(stores.len(), 2);

    // Joe's is listed everywhere and sits on the origin, so it ranks
    // first; its record carries all three service ids and the
    // first-seen (Postmates) descriptive fields.
    let joes = &stores[0];
    assert_eq!(joes.title, "Joe's Pizza");
    assert_eq!(joes.ids.len(), 3);
    assert_eq!(joes.ids.get(&ServiceId::Postmates).unwrap(), "pm-joes");
    assert_eq!(joes.ids.get(&ServiceId::Grubhub).unwrap(), "gh-4321");
    assert_eq!(joes.ids.get(&ServiceId::Doordash).unwrap(), "777");
    assert_eq!(joes.delivery_fee, Some(3.99));
    assert_eq!(joes.rating, Some(4.7));

    let dragon = &stores[1];
    assert_eq!(dragon.title, "Golden Dragon");
    assert_eq!(dragon.ids.len(), 1);
}

const POSTMATES_STORE: &str = r#"{
    "data": {
        "uuid": "pm-joes",
        "sections": [ { "uuid": "sec-1" } ],
        "catalogSectionsMap": {
            "sec-1": [
                {
                    "catalogSectionUUID": "pm-picked",
                    "payload": {
                        "standardItemsPayload": {
                            "title": { "text": "Picked for You" },
                            "catalogItems": [
                                { "uuid": "pm-cb", "title": "Cheeseburger", "price": 899 }
                            ]
                        }
                    }
                },
                {
                    "catalogSectionUUID": "pm-burgers",
                    "payload": {
                        "standardItemsPayload": {
                            "title": { "text": "Burgers" },
                            "catalogItems": [
                                {
                                    "uuid": "pm-cb",
                                    "title": "Cheeseburger",
                                    "itemDescription": "With cheddar",
                                    "price": 899
                                }
                            ]
                        }
                    }
                }
            ]
        }
    }
}"#;

const GRUBHUB_STORE: &str = r#"{
    "restaurant": {
        "id": "gh-4321",
        "menu_category_list": [
            {
                "menu_category_id": "gh-burgers",
                "name": "Burgers",
                "menu_item_list": [
                    {
                        "id": "gh-cb",
                        "name": "Cheeseburger",
                        "price": { "amount": 949 }
                    }
                ]
            }
        ]
    }
}"#;

const DOORDASH_STORE: &str = r#"{
    "menu": {
        "hasMenuSection": [
            [
                {
                    "name": "Shakes",
                    "hasMenuItem": [
                        { "name": "Vanilla Shake", "offers": { "price": "4.99" } }
                    ]
                }
            ]
        ]
    }
}"#;

#[test]
fn menu_pipeline_merges_prices_and_appends_new_categories() {
    let menus = vec![
        postmates::normalize_store(serde_json::from_str(POSTMATES_STORE).unwrap()).unwrap(),
        grubhub::normalize_store(serde_json::from_str(GRUBHUB_STORE).unwrap()),
        doordash::normalize_store("777", serde_json::from_str(DOORDASH_STORE).unwrap()),
    ];
    let config = ReconConfig::default();

    // "Picked for You" is excluded, leaving Burgers (merged) and the
    // DoorDash-only Shakes category.
    let first = merge_menus(&menus, 1, &config).unwrap();
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.category.name, "Burgers");

    let cheeseburger = &first.category.items[0];
    assert_eq!(cheeseburger.prices.get(&ServiceId::Postmates), Some(&8.99));
    assert_eq!(cheeseburger.prices.get(&ServiceId::Grubhub), Some(&9.49));
    assert_eq!(cheeseburger.ids.get(&ServiceId::Grubhub).unwrap(), "gh-cb");

    let second = merge_menus(&menus, 2, &config).unwrap();
    assert_eq!(second.category.name, "Shakes");
    assert_eq!(
        second.category.items[0].ids.get(&ServiceId::Doordash).unwrap(),
        "Vanilla Shake"
    );

    assert_eq!(first.store_ids.len(), 3);
    assert_eq!(first.store_ids.get(&ServiceId::Doordash).unwrap(), "777");
}

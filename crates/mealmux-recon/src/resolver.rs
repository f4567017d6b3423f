//! Entity resolution: grouping per-service search hits that describe
//! the same physical restaurant.
//!
//! Two hits match when their normalized titles are similar enough and
//! their coordinates fall within a small axis-aligned box of each
//! other. Matching is anchor-based: each unconsumed hit in turn
//! anchors a group and absorbs every later hit that matches it, so
//! chains like a~b, a~c collapse into one group even when b and c
//! would not match each other directly.

use mealmux_core::{NormalizedStoreHit, ReconConfig, ServiceHits, UnifiedStore};

use crate::similarity::title_similarity;

/// Groups search hits across services into unified store records.
///
/// Input order is significant: the first-seen hit of each group
/// supplies the descriptive fields (title, fee, eta, rating, image,
/// location), and output groups appear in first-seen anchor order.
/// An empty input produces an empty output.
///
/// O(n²) over the total hit count, which is one page of results per
/// service — tens of records, not thousands.
#[must_use]
pub fn resolve(hits_by_service: &[ServiceHits], config: &ReconConfig) -> Vec<UnifiedStore> {
    let snapshot: Vec<&NormalizedStoreHit> = hits_by_service
        .iter()
        .flat_map(|service_hits| service_hits.hits.iter())
        .collect();

    // Explicit consumed markers over a fixed snapshot; the matching
    // pass never mutates the list it iterates.
    let mut consumed = vec![false; snapshot.len()];
    let mut stores = Vec::new();

    for i in 0..snapshot.len() {
        if consumed[i] {
            continue;
        }
        consumed[i] = true;
        let anchor = snapshot[i];

        let mut store = UnifiedStore {
            title: anchor.title.clone(),
            location: anchor.location,
            delivery_fee: anchor.delivery_fee,
            eta_minutes: anchor.eta_minutes,
            rating: anchor.rating,
            image: anchor.image.clone(),
            ids: std::iter::once((anchor.service, anchor.external_id.clone())).collect(),
        };

        for j in (i + 1)..snapshot.len() {
            if consumed[j] {
                continue;
            }
            let candidate = snapshot[j];
            if !is_same_restaurant(anchor, candidate, config) {
                continue;
            }
            consumed[j] = true;
            tracing::debug!(
                anchor = %anchor.title,
                candidate = %candidate.title,
                service = %candidate.service,
                "merged duplicate hit"
            );
            // At most one id per service; the first-seen hit wins.
            store
                .ids
                .entry(candidate.service)
                .or_insert_with(|| candidate.external_id.clone());
        }

        stores.push(store);
    }

    stores
}

/// Same-restaurant predicate: strict `>` on title similarity, strict
/// `<` on each coordinate axis. The per-axis box (~111 m per 0.001°)
/// is intentional — it is not a circular radius.
fn is_same_restaurant(
    a: &NormalizedStoreHit,
    b: &NormalizedStoreHit,
    config: &ReconConfig,
) -> bool {
    title_similarity(&a.title, &b.title) > config.title_similarity_threshold
        && (a.location.latitude - b.location.latitude).abs() < config.coord_tolerance_degrees
        && (a.location.longitude - b.location.longitude).abs() < config.coord_tolerance_degrees
}

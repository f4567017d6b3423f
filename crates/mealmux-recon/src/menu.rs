//! Menu merging and pagination.
//!
//! The first service in the input list is the **primary**: its
//! categories and items seed identity. Later services fold into the
//! existing structure by normalized name, appending anything the
//! primary never mentioned. Pagination is one category per page,
//! 1-based; the full item list of the category rides along with the
//! page.

use std::collections::HashMap;

use mealmux_core::{
    MenuPage, ReconConfig, ServiceMenu, UnifiedCategory, UnifiedMenu, UnifiedMenuItem,
};

use crate::error::ReconError;
use crate::similarity::normalize_title;

/// Merges per-service store menus into one unified menu.
///
/// Category and item identity is the normalized name; the first-seen
/// original spelling is kept for display. Promotional categories on
/// the configured exclusion list are dropped from every service.
/// Services absent from the input simply contribute nothing.
///
/// # Errors
///
/// [`ReconError::MissingPrimaryMenu`] when the input list is empty —
/// without the primary service there is nothing to seed identity.
pub fn merge(
    menus_by_service: &[ServiceMenu],
    config: &ReconConfig,
) -> Result<UnifiedMenu, ReconError> {
    if menus_by_service.is_empty() {
        return Err(ReconError::MissingPrimaryMenu);
    }

    let mut menu = UnifiedMenu {
        store_ids: menus_by_service
            .iter()
            .map(|m| (m.service, m.store_id.clone()))
            .collect(),
        categories: Vec::new(),
    };
    // Normalized name → index into `menu.categories`, with a parallel
    // per-category item index. Insertion order is the display order.
    let mut category_index: HashMap<String, usize> = HashMap::new();
    let mut item_indexes: Vec<HashMap<String, usize>> = Vec::new();

    for service_menu in menus_by_service {
        for category in &service_menu.categories {
            let category_key = normalize_title(&category.name);
            if config.excluded_categories.iter().any(|e| *e == category_key) {
                tracing::debug!(
                    service = %service_menu.service,
                    category = %category.name,
                    "dropped platform-only promotional category"
                );
                continue;
            }

            let idx = match category_index.get(&category_key) {
                Some(&idx) => idx,
                None => {
                    menu.categories.push(UnifiedCategory {
                        name: category.name.clone(),
                        category_ids: std::collections::BTreeMap::new(),
                        items: Vec::new(),
                    });
                    item_indexes.push(HashMap::new());
                    let idx = menu.categories.len() - 1;
                    category_index.insert(category_key, idx);
                    idx
                }
            };
            let unified_category = &mut menu.categories[idx];
            unified_category
                .category_ids
                .entry(service_menu.service)
                .or_insert_with(|| category.external_category_id.clone());

            for item in &category.items {
                let item_key = normalize_title(&item.name);
                match item_indexes[idx].get(&item_key) {
                    Some(&item_idx) => {
                        let unified_item = &mut unified_category.items[item_idx];
                        unified_item
                            .prices
                            .entry(service_menu.service)
                            .or_insert(item.price);
                        unified_item
                            .ids
                            .entry(service_menu.service)
                            .or_insert_with(|| item.external_id.clone());
                    }
                    None => {
                        unified_category.items.push(UnifiedMenuItem {
                            name: item.name.clone(),
                            description: item.description.clone(),
                            image: item.image.clone(),
                            subsection_id: item.subsection_id.clone(),
                            prices: std::iter::once((service_menu.service, item.price)).collect(),
                            ids: std::iter::once((
                                service_menu.service,
                                item.external_id.clone(),
                            ))
                            .collect(),
                        });
                        item_indexes[idx].insert(item_key, unified_category.items.len() - 1);
                    }
                }
            }
        }
    }

    Ok(menu)
}

/// Extracts one 1-based page (one category) from a merged menu.
///
/// # Errors
///
/// [`ReconError::PageOutOfRange`] when `page` falls outside
/// `[1, total_pages]`. An empty menu has zero pages, so every request
/// against it is out of range.
pub fn paginate(menu: &UnifiedMenu, page: usize) -> Result<MenuPage, ReconError> {
    let total_pages = menu.categories.len();
    if page == 0 || page > total_pages {
        return Err(ReconError::PageOutOfRange { page, total_pages });
    }
    Ok(MenuPage {
        store_ids: menu.store_ids.clone(),
        category: menu.categories[page - 1].clone(),
        page,
        total_pages,
    })
}

/// Merges per-service menus and returns the requested page.
///
/// # Errors
///
/// See [`merge`] and [`paginate`].
pub fn merge_menus(
    menus_by_service: &[ServiceMenu],
    page: usize,
    config: &ReconConfig,
) -> Result<MenuPage, ReconError> {
    let menu = merge(menus_by_service, config)?;
    paginate(&menu, page)
}

//! Restaurant-name normalization and similarity.
//!
//! Providers spell the same restaurant differently ("Joe's Pizza" vs
//! "Joes Pizza", stray whitespace, inconsistent casing), so both the
//! resolver and the menu merger compare and key on a normalized form
//! while keeping the first-seen original spelling for display.

/// Normalizes a title or category/item name for comparison and map
/// keys: trim, casefold, collapse internal whitespace runs.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

/// Bigram Dice similarity between two names, in [0, 1].
///
/// Computed over the normalized forms; `sorensen_dice` itself ignores
/// whitespace, so normalization only adds the casefold.
#[must_use]
pub fn title_similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(&normalize_title(a), &normalize_title(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_casefolds() {
        assert_eq!(normalize_title("  Joe's  Pizza "), "joe's pizza");
    }

    #[test]
    fn normalize_collapses_interior_whitespace() {
        assert_eq!(normalize_title("Burgers\t&  Fries"), "burgers & fries");
    }

    #[test]
    fn identical_titles_score_one() {
        assert!((title_similarity("Joe's Pizza", "Joe's Pizza") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn case_differences_do_not_lower_the_score() {
        assert!((title_similarity("JOE'S PIZZA", "joe's pizza") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_is_symmetric() {
        let ab = title_similarity("Joe's Pizza", "Joes Pizza");
        let ba = title_similarity("Joes Pizza", "Joe's Pizza");
        assert!((ab - ba).abs() < f64::EPSILON);
    }

    #[test]
    fn near_duplicate_titles_score_above_half() {
        // The pair from live data that motivated the 0.5 threshold.
        assert!(title_similarity("Joe's Pizza", "Joes Pizza") > 0.5);
    }

    #[test]
    fn unrelated_titles_score_low() {
        assert!(title_similarity("Joe's Pizza", "Golden Dragon") < 0.3);
    }
}

//! Filter/search engine: pure derivation of the visible destination set.
//!
//! Cheap enough to recompute on every keystroke (one pass over the
//! catalog, no allocation beyond the result vector), so no debouncing or
//! memoization is required for correctness.

use std::collections::BTreeSet;

use crate::location::{Category, Location};

/// Maximum number of entries in the search autocomplete panel.
pub const SUGGESTION_LIMIT: usize = 6;

/// Filter state owned by the UI layer. Created on startup, mutated
/// synchronously on discrete user events, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Selected categories. Empty (or full) selection means "no filtering";
    /// an empty multi-select is deliberately not "show nothing".
    pub active_categories: BTreeSet<Category>,
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one category in the multi-select.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.active_categories.remove(&category) {
            self.active_categories.insert(category);
        }
    }

    pub fn clear(&mut self) {
        self.active_categories.clear();
        self.search_term.clear();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_categories.is_empty() && self.search_term.is_empty()
    }
}

/// Derive the visible subset of the catalog, preserving catalog order.
///
/// Category pass: empty or full selection lets everything through.
/// Text pass: case-insensitive substring match against title, category
/// tag, address, or any tag. Deterministic for identical inputs.
pub fn compute_visible<'a>(
    catalog: &'a [Location],
    active_categories: &BTreeSet<Category>,
    search_term: &str,
) -> Vec<&'a Location> {
    let filter_by_category =
        !active_categories.is_empty() && active_categories.len() < Category::ALL.len();
    let term = search_term.trim().to_lowercase();

    catalog
        .iter()
        .filter(|loc| !filter_by_category || active_categories.contains(&loc.category))
        .filter(|loc| term.is_empty() || matches_term(loc, &term))
        .collect()
}

/// Autocomplete suggestions: same text predicate as `compute_visible`,
/// capped at `limit`. An empty term yields no suggestions (the panel only
/// opens once the user has typed something). Does not touch filter state.
pub fn suggest<'a>(catalog: &'a [Location], search_term: &str, limit: usize) -> Vec<&'a Location> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|loc| matches_term(loc, &term))
        .take(limit)
        .collect()
}

/// Substring containment against title, category tag, address or tags.
/// `term` must already be lower-cased.
fn matches_term(location: &Location, term: &str) -> bool {
    location.title.to_lowercase().contains(term)
        || location.category.name().contains(term)
        || location.address.to_lowercase().contains(term)
        || location
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;

    fn loc(id: &str, title: &str, category: Category, address: &str, tags: &[&str]) -> Location {
        Location {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            coordinates: Coordinates::new(4.5, -74.2),
            category,
            address: address.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            businesses: Vec::new(),
        }
    }

    fn catalog() -> Vec<Location> {
        vec![
            loc(
                "cartagena",
                "Cartagena",
                Category::Cultural,
                "Cartagena, Bolívar",
                &["Historic", "Colonial"],
            ),
            loc(
                "tayrona",
                "Parque Tayrona",
                Category::Beaches,
                "Santa Marta, Magdalena",
                &["Nature", "Beach"],
            ),
            loc(
                "cocora",
                "Valle del Cocora",
                Category::Mountains,
                "Salento, Quindío",
                &["Naturaleza"],
            ),
        ]
    }

    fn ids(result: &[&Location]) -> Vec<String> {
        result.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn empty_selection_and_empty_term_show_everything() {
        let cat = catalog();
        let visible = compute_visible(&cat, &BTreeSet::new(), "");
        assert_eq!(ids(&visible), ["cartagena", "tayrona", "cocora"]);
    }

    #[test]
    fn full_selection_behaves_as_unfiltered() {
        let cat = catalog();
        let all: BTreeSet<Category> = Category::ALL.iter().copied().collect();
        let visible = compute_visible(&cat, &all, "");
        assert_eq!(visible.len(), cat.len());
    }

    #[test]
    fn proper_subset_keeps_exactly_matching_categories() {
        let cat = catalog();
        let selected: BTreeSet<Category> = [Category::Cultural].into_iter().collect();
        let visible = compute_visible(&cat, &selected, "");
        assert_eq!(ids(&visible), ["cartagena"]);

        let selected: BTreeSet<Category> =
            [Category::Beaches, Category::Mountains].into_iter().collect();
        let visible = compute_visible(&cat, &selected, "");
        assert_eq!(ids(&visible), ["tayrona", "cocora"]);
    }

    #[test]
    fn term_matches_title_case_insensitively() {
        let cat = catalog();
        let visible = compute_visible(&cat, &BTreeSet::new(), "tayrona");
        assert_eq!(ids(&visible), ["tayrona"]);
        let visible = compute_visible(&cat, &BTreeSet::new(), "TAYRONA");
        assert_eq!(ids(&visible), ["tayrona"]);
    }

    #[test]
    fn term_matches_category_tag_address_and_tags() {
        let cat = catalog();
        // category tag
        assert_eq!(ids(&compute_visible(&cat, &BTreeSet::new(), "beach")), ["tayrona"]);
        // address
        assert_eq!(ids(&compute_visible(&cat, &BTreeSet::new(), "salento")), ["cocora"]);
        // tag
        assert_eq!(ids(&compute_visible(&cat, &BTreeSet::new(), "colonial")), ["cartagena"]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let cat = catalog();
        assert!(compute_visible(&cat, &BTreeSet::new(), "xyz").is_empty());
        assert!(compute_visible(&[], &BTreeSet::new(), "anything").is_empty());
    }

    #[test]
    fn category_and_term_compose() {
        let cat = catalog();
        let selected: BTreeSet<Category> = [Category::Beaches].into_iter().collect();
        // "cartagena" matches by title but is filtered out by category.
        assert!(compute_visible(&cat, &selected, "cartagena").is_empty());
        assert_eq!(ids(&compute_visible(&cat, &selected, "parque")), ["tayrona"]);
    }

    #[test]
    fn result_preserves_catalog_order() {
        let cat = catalog();
        // "natur" matches tayrona (tag "Nature") and cocora (tag "Naturaleza").
        let visible = compute_visible(&cat, &BTreeSet::new(), "natur");
        assert_eq!(ids(&visible), ["tayrona", "cocora"]);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let cat = catalog();
        let selected: BTreeSet<Category> = [Category::Cultural, Category::Beaches]
            .into_iter()
            .collect();
        let a = ids(&compute_visible(&cat, &selected, "a"));
        let b = ids(&compute_visible(&cat, &selected, "a"));
        assert_eq!(a, b);
    }

    #[test]
    fn suggestions_match_tags_and_respect_the_cap() {
        let cat = catalog();
        assert_eq!(ids(&suggest(&cat, "histo", SUGGESTION_LIMIT)), ["cartagena"]);

        let many: Vec<Location> = (0..10)
            .map(|i| loc(&format!("p{i}"), &format!("Playa {i}"), Category::Beaches, "Costa", &[]))
            .collect();
        assert_eq!(suggest(&many, "playa", SUGGESTION_LIMIT).len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn empty_term_yields_no_suggestions() {
        let cat = catalog();
        assert!(suggest(&cat, "", SUGGESTION_LIMIT).is_empty());
        assert!(suggest(&cat, "   ", SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn toggle_category_flips_membership() {
        let mut state = FilterState::new();
        state.toggle_category(Category::Beaches);
        assert!(state.active_categories.contains(&Category::Beaches));
        state.toggle_category(Category::Beaches);
        assert!(state.active_categories.is_empty());
    }
}

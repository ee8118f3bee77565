//! End-to-end exercise of the catalog → filter → map-sync pipeline using
//! the bundled data, the way the GUI drives it.

use std::collections::BTreeSet;

use explora_core::prelude::*;
use explora_core::style::MarkerStyle;
use explora_core::{suggest, SUGGESTION_LIMIT};

/// Port that counts commands per id, for diff-stability assertions.
#[derive(Default)]
struct CountingPort {
    adds: Vec<String>,
    removes: Vec<String>,
    centers: Vec<(Coordinates, f64)>,
}

impl MapPort for CountingPort {
    fn add_marker(&mut self, id: &str, _coordinates: Coordinates, _style: MarkerStyle) {
        self.adds.push(id.to_string());
    }
    fn remove_marker(&mut self, id: &str) {
        self.removes.push(id.to_string());
    }
    fn center_on(&mut self, coordinates: Coordinates, zoom: f64) {
        self.centers.push((coordinates, zoom));
    }
}

fn ids(locations: &[&Location]) -> Vec<String> {
    locations.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn bundled_catalog_search_scenarios() {
    let catalog = Catalog::load().unwrap();
    let none = BTreeSet::new();

    let cultural: BTreeSet<Category> = [Category::Cultural].into_iter().collect();
    let visible = compute_visible(catalog.locations(), &cultural, "");
    assert!(ids(&visible).contains(&"cartagena".to_string()));
    assert!(visible.iter().all(|l| l.category == Category::Cultural));

    let visible = compute_visible(catalog.locations(), &none, "tayrona");
    assert_eq!(ids(&visible), ["tayrona"]);

    assert!(compute_visible(catalog.locations(), &none, "xyzzy").is_empty());

    // "histo" matches Cartagena through its "Historia" tag.
    let suggestions = suggest(catalog.locations(), "histo", SUGGESTION_LIMIT);
    assert!(ids(&suggestions).contains(&"cartagena".to_string()));
    assert!(suggestions.len() <= SUGGESTION_LIMIT);
}

#[test]
fn typing_a_term_letter_by_letter_never_reorders_or_flickers() {
    let catalog = Catalog::load().unwrap();
    let none = BTreeSet::new();
    let mut sync = MapSync::new();
    let mut port = CountingPort::default();

    // Initial render: everything visible.
    let visible = compute_visible(catalog.locations(), &none, "");
    sync.reconcile(&visible, &mut port);
    assert_eq!(sync.marker_count(), catalog.len());

    // Narrow down one keystroke at a time, reconciling after each.
    for term in ["c", "ca", "car", "cart"] {
        let visible = compute_visible(catalog.locations(), &none, term);
        let order: Vec<&str> = visible.iter().map(|l| l.id.as_str()).collect();
        let catalog_order: Vec<&str> = catalog
            .locations()
            .iter()
            .map(|l| l.id.as_str())
            .filter(|id| order.contains(id))
            .collect();
        assert_eq!(order, catalog_order, "order preserved for '{term}'");

        sync.reconcile(&visible, &mut port);
        assert_eq!(sync.marker_count(), visible.len());
    }

    // Cartagena matched every step, so it was added exactly once and
    // never removed.
    assert_eq!(port.adds.iter().filter(|id| *id == "cartagena").count(), 1);
    assert!(!port.removes.contains(&"cartagena".to_string()));
}

#[test]
fn selecting_from_a_suggestion_opens_and_centers() {
    let catalog = Catalog::load().unwrap();
    let mut sync = MapSync::new();
    let mut port = CountingPort::default();

    let suggestions = suggest(catalog.locations(), "cocora", SUGGESTION_LIMIT);
    let hit = suggestions[0];
    sync.select(hit, &mut port);

    assert_eq!(sync.selected_id(), Some("cocora"));
    let (center, _zoom) = port.centers.last().unwrap();
    assert_eq!(center.lat, hit.coordinates.lat);

    // Switching to a favorite destination goes straight to the new panel.
    let tayrona = catalog.get("tayrona").unwrap();
    sync.select(tayrona, &mut port);
    assert_eq!(sync.selected_id(), Some("tayrona"));

    sync.close();
    sync.close();
    assert_eq!(*sync.selection(), Selection::Closed);
}

#[test]
fn category_filter_plus_selection_keeps_marker_registry_consistent() {
    let catalog = Catalog::load().unwrap();
    let mut sync = MapSync::new();
    let mut port = CountingPort::default();

    let beaches: BTreeSet<Category> = [Category::Beaches].into_iter().collect();
    let visible = compute_visible(catalog.locations(), &beaches, "");
    sync.reconcile(&visible, &mut port);

    assert!(sync.is_rendered("tayrona"));
    assert!(!sync.is_rendered("cartagena"));

    // Widening back to unfiltered re-adds the rest without touching the
    // beach markers.
    let removed_before = port.removes.len();
    let all = compute_visible(catalog.locations(), &BTreeSet::new(), "");
    sync.reconcile(&all, &mut port);
    assert_eq!(port.removes.len(), removed_before);
    assert_eq!(sync.marker_count(), catalog.len());
}

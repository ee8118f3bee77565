//! Navigation bar: brand, category filters, search with autocomplete,
//! and the entry points to favorites, preferences and about.

use egui::Ui;
use explora_core::{suggest, Catalog, Category, FilterState, SUGGESTION_LIMIT};

/// Actions returned from the navigation bar.
pub enum NavAction {
    /// Toggle one category in the multi-select filter.
    ToggleCategory(Category),
    /// A suggestion was clicked: ask the map to open this destination.
    OpenLocation(String),
    /// Clear search term and category selection.
    ClearFilters,
    Geolocate,
    ShowFavorites,
    ShowPreferences,
    ShowAbout,
    None,
}

/// Transient navigation-bar state.
#[derive(Default)]
pub struct NavState {
    /// Whether the search box had focus recently (keeps the suggestion
    /// panel open while the user clicks a row).
    pub suggestions_open: bool,
}

/// Show the top bar. Search edits mutate `filter` directly; everything
/// else is returned as an action.
pub fn show_nav_bar(
    ui: &mut Ui,
    state: &mut NavState,
    filter: &mut FilterState,
    favorites_count: usize,
    geolocating: bool,
) -> NavAction {
    let mut action = NavAction::None;

    ui.horizontal(|ui| {
        ui.heading("Colombia Explorer");
        ui.label(egui::RichText::new("Descubre el paraíso").weak());

        ui.separator();

        for &category in Category::ALL {
            let active = filter.active_categories.contains(&category);
            let text = format!("{} {}", category.glyph(), category.label());
            if ui.selectable_label(active, text).clicked() {
                action = NavAction::ToggleCategory(category);
            }
        }

        ui.separator();

        let response = ui.add(
            egui::TextEdit::singleline(&mut filter.search_term)
                .hint_text("Buscar destinos...")
                .desired_width(220.0),
        );
        if response.changed() || response.gained_focus() {
            state.suggestions_open = !filter.search_term.trim().is_empty();
        }
        if !filter.search_term.is_empty() && ui.button("✖").clicked() {
            action = NavAction::ClearFilters;
            state.suggestions_open = false;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Acerca de").clicked() {
                action = NavAction::ShowAbout;
            }
            if ui.button("Preferencias").clicked() {
                action = NavAction::ShowPreferences;
            }
            if ui
                .button(format!("♥ Favoritos ({favorites_count})"))
                .clicked()
            {
                action = NavAction::ShowFavorites;
            }
            if geolocating {
                ui.spinner();
                ui.label("Buscando ubicación...");
            } else if ui.button("📍 Cerca de mí").clicked() {
                action = NavAction::Geolocate;
            }
        });
    });

    action
}

/// Show the autocomplete panel under the bar. Rows are derived from the
/// current term on every keystroke and never mutate the term itself.
pub fn show_suggestions(
    ui: &mut Ui,
    state: &mut NavState,
    catalog: &Catalog,
    search_term: &str,
) -> NavAction {
    let mut action = NavAction::None;

    let suggestions = suggest(catalog.locations(), search_term, SUGGESTION_LIMIT);
    if suggestions.is_empty() {
        ui.label(egui::RichText::new("Sin resultados").weak());
        return action;
    }

    ui.label(egui::RichText::new("Destinos Sugeridos").strong());
    for location in suggestions {
        let text = format!(
            "{} {} — {}",
            location.category.glyph(),
            location.title,
            location.category.label()
        );
        if ui.selectable_label(false, text).clicked() {
            action = NavAction::OpenLocation(location.id.clone());
            state.suggestions_open = false;
        }
    }

    action
}

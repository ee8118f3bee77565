//! Favorites panel: the saved destinations, with remove and open actions.

use egui::Ui;
use explora_core::{Catalog, Favorites};

/// Actions returned from the favorites panel.
pub enum FavoritesAction {
    /// Open a favorite on the map.
    Open(String),
    Remove(String),
    Close,
    None,
}

pub fn show_favorites(ui: &mut Ui, favorites: &Favorites, catalog: &Catalog) -> FavoritesAction {
    let mut action = FavoritesAction::None;

    if favorites.is_empty() {
        ui.label("No tienes destinos favoritos guardados.");
        if ui.button("Explorar Destinos").clicked() {
            action = FavoritesAction::Close;
        }
        return action;
    }

    egui::ScrollArea::vertical()
        .max_height(320.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for id in favorites.ids() {
                let Some(location) = catalog.get(id) else { continue };

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&location.title).strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("🗑").clicked() {
                                    action = FavoritesAction::Remove(location.id.clone());
                                }
                                if ui.button("Ver en mapa").clicked() {
                                    action = FavoritesAction::Open(location.id.clone());
                                }
                            },
                        );
                    });
                    ui.label(egui::RichText::new(&location.description).weak());
                });
                ui.add_space(4.0);
            }
        });

    action
}

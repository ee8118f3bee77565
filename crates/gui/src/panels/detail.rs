//! Detail panel for the selected destination, including its local
//! business listings.

use egui::Ui;
use explora_core::{LocalBusiness, Location};

/// Actions returned from the detail panel.
pub enum DetailAction {
    Close,
    ToggleFavorite(String),
    None,
}

/// Show the detail panel contents for one destination.
pub fn show_detail(
    ui: &mut Ui,
    location: &Location,
    is_favorite: bool,
    show_businesses: bool,
) -> DetailAction {
    let mut action = DetailAction::None;

    ui.horizontal(|ui| {
        ui.heading(format!("{} {}", location.category.glyph(), location.title));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                action = DetailAction::Close;
            }
            let favorite_text = if is_favorite {
                "♥ Quitar de favoritos"
            } else {
                "♡ Guardar en favoritos"
            };
            if ui.button(favorite_text).clicked() {
                action = DetailAction::ToggleFavorite(location.id.clone());
            }
        });
    });

    ui.label(egui::RichText::new(location.category.label()).weak());
    ui.separator();

    ui.label(&location.description);
    ui.label(egui::RichText::new(&location.address).weak());

    if !location.tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &location.tags {
                ui.label(egui::RichText::new(tag).small().weak());
            }
        });
    }

    if show_businesses && !location.businesses.is_empty() {
        ui.separator();
        ui.label(egui::RichText::new("Cerca de este destino").strong());

        egui::ScrollArea::vertical()
            .max_height(260.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for business in &location.businesses {
                    show_business(ui, business);
                    ui.add_space(6.0);
                }
            });
    }

    action
}

fn show_business(ui: &mut Ui, business: &LocalBusiness) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&business.name).strong());
            ui.label(egui::RichText::new(business.category.label()).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("★ {:.1}", business.rating));
                ui.label(egui::RichText::new(format_distance(business.distance)).weak());
            });
        });

        ui.label(&business.description);

        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(format!("🕒 {}", business.hours)).small());
            if business.accepts_reservations == Some(true) {
                ui.label(egui::RichText::new("Reservas").small().weak());
            }
            if business.accepts_digital_payments == Some(true) {
                ui.label(egui::RichText::new("Pago digital").small().weak());
            }
            for badge in &business.badges {
                ui.label(egui::RichText::new(badge).small().weak());
            }
        });
    });
}

/// Pre-authored distances, shown as meters below a kilometer.
fn format_distance(meters: u32) -> String {
    if meters >= 1_000 {
        format!("{:.1} km", meters as f64 / 1_000.0)
    } else {
        format!("{meters} m")
    }
}

//! Traveller-preferences intake form.

use egui::Ui;
use explora_core::preferences::{Budget, Experience, Transport, TravelType};
use explora_core::Preferences;

/// Actions returned from the preferences form.
pub enum PreferencesAction {
    Save(Preferences),
    Close,
    None,
}

/// Form state: the draft being edited plus the current validation error.
#[derive(Default)]
pub struct PreferencesFormState {
    pub draft: Preferences,
    pub error: Option<String>,
}

impl PreferencesFormState {
    pub fn open_with(&mut self, current: &Preferences) {
        self.draft = current.clone();
        self.error = None;
    }
}

pub fn show_preferences_form(ui: &mut Ui, state: &mut PreferencesFormState) -> PreferencesAction {
    let mut action = PreferencesAction::None;

    ui.heading("Tus preferencias de viaje");
    ui.add_space(4.0);

    ui.label(egui::RichText::new("¿Qué tipo de experiencias buscas?").strong());
    ui.horizontal_wrapped(|ui| {
        for &experience in Experience::ALL {
            let active = state.draft.experiences.contains(&experience);
            if ui.selectable_label(active, experience.label()).clicked() {
                state.draft.toggle_experience(experience);
            }
        }
    });

    ui.add_space(4.0);
    ui.label(egui::RichText::new("¿Cuál es tu presupuesto diario?").strong());
    ui.horizontal(|ui| {
        for &budget in Budget::ALL {
            let selected = state.draft.budget == Some(budget);
            if ui.selectable_label(selected, budget.label()).clicked() {
                state.draft.budget = Some(budget);
            }
        }
    });

    ui.add_space(4.0);
    ui.label(egui::RichText::new("¿Cuándo viajas?").strong());
    ui.horizontal(|ui| {
        ui.label("Desde");
        ui.add(
            egui::TextEdit::singleline(&mut state.draft.dates.start)
                .hint_text("2025-12-01")
                .desired_width(100.0),
        );
        ui.label("Hasta");
        ui.add(
            egui::TextEdit::singleline(&mut state.draft.dates.end)
                .hint_text("2025-12-15")
                .desired_width(100.0),
        );
    });

    ui.add_space(4.0);
    ui.label(egui::RichText::new("¿Con quién viajas?").strong());
    ui.horizontal(|ui| {
        for &travel_type in TravelType::ALL {
            let selected = state.draft.travel_type == Some(travel_type);
            if ui.selectable_label(selected, travel_type.label()).clicked() {
                state.draft.travel_type = Some(travel_type);
            }
        }
    });

    ui.add_space(4.0);
    ui.label(egui::RichText::new("Nivel de actividad").strong());
    let mut level = state.draft.activity_level as i32;
    ui.add(
        egui::Slider::new(&mut level, 1..=3).custom_formatter(|v, _| {
            match v as i32 {
                1 => "🌴 Relajado".to_string(),
                2 => "🧗 Intermedio".to_string(),
                _ => "🚴 Activo".to_string(),
            }
        }),
    );
    state.draft.activity_level = level as u8;

    ui.add_space(4.0);
    ui.label(egui::RichText::new("¿Cómo te mueves?").strong());
    ui.horizontal_wrapped(|ui| {
        for &transport in Transport::ALL {
            let active = state.draft.transport.contains(&transport);
            if ui.selectable_label(active, transport.label()).clicked() {
                state.draft.toggle_transport(transport);
            }
        }
    });

    ui.add_space(4.0);
    ui.checkbox(
        &mut state.draft.show_local_recommendations,
        "Mostrar recomendaciones locales",
    );

    if let Some(error) = &state.error {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Guardar").clicked() {
            match state.draft.validate() {
                Ok(()) => {
                    state.error = None;
                    action = PreferencesAction::Save(state.draft.clone());
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        }
        if ui.button("Cancelar").clicked() {
            action = PreferencesAction::Close;
        }
    });

    action
}

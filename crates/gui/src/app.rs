//! Main application: ExploraApp implements eframe::App.

use crossbeam_channel::{Receiver, Sender};

use explora_core::{compute_visible, Catalog, Coordinates, FilterState, MapSync};
use explora_core::{Favorites, Preferences};

use crate::geolocate;
use crate::map::markers::MapEvent;
use crate::map::outline::fetch_outline;
use crate::map::{draw_tooltip, MapView};
use crate::panels::detail::{show_detail, DetailAction};
use crate::panels::favorites::{show_favorites, FavoritesAction};
use crate::panels::legend::{show_legend, LegendAction};
use crate::panels::nav::{show_nav_bar, show_suggestions, NavAction, NavState};
use crate::panels::preferences::{show_preferences_form, PreferencesAction, PreferencesFormState};
use crate::state::{AppMessage, Notice, NoticeLevel};

/// The main application state.
pub struct ExploraApp {
    /// Message bus: background threads and cross-component requests all
    /// land here; `process_messages` is the single consumer.
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,

    catalog: Catalog,
    filter: FilterState,
    sync: MapSync,
    map: MapView,

    favorites: Favorites,
    preferences: Preferences,

    nav: NavState,
    preferences_form: PreferencesFormState,

    notices: Vec<Notice>,
    geolocating: bool,
    show_favorites_window: bool,
    show_preferences_window: bool,
    show_about: bool,
}

impl ExploraApp {
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let (tx, rx) = crossbeam_channel::unbounded();

        // The outline is cosmetic; start the fetch and forget about it.
        fetch_outline(tx.clone());

        let mut app = Self {
            tx,
            rx,
            catalog,
            filter: FilterState::new(),
            sync: MapSync::new(),
            map: MapView::new(),
            favorites: Favorites::new(),
            preferences: Preferences::default(),
            nav: NavState::default(),
            preferences_form: PreferencesFormState::default(),
            notices: Vec::new(),
            geolocating: false,
            show_favorites_window: false,
            show_preferences_window: false,
            show_about: false,
        };

        app.notices.push(Notice::info(format!(
            "{} destinos cargados",
            app.catalog.len()
        )));

        app
    }

    /// Drain the message bus.
    fn process_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                AppMessage::OpenLocation { id } => self.open_location(&id),

                AppMessage::GeolocationFix { lat, lng } => {
                    self.geolocating = false;
                    self.sync
                        .set_user_location(Coordinates::new(lat, lng), &mut self.map);
                    self.notices
                        .push(Notice::success("Mapa centrado en tu ubicación"));
                }

                AppMessage::GeolocationFailed { reason } => {
                    self.geolocating = false;
                    self.notices.push(Notice::error(format!(
                        "No pudimos obtener tu ubicación: {reason}"
                    )));
                }

                AppMessage::OutlineLoaded(outline) => {
                    self.map.set_outline(outline);
                    tracing::debug!("country outline loaded");
                }

                AppMessage::OutlineFailed { message } => {
                    // Cosmetic layer: the map is fully usable without it.
                    tracing::warn!("country outline unavailable: {message}");
                }
            }
        }
    }

    /// Open a destination's detail panel and center the map on it.
    fn open_location(&mut self, id: &str) {
        match self.catalog.get(id) {
            Some(location) => self.sync.select(location, &mut self.map),
            None => self
                .notices
                .push(Notice::warning(format!("Destino desconocido: {id}"))),
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) {
        match action {
            NavAction::ToggleCategory(category) => self.filter.toggle_category(category),

            NavAction::OpenLocation(id) => {
                // Suggestion clicks travel the bus; the map-side consumer
                // in process_messages is the only subscriber.
                let _ = self.tx.send(AppMessage::OpenLocation { id });
            }

            NavAction::ClearFilters => self.filter.clear(),

            NavAction::Geolocate => {
                self.geolocating = true;
                geolocate::request_position(self.tx.clone());
            }

            NavAction::ShowFavorites => self.show_favorites_window = true,

            NavAction::ShowPreferences => {
                self.preferences_form.open_with(&self.preferences);
                self.show_preferences_window = true;
            }

            NavAction::ShowAbout => self.show_about = true,

            NavAction::None => {}
        }
    }

    fn detail_window(&mut self, ctx: &egui::Context) {
        let Some(id) = self.sync.selected_id().map(str::to_string) else {
            return;
        };
        let Some(location) = self.catalog.get(&id) else {
            self.sync.close();
            return;
        };

        let is_favorite = self.favorites.contains(&id);
        let show_businesses = self.preferences.show_local_recommendations;
        let mut action = DetailAction::None;

        egui::Window::new("Destino")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(380.0)
            .show(ctx, |ui| {
                action = show_detail(ui, location, is_favorite, show_businesses);
            });

        match action {
            DetailAction::Close => self.sync.close(),
            DetailAction::ToggleFavorite(id) => {
                if self.favorites.toggle(&id) {
                    self.notices.push(Notice::success("Guardado en favoritos"));
                } else {
                    self.notices.push(Notice::info("Eliminado de favoritos"));
                }
            }
            DetailAction::None => {}
        }
    }

    fn favorites_window(&mut self, ctx: &egui::Context) {
        if !self.show_favorites_window {
            return;
        }

        let mut open = true;
        let mut action = FavoritesAction::None;

        egui::Window::new("Mis Favoritos")
            .open(&mut open)
            .resizable(false)
            .default_width(340.0)
            .show(ctx, |ui| {
                action = show_favorites(ui, &self.favorites, &self.catalog);
            });

        if !open {
            self.show_favorites_window = false;
        }

        match action {
            FavoritesAction::Open(id) => {
                let _ = self.tx.send(AppMessage::OpenLocation { id });
                self.show_favorites_window = false;
            }
            FavoritesAction::Remove(id) => self.favorites.remove(&id),
            FavoritesAction::Close => self.show_favorites_window = false,
            FavoritesAction::None => {}
        }
    }

    fn preferences_window(&mut self, ctx: &egui::Context) {
        if !self.show_preferences_window {
            return;
        }

        let mut open = true;
        let mut action = PreferencesAction::None;

        egui::Window::new("Preferencias")
            .open(&mut open)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                action = show_preferences_form(ui, &mut self.preferences_form);
            });

        if !open {
            self.show_preferences_window = false;
        }

        match action {
            PreferencesAction::Save(preferences) => {
                self.preferences = preferences;
                self.show_preferences_window = false;
                self.notices.push(Notice::success("Preferencias guardadas"));
            }
            PreferencesAction::Close => self.show_preferences_window = false,
            PreferencesAction::None => {}
        }
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let count = self.catalog.len();
        let mut close = false;

        egui::Window::new("Acerca de Colombia Explorer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.heading("Colombia Explorer");
                ui.label("Descubre el paraíso: playas, montañas, cultura y ecoturismo.");
                ui.label(format!("Versión {}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!("{count} destinos en el catálogo"));
                ui.separator();
                if ui.button("Cerrar").clicked() {
                    close = true;
                }
            });

        if close {
            self.show_about = false;
        }
    }
}

impl eframe::App for ExploraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        if self.geolocating {
            ctx.request_repaint();
        }

        // Navigation bar
        let mut nav_action = NavAction::None;
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            nav_action = show_nav_bar(
                ui,
                &mut self.nav,
                &mut self.filter,
                self.favorites.len(),
                self.geolocating,
            );
        });

        // Autocomplete panel, directly under the bar
        if self.nav.suggestions_open && !self.filter.search_term.trim().is_empty() {
            let mut suggestion_action = NavAction::None;
            egui::TopBottomPanel::top("suggestions").show(ctx, |ui| {
                suggestion_action =
                    show_suggestions(ui, &mut self.nav, &self.catalog, &self.filter.search_term);
            });
            if matches!(nav_action, NavAction::None) {
                nav_action = suggestion_action;
            }
        }

        self.handle_nav_action(nav_action);

        // Derive the visible set and reconcile the marker layer. Runs on
        // every frame; with an unchanged set this issues no commands.
        let visible = compute_visible(
            self.catalog.locations(),
            &self.filter.active_categories,
            &self.filter.search_term,
        );
        self.sync.reconcile(&visible, &mut self.map);

        // Status strip
        let visible_count = visible.len();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{visible_count} de {} destinos",
                    self.catalog.len()
                ));
                if let Some(notice) = self.notices.last() {
                    ui.separator();
                    let color = match notice.level {
                        NoticeLevel::Info => egui::Color32::GRAY,
                        NoticeLevel::Warning => egui::Color32::from_rgb(200, 150, 0),
                        NoticeLevel::Error => egui::Color32::from_rgb(200, 60, 60),
                        NoticeLevel::Success => egui::Color32::from_rgb(40, 140, 70),
                    };
                    ui.colored_label(color, &notice.message);
                }
            });
        });

        // Map
        let mut map_events: Vec<MapEvent> = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            map_events = self.map.show(
                ui,
                ctx,
                self.sync.selected_id(),
                self.sync.user_location(),
                self.sync.show_nearby(),
            );

            for event in &map_events {
                match event {
                    MapEvent::HoverEntered { id, screen } => {
                        self.sync.hover_enter(id, *screen);
                    }
                    MapEvent::HoverLeft => self.sync.hover_leave(),
                    MapEvent::Clicked(_) | MapEvent::BackgroundClicked => {}
                }
            }

            if let Some(hover) = self.sync.hover() {
                if let Some(location) = self.catalog.get(&hover.id) {
                    draw_tooltip(ui, hover.screen, &location.title, location.category.label());
                }
            }
        });

        // Legend over the map corner
        let mut legend_action = LegendAction::None;
        egui::Window::new("legend")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, [16.0, 90.0])
            .show(ctx, |ui| {
                legend_action = show_legend(ui, &self.filter, &visible);
            });
        if let LegendAction::Toggle(category) = legend_action {
            self.filter.toggle_category(category);
        }
        drop(visible);

        for event in map_events {
            match event {
                MapEvent::Clicked(id) => self.open_location(&id),
                // Clicking past the markers dismisses the detail panel;
                // close when already closed is a no-op.
                MapEvent::BackgroundClicked => self.sync.close(),
                _ => {}
            }
        }

        // Detail panel and the secondary windows
        self.detail_window(ctx);
        self.favorites_window(ctx);
        self.preferences_window(ctx);
        self.about_window(ctx);
    }
}

//! Colombia Explorer
//!
//! Desktop catalog of Colombian destinations on an interactive map.

mod app;
mod geolocate;
mod map;
mod panels;
mod state;

use app::ExploraApp;
use explora_core::Catalog;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Malformed bundled data is an authoring error; refuse to start.
    let catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("catalog failed to load: {e}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Colombia Explorer — Descubre el paraíso")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Colombia Explorer",
        native_options,
        Box::new(move |cc| Ok(Box::new(ExploraApp::new(cc, catalog)))),
    )
}

//! Map legend: category glyphs with visible counts, doubling as toggles.

use egui::Ui;
use explora_core::{Category, FilterState, Location};

/// Action returned from the legend.
pub enum LegendAction {
    Toggle(Category),
    None,
}

/// Show the legend. Counts reflect the currently visible set.
pub fn show_legend(ui: &mut Ui, filter: &FilterState, visible: &[&Location]) -> LegendAction {
    let mut action = LegendAction::None;

    ui.label(egui::RichText::new("Destinos en Colombia").strong());

    for &category in Category::ALL {
        let count = visible.iter().filter(|l| l.category == category).count();
        let active = filter.active_categories.contains(&category);
        let text = format!("{} {} ({count})", category.glyph(), category.label());
        if ui.selectable_label(active, text).clicked() {
            action = LegendAction::Toggle(category);
        }
    }

    action
}

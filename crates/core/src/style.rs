//! Marker styling: category → color and glyph.

use crate::location::Category;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style of one map marker, derived from the location category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: Rgb,
    pub glyph: &'static str,
}

impl MarkerStyle {
    /// Style for a category (colors follow the web palette: blue beaches,
    /// green mountains, red cultural, yellow ecotourism).
    pub fn for_category(category: Category) -> Self {
        let color = match category {
            Category::Beaches => Rgb::new(59, 130, 246),
            Category::Mountains => Rgb::new(34, 197, 94),
            Category::Cultural => Rgb::new(239, 68, 68),
            Category::Ecotourism => Rgb::new(234, 179, 8),
        };
        Self {
            color,
            glyph: category.glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_a_distinct_color() {
        let mut colors: Vec<Rgb> = Category::ALL
            .iter()
            .map(|&c| MarkerStyle::for_category(c).color)
            .collect();
        colors.dedup();
        assert_eq!(colors.len(), Category::ALL.len());
    }
}

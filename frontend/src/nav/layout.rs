use serde::Deserialize;

/// Fixed sizes the expanded panel height is derived from, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub top_bar_height: f64,
    /// min-height + padding of a single card
    pub card_height: f64,
    pub gap: f64,
    pub padding: f64,
    pub theme_slot_height: f64,
    /// 1rem top + 1rem bottom
    pub outer_margin: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            top_bar_height: 60.0,
            card_height: 78.0,
            gap: 8.0,
            padding: 16.0,
            theme_slot_height: 90.0,
            outer_margin: 32.0,
        }
    }
}

impl LayoutMetrics {
    /// Height of the panel with every card laid out, ignoring the viewport.
    pub fn content_height(&self, card_count: usize, has_theme_slot: bool) -> f64 {
        let cards = card_count as f64;
        let gaps = card_count.saturating_sub(1) as f64;
        let slot = if has_theme_slot { self.theme_slot_height } else { 0.0 };

        self.top_bar_height + self.card_height * cards + self.gap * gaps + self.padding + slot
    }

    /// Tallest the panel may get inside a viewport of the given height.
    pub fn max_height(&self, viewport_height: f64) -> f64 {
        viewport_height - self.outer_margin
    }

    /// Target height for the expanded panel. Recomputed on every call since
    /// the viewport can change between openings.
    pub fn expanded_height(&self, card_count: usize, has_theme_slot: bool, viewport_height: f64) -> f64 {
        self.content_height(card_count, has_theme_slot)
            .min(self.max_height(viewport_height))
    }

    pub fn collapsed_height(&self) -> f64 {
        self.top_bar_height
    }
}

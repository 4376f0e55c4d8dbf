use serde::Deserialize;

use crate::nav::{LayoutMetrics, NavError};

/// Delays used by the card nav outside of the animation engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    /// Gap between consecutive card reveals when falling back to CSS.
    pub stagger_ms: u32,
    /// Roughly the CSS transition length; the panel loses its open class
    /// after this on collapse.
    pub fallback_close_ms: u32,
    /// How long a card click waits after requesting collapse before scrolling.
    pub card_scroll_delay_ms: u32,
    /// Height of the fixed header the scroll target has to clear.
    pub header_offset: f64,
    /// Distance hidden items sit below their resting place.
    pub hidden_offset: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            stagger_ms: 60,
            fallback_close_ms: 300,
            card_scroll_delay_ms: 100,
            header_offset: 80.0,
            hidden_offset: 30.0,
        }
    }
}

/// Tween parameters handed to the timeline engine, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineTuning {
    pub panel_duration: f64,
    pub item_duration: f64,
    pub stagger: f64,
    /// How far the card entrance starts before the height tween ends.
    pub cards_overlap: f64,
    /// How far the theme slot entrance starts before the cards finish.
    pub slot_overlap: f64,
    pub ease: String,
}

impl Default for TimelineTuning {
    fn default() -> Self {
        Self {
            panel_duration: 0.4,
            item_duration: 0.35,
            stagger: 0.06,
            cards_overlap: 0.15,
            slot_overlap: 0.2,
            ease: "power3.out".to_string(),
        }
    }
}

/// Where the card nav markup lives in the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub container: String,
    pub panel: String,
    pub toggle: String,
    pub backdrop: String,
    pub card: String,
    pub link: String,
    pub theme_slot: String,
    /// Card attribute holding the selector of the section it scrolls to.
    pub target_attribute: String,
    pub open_class: String,
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: "#cardNav".to_string(),
            panel: ".card-nav".to_string(),
            toggle: "#cardNavHamburger".to_string(),
            backdrop: "#cardNavBackdrop".to_string(),
            card: ".nav-card".to_string(),
            link: ".nav-card-link".to_string(),
            theme_slot: ".nav-theme-toggle-wrapper".to_string(),
            target_attribute: "data-href".to_string(),
            open_class: "open".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub layout: LayoutMetrics,
    pub timing: Timing,
    pub timeline: TimelineTuning,
    pub selectors: Selectors,
}

impl NavConfig {
    /// Parses a (possibly partial) JSON override; missing fields keep their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(raw)?)
    }
}

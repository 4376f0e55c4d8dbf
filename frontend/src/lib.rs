use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod nav;
pub mod web;

thread_local! {
    static CARD_NAV: RefCell<Option<web::CardNavHandle>> = RefCell::new(None);
}

#[cfg(feature = "static-page")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    init_card_nav();
}

/// Wires the card nav already present in the page's markup. Pages without
/// one are left alone.
#[wasm_bindgen]
pub fn init_card_nav() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = web::page_config(&document);

    match web::mount(&config) {
        Ok(handle) => CARD_NAV.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) if e.is_missing_element() => log::debug!("No card nav on this page: {}", e),
        Err(e) => log::warn!("Card nav not mounted: {}", e),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn static_page_start_is_opt_in() {
        let manifest = include_str!("../Cargo.toml");
        let features = manifest
            .split("[features]")
            .nth(1)
            .expect("manifest has a [features] table");
        let default = features
            .lines()
            .find(|line| line.trim_start().starts_with("default"))
            .expect("default feature list");

        assert!(!default.contains("static-page"), "{default}");
        assert!(features.contains("static-page = []"));
    }
}

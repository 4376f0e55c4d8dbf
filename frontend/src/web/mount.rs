use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node};

use crate::config::NavConfig;
use crate::nav::{
    click_lands_on_link, resolve_animator, ExpandableNavMenu, NavCard, NavError, Schedule,
    Scheduler, TimelineEngine,
};

use super::dom::{by_selector, DomElements, DomHost};
use super::gsap::GsapEngine;
use super::listener::Listener;
use super::timers::{TimeoutScheduler, Timers};

type DomMenu = ExpandableNavMenu<DomHost>;

/// A mounted card nav. Dropping it detaches every listener and cancels
/// timers that haven't fired yet.
pub struct CardNavHandle {
    _menu: Rc<RefCell<DomMenu>>,
    _listeners: Vec<Listener>,
}

/// Runs `f` on the menu if it is still mounted and not already in use.
fn with_menu<R>(menu: &Weak<RefCell<DomMenu>>, f: impl FnOnce(&mut DomMenu) -> R) -> Option<R> {
    let menu = menu.upgrade()?;
    let mut menu = match menu.try_borrow_mut() {
        Ok(menu) => menu,
        Err(_) => {
            log::debug!("Card nav busy, dropping event");
            return None;
        }
    };
    Some(f(&mut menu))
}

fn listen<F>(
    target: &EventTarget,
    event: &'static str,
    menu: &Rc<RefCell<DomMenu>>,
    scheduler: &TimeoutScheduler,
    mut action: F,
) -> Option<Listener>
where
    F: FnMut(&mut DomMenu, &Event) -> Schedule + 'static,
{
    let menu = Rc::downgrade(menu);
    let mut scheduler = scheduler.clone();
    Listener::new(target, event, move |event: Event| {
        if let Some(schedule) = with_menu(&menu, |menu| action(menu, &event)) {
            scheduler.submit(schedule);
        }
    })
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|e| e.key())
}

fn card_of(element: &HtmlElement, target_attribute: &str) -> NavCard {
    let label = element
        .get_attribute("aria-label")
        .or_else(|| element.text_content())
        .unwrap_or_default();
    NavCard {
        label: label.trim().to_string(),
        target: element.get_attribute(target_attribute),
    }
}

/// Reads a JSON override from the container's `data-nav-config`, falling
/// back to the defaults when there is none or it doesn't parse.
pub fn page_config(document: &Document) -> NavConfig {
    let defaults = NavConfig::default();
    let raw = by_selector(document, &defaults.selectors.container)
        .and_then(|container| container.get_attribute("data-nav-config"));

    match raw {
        Some(raw) => NavConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring data-nav-config: {}", e);
            defaults
        }),
        None => defaults,
    }
}

/// Finds the card nav markup and wires it up.
///
/// Fails with [`NavError::MissingElement`] before attaching anything when the
/// page has no card nav.
pub fn mount(config: &NavConfig) -> Result<CardNavHandle, NavError> {
    let window = web_sys::window().ok_or_else(|| NavError::Js("no window".to_string()))?;
    let document = window.document().ok_or_else(|| NavError::Js("no document".to_string()))?;
    let selectors = &config.selectors;
    let elements = DomElements::find(&document, selectors)?;

    let cards: Vec<NavCard> = elements
        .cards
        .iter()
        .map(|card| card_of(card, &selectors.target_attribute))
        .collect();
    let has_theme_slot = elements.theme_slot.is_some();
    let host = DomHost::new(window.clone(), document.clone(), &elements, selectors);

    let timers = Timers::default();
    let menu = Rc::new_cyclic(|weak: &Weak<RefCell<DomMenu>>| {
        let weak = weak.clone();
        let timers = timers.clone();
        // GSAP can report completion from inside `reverse()`, while the menu
        // is still borrowed, so completion always goes through a fresh task.
        let engine = GsapEngine::detect(&elements, move || {
            let menu = weak.clone();
            timers.after(0, move || {
                with_menu(&menu, |menu| menu.finish_collapse());
            });
        })
        .map(|engine| Box::new(engine) as Box<dyn TimelineEngine>);

        let animator = resolve_animator(engine, config);
        RefCell::new(ExpandableNavMenu::new(host, cards, has_theme_slot, config, animator))
    });

    let scheduler = {
        let menu = Rc::downgrade(&menu);
        TimeoutScheduler::new(timers, move |step| {
            with_menu(&menu, |menu| menu.run(step));
        })
    };

    let mut listeners = Vec::new();
    let toggle: &EventTarget = &elements.toggle;
    listeners.extend(listen(toggle, "click", &menu, &scheduler, |menu, _| menu.toggle()));
    listeners.extend(listen(toggle, "keypress", &menu, &scheduler, |menu, event| {
        key_of(event)
            .map(|key| menu.handle_toggle_key(&key))
            .unwrap_or_default()
    }));
    listeners.extend(listen(&document, "keydown", &menu, &scheduler, |menu, event| {
        key_of(event)
            .map(|key| menu.handle_document_key(&key))
            .unwrap_or_default()
    }));

    if let Some(backdrop) = &elements.backdrop {
        listeners.extend(listen(backdrop, "click", &menu, &scheduler, |menu, _| {
            menu.activate_backdrop()
        }));
    }

    for link in &elements.links {
        listeners.extend(listen(link, "click", &menu, &scheduler, |menu, _| menu.activate_link()));
    }

    for (index, card) in elements.cards.iter().enumerate() {
        let link_selector = selectors.link.clone();
        let card_node: Node = card.clone().into();
        listeners.extend(listen(card, "click", &menu, &scheduler, move |menu, event| {
            let clicked = event.target().and_then(|target| target.dyn_into::<Element>().ok());
            let via_link = click_lands_on_link(
                std::iter::successors(clicked, |element| element.parent_element()),
                |element| element.is_same_node(Some(&card_node)),
                |element| element.matches(&link_selector).unwrap_or(false),
            );
            menu.activate_card(index, via_link)
        }));
    }

    listeners.extend(listen(&window, "resize", &menu, &scheduler, |menu, _| {
        menu.handle_resize();
        Schedule::new()
    }));

    log::info!(
        "Card nav mounted with {} cards ({})",
        elements.cards.len(),
        menu.borrow().animator_name()
    );

    Ok(CardNavHandle { _menu: menu, _listeners: listeners })
}

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::Selectors;
use crate::nav::{Item, NavError, NavHost, Part, Pose};

/// Looks up `selector` under `root` and casts it to `T`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Result<T, NavError> {
    root.query_selector(selector)
        .map_err(|e| NavError::Js(format!("{:?}", e)))?
        .ok_or_else(|| NavError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| NavError::MissingElement(format!("{} (unexpected element type)", selector)))
}

/// Every element under `root` matching `selector` that is an `HtmlElement`.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, NavError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|e| NavError::Js(format!("{:?}", e)))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn by_selector(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// The card nav markup as found in the page.
pub struct DomElements {
    pub panel: HtmlElement,
    pub toggle: HtmlElement,
    pub backdrop: Option<Element>,
    pub cards: Vec<HtmlElement>,
    pub links: Vec<HtmlElement>,
    pub theme_slot: Option<HtmlElement>,
}

impl DomElements {
    /// Finds the container and everything inside it. The toggle and backdrop
    /// may live anywhere in the document.
    pub fn find(document: &Document, selectors: &Selectors) -> Result<Self, NavError> {
        let container = by_selector(document, &selectors.container)
            .ok_or_else(|| NavError::MissingElement(selectors.container.clone()))?;
        let panel = query::<HtmlElement>(&container, &selectors.panel)?;
        let toggle = by_selector(document, &selectors.toggle)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| NavError::MissingElement(selectors.toggle.clone()))?;
        let backdrop = by_selector(document, &selectors.backdrop);
        let cards = query_all(&container, &selectors.card)?;
        let links = query_all(&container, &selectors.link)?;
        let theme_slot = query::<HtmlElement>(&container, &selectors.theme_slot).ok();

        Ok(Self { panel, toggle, backdrop, cards, links, theme_slot })
    }
}

pub struct DomHost {
    window: Window,
    document: Document,
    toggle: Element,
    panel: HtmlElement,
    backdrop: Option<Element>,
    cards: Vec<HtmlElement>,
    theme_slot: Option<HtmlElement>,
    open_class: String,
    active_class: String,
}

impl DomHost {
    pub fn new(window: Window, document: Document, elements: &DomElements, selectors: &Selectors) -> Self {
        Self {
            window,
            document,
            toggle: elements.toggle.clone().into(),
            panel: elements.panel.clone(),
            backdrop: elements.backdrop.clone(),
            cards: elements.cards.clone(),
            theme_slot: elements.theme_slot.clone(),
            open_class: selectors.open_class.clone(),
            active_class: selectors.active_class.clone(),
        }
    }

    fn item(&self, item: Item) -> Option<&HtmlElement> {
        match item {
            Item::Card(i) => self.cards.get(i),
            Item::ThemeSlot => self.theme_slot.as_ref(),
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

impl NavHost for DomHost {
    fn set_class(&mut self, part: Part, on: bool) {
        let panel: &Element = &self.panel;
        let (element, class) = match part {
            Part::Toggle => (Some(&self.toggle), &self.open_class),
            Part::Panel => (Some(panel), &self.open_class),
            Part::Backdrop => (self.backdrop.as_ref(), &self.active_class),
        };
        let Some(element) = element else { return };

        if let Err(e) = element.class_list().toggle_with_force(class, on) {
            log::warn!("Failed to toggle class {} on {:?}: {:?}", class, part, e);
        }
    }

    fn set_panel_height(&mut self, height: f64) {
        set_style(&self.panel, "height", &format!("{}px", height));
    }

    fn set_item_pose(&mut self, item: Item, pose: Pose) {
        if let Some(element) = self.item(item) {
            set_style(element, "opacity", &pose.opacity.to_string());
            set_style(element, "transform", &format!("translateY({}px)", pose.offset_y));
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            set_style(&body, "overflow", if locked { "hidden" } else { "" });
        }
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn anchor_top(&self, target: &str) -> Option<f64> {
        // An href like "#" or a full URL is not a valid selector; no target then.
        self.document
            .query_selector(target)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_top() as f64)
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

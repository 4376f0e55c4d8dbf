use std::collections::HashMap;

use site_nav::config::NavConfig;
use site_nav::nav::{
    resolve_animator, ExpandableNavMenu, Item, LayoutMetrics, ManualScheduler, MenuState, NavCard,
    NavHost, Part, Pose, Scheduler,
};

/// Page stand-in keeping only the latest value of everything the menu writes.
#[derive(Default)]
struct Page {
    viewport: f64,
    anchors: HashMap<String, f64>,
    classes: HashMap<&'static str, bool>,
    panel_height: Option<f64>,
    poses: HashMap<String, Pose>,
    scroll_locked: bool,
    scrolled_to: Vec<f64>,
    writes: usize,
}

impl Page {
    fn new(viewport: f64) -> Self {
        Self { viewport, ..Default::default() }
    }

    fn class(&self, part: Part) -> bool {
        self.classes.get(part_name(part)).copied().unwrap_or(false)
    }
}

fn part_name(part: Part) -> &'static str {
    match part {
        Part::Toggle => "toggle",
        Part::Panel => "panel",
        Part::Backdrop => "backdrop",
    }
}

impl NavHost for Page {
    fn set_class(&mut self, part: Part, on: bool) {
        self.writes += 1;
        self.classes.insert(part_name(part), on);
    }

    fn set_panel_height(&mut self, height: f64) {
        self.writes += 1;
        self.panel_height = Some(height);
    }

    fn set_item_pose(&mut self, item: Item, pose: Pose) {
        self.writes += 1;
        self.poses.insert(format!("{:?}", item), pose);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.writes += 1;
        self.scroll_locked = locked;
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn anchor_top(&self, target: &str) -> Option<f64> {
        self.anchors.get(target).copied()
    }

    fn scroll_to(&mut self, top: f64) {
        self.writes += 1;
        self.scrolled_to.push(top);
    }
}

fn site_cards() -> Vec<NavCard> {
    ["#home", "#about", "#products", "#gallery", "#contact"]
        .iter()
        .map(|target| NavCard::new(target.trim_start_matches('#'), *target))
        .collect()
}

fn menu(page: Page) -> ExpandableNavMenu<Page> {
    let config = NavConfig::default();
    let animator = resolve_animator(None, &config);
    ExpandableNavMenu::new(page, site_cards(), false, &config, animator)
}

fn settle(menu: &mut ExpandableNavMenu<Page>, scheduler: &mut ManualScheduler) {
    for step in scheduler.advance(10_000) {
        menu.run(step);
    }
}

#[test]
fn expanded_height_scenarios() {
    let metrics = LayoutMetrics::default();
    assert_eq!(metrics.expanded_height(5, false, 800.0), 498.0);
    assert_eq!(metrics.expanded_height(5, false, 400.0), 368.0);

    assert_eq!(menu(Page::new(800.0)).expanded_height(), 498.0);
    assert_eq!(menu(Page::new(400.0)).expanded_height(), 368.0);
}

#[test]
fn open_then_close_restores_the_collapsed_page() {
    let mut scheduler = ManualScheduler::new();
    let mut menu = menu(Page::new(800.0));

    let schedule = menu.toggle();
    scheduler.submit(schedule);
    settle(&mut menu, &mut scheduler);
    assert_eq!(menu.host().panel_height, Some(498.0));
    assert_eq!(menu.host().poses.get("Card(4)"), Some(&Pose::SHOWN));

    let schedule = menu.toggle();
    scheduler.submit(schedule);
    settle(&mut menu, &mut scheduler);

    let page = menu.host();
    assert_eq!(menu.state(), MenuState::Collapsed);
    assert_eq!(page.panel_height, Some(60.0));
    assert!(!page.scroll_locked);
    assert!(!page.class(Part::Panel));
    assert!(!page.class(Part::Toggle));
    assert!(!page.class(Part::Backdrop));
}

#[test]
fn card_navigation_to_a_missing_section_only_collapses() {
    let mut scheduler = ManualScheduler::new();
    let mut page = Page::new(800.0);
    page.anchors.insert("#about".to_string(), 900.0);
    let mut menu = menu(page);

    let schedule = menu.toggle();
    scheduler.submit(schedule);
    settle(&mut menu, &mut scheduler);

    let schedule = menu.activate_card(3, false);
    scheduler.submit(schedule);
    settle(&mut menu, &mut scheduler);
    assert_eq!(menu.state(), MenuState::Collapsed);
    assert!(menu.host().scrolled_to.is_empty());

    let schedule = menu.activate_card(1, false);
    scheduler.submit(schedule);
    settle(&mut menu, &mut scheduler);
    assert_eq!(menu.host().scrolled_to, vec![820.0]);
}

#[test]
fn backdrop_on_a_collapsed_menu_writes_nothing() {
    let mut menu = menu(Page::new(800.0));
    let writes = menu.host().writes;

    assert!(menu.activate_backdrop().is_empty());
    assert_eq!(menu.state(), MenuState::Collapsed);
    assert_eq!(menu.host().writes, writes);
}

#[test]
fn partial_config_changes_the_layout() {
    let config = NavConfig::from_json(r#"{"layout": {"cardHeight": 50, "gap": 10}}"#).unwrap();
    let animator = resolve_animator(None, &config);
    let menu = ExpandableNavMenu::new(Page::new(2_000.0), site_cards(), true, &config, animator);

    // 60 + 5*50 + 4*10 + 16 + 90
    assert_eq!(menu.expanded_height(), 456.0);
}

#[test]
fn cards_are_kept_in_page_order() {
    let mut cards = site_cards();
    cards.push(NavCard { label: "Blog".to_string(), target: None });
    let config = NavConfig::default();
    let animator = resolve_animator(None, &config);
    let mut menu = ExpandableNavMenu::new(Page::new(800.0), cards, false, &config, animator);

    let labels: Vec<_> = menu.cards().iter().map(|card| card.label.as_str()).collect();
    assert_eq!(labels, ["home", "about", "products", "gallery", "contact", "Blog"]);
    assert_eq!(menu.cards()[2].target.as_deref(), Some("#products"));

    // The targetless card is listed but not clickable.
    let last = menu.cards().len() - 1;
    assert!(menu.activate_card(last, false).is_empty());
    assert_eq!(menu.state(), MenuState::Collapsed);
}

use crate::config::{NavConfig, Timing};

use super::animator::{Frame, PanelAnimator};
use super::host::{NavHost, Part, Pose};
use super::layout::LayoutMetrics;
use super::schedule::{Schedule, Step};
use super::state::MenuState;

/// One destination in the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NavCard {
    pub label: String,
    /// Selector of the section the card scrolls to.
    pub target: Option<String>,
}

impl NavCard {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self { label: label.into(), target: Some(target.into()) }
    }
}

/// Whether a click inside a card landed on one of its links.
///
/// `path` runs from the clicked element outward; the walk stops at the card,
/// so links wrapping the whole nav don't count.
pub fn click_lands_on_link<T>(
    path: impl IntoIterator<Item = T>,
    is_card: impl Fn(&T) -> bool,
    is_link: impl Fn(&T) -> bool,
) -> bool {
    for node in path {
        if is_link(&node) {
            return true;
        }
        if is_card(&node) {
            return false;
        }
    }
    false
}

/// Card-style navigation: a top bar that expands into a list of cards.
///
/// Every operation that can kick off deferred work returns the [`Schedule`]
/// for it; the caller hands that to a [`Scheduler`](super::Scheduler) and
/// feeds due steps back through [`ExpandableNavMenu::run`].
pub struct ExpandableNavMenu<H> {
    host: H,
    state: MenuState,
    cards: Vec<NavCard>,
    has_theme_slot: bool,
    layout: LayoutMetrics,
    timing: Timing,
    animator: Box<dyn PanelAnimator>,
    // Bumped on every transition so steps from a superseded one are dropped.
    generation: u64,
}

impl<H: NavHost> ExpandableNavMenu<H> {
    pub fn new(
        host: H,
        cards: Vec<NavCard>,
        has_theme_slot: bool,
        config: &NavConfig,
        animator: Box<dyn PanelAnimator>,
    ) -> Self {
        let mut menu = Self {
            host,
            state: MenuState::Collapsed,
            cards,
            has_theme_slot,
            layout: config.layout.clone(),
            timing: config.timing.clone(),
            animator,
            generation: 0,
        };

        let frame = menu.frame();
        menu.animator.prepare(&mut menu.host, &frame);
        log::debug!(
            "Card nav ready: {} cards, theme slot: {}, animator: {}",
            menu.cards.len(),
            menu.has_theme_slot,
            menu.animator.name()
        );
        menu
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn cards(&self) -> &[NavCard] {
        &self.cards
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn animator_name(&self) -> &'static str {
        self.animator.name()
    }

    /// Height the panel opens to in the current viewport.
    pub fn expanded_height(&self) -> f64 {
        self.layout
            .expanded_height(self.cards.len(), self.has_theme_slot, self.host.viewport_height())
    }

    fn frame(&self) -> Frame {
        Frame {
            generation: self.generation,
            card_count: self.cards.len(),
            has_theme_slot: self.has_theme_slot,
            expanded_height: self.expanded_height(),
            collapsed_height: self.layout.collapsed_height(),
        }
    }

    pub fn toggle(&mut self) -> Schedule {
        self.generation += 1;
        self.state = self.state.flipped();

        let open = self.state.is_expanded();
        self.host.set_class(Part::Toggle, open);
        if open {
            // Dropped only once the collapse has finished animating.
            self.host.set_class(Part::Panel, true);
        }
        self.host.set_class(Part::Backdrop, open);
        self.host.set_scroll_lock(open);

        let frame = self.frame();
        log::debug!("Card nav {:?} (generation {})", self.state, self.generation);
        if open {
            self.animator.expand(&mut self.host, &frame)
        } else {
            self.animator.collapse(&mut self.host, &frame)
        }
    }

    /// Collapses if open; otherwise touches nothing.
    pub fn dismiss(&mut self) -> Schedule {
        if self.state.is_expanded() {
            self.toggle()
        } else {
            Schedule::new()
        }
    }

    pub fn activate_backdrop(&mut self) -> Schedule {
        self.dismiss()
    }

    /// A link inside the panel was followed. The browser handles the
    /// navigation itself.
    pub fn activate_link(&mut self) -> Schedule {
        self.dismiss()
    }

    /// A card was clicked. `via_link` is set when the click landed on one of
    /// the card's own links, which navigate on their own.
    pub fn activate_card(&mut self, index: usize, via_link: bool) -> Schedule {
        if via_link {
            return Schedule::new();
        }
        let Some(card) = self.cards.get(index) else {
            return Schedule::new();
        };
        let Some(target) = card.target.clone() else {
            return Schedule::new();
        };
        log::debug!("Card {} -> {}", card.label, target);

        // The scroll doesn't wait for the collapse to finish, only for it to start.
        let mut schedule = self.dismiss();
        schedule.push(self.timing.card_scroll_delay_ms, Step::ScrollToAnchor { target });
        schedule
    }

    /// Key pressed while the toggle control has focus.
    pub fn handle_toggle_key(&mut self, key: &str) -> Schedule {
        match key {
            "Enter" => self.toggle(),
            _ => Schedule::new(),
        }
    }

    /// Key pressed anywhere in the document.
    pub fn handle_document_key(&mut self, key: &str) -> Schedule {
        match key {
            "Escape" | "Esc" => self.dismiss(),
            _ => Schedule::new(),
        }
    }

    pub fn handle_resize(&mut self) {
        if self.state.is_expanded() {
            let height = self.expanded_height();
            self.animator.resize(&mut self.host, height);
        }
    }

    /// Runs a step that has come due.
    pub fn run(&mut self, step: Step) {
        match step {
            Step::Reveal { item, generation } => {
                if generation == self.generation && self.state.is_expanded() {
                    self.host.set_item_pose(item, Pose::SHOWN);
                }
            }
            Step::ReleasePanel { generation } => {
                if generation == self.generation && !self.state.is_expanded() {
                    self.host.set_class(Part::Panel, false);
                }
            }
            Step::ScrollToAnchor { target } => match self.host.anchor_top(&target) {
                Some(top) => self.host.scroll_to(top - self.timing.header_offset),
                None => log::debug!("No scroll target for {}", target),
            },
        }
    }

    /// The timeline engine finished reversing.
    pub fn finish_collapse(&mut self) {
        if !self.state.is_expanded() {
            self.host.set_class(Part::Panel, false);
        }
    }
}

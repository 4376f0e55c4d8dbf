//! The two ways the panel can open and close.
//!
//! A page that ships an animation engine gets [`TimelineAnimator`]: one
//! reversible timeline covering the height tween and the staggered item
//! entrances. Without one, [`FallbackAnimator`] writes the end styles directly
//! and leaves the motion to CSS transitions, staggering items with scheduled
//! steps.

use crate::config::{NavConfig, TimelineTuning, Timing};

use super::host::{Item, NavHost, Pose};
use super::schedule::{Schedule, Step};

/// The transition an animator is asked to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    pub card_count: usize,
    pub has_theme_slot: bool,
    pub expanded_height: f64,
    pub collapsed_height: f64,
}

impl Frame {
    /// Items in entrance order: cards first, then the theme slot.
    pub fn items(&self) -> impl Iterator<Item = Item> {
        let slot = self.has_theme_slot.then_some(Item::ThemeSlot);
        (0..self.card_count).map(Item::Card).chain(slot)
    }
}

pub trait PanelAnimator {
    fn name(&self) -> &'static str;

    /// Puts the panel in its collapsed pose. Called once, at construction.
    fn prepare(&mut self, host: &mut dyn NavHost, frame: &Frame);

    fn expand(&mut self, host: &mut dyn NavHost, frame: &Frame) -> Schedule;

    fn collapse(&mut self, host: &mut dyn NavHost, frame: &Frame) -> Schedule;

    /// Re-applies the expanded height without replaying the entrance.
    fn resize(&mut self, host: &mut dyn NavHost, height: f64);
}

/// Everything a timeline engine needs to build the open/close timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePlan {
    pub collapsed_height: f64,
    pub expanded_height: f64,
    pub hidden_offset: f64,
    pub card_count: usize,
    pub has_theme_slot: bool,
    pub tuning: TimelineTuning,
}

/// A page-provided tweening engine able to play a timeline forward and
/// reverse it in place.
///
/// The engine reports a finished reverse back to the menu on its own
/// (see `ExpandableNavMenu::finish_collapse`).
#[cfg_attr(test, mockall::automock)]
pub trait TimelineEngine {
    /// Sets the collapsed pose and builds the paused timeline.
    fn build(&mut self, plan: &TimelinePlan);

    /// Plays toward the expanded pose, re-targeting the height tween when
    /// `expanded_height` moved since the last build.
    fn play(&mut self, expanded_height: f64);

    fn reverse(&mut self);

    /// Jumps the panel height without touching the timeline.
    fn set_panel_height(&mut self, height: f64);
}

pub struct TimelineAnimator {
    engine: Box<dyn TimelineEngine>,
    tuning: TimelineTuning,
    hidden_offset: f64,
}

impl TimelineAnimator {
    pub fn new(engine: Box<dyn TimelineEngine>, tuning: TimelineTuning, hidden_offset: f64) -> Self {
        Self { engine, tuning, hidden_offset }
    }
}

impl PanelAnimator for TimelineAnimator {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn prepare(&mut self, _host: &mut dyn NavHost, frame: &Frame) {
        self.engine.build(&TimelinePlan {
            collapsed_height: frame.collapsed_height,
            expanded_height: frame.expanded_height,
            hidden_offset: self.hidden_offset,
            card_count: frame.card_count,
            has_theme_slot: frame.has_theme_slot,
            tuning: self.tuning.clone(),
        });
    }

    fn expand(&mut self, _host: &mut dyn NavHost, frame: &Frame) -> Schedule {
        self.engine.play(frame.expanded_height);
        Schedule::new()
    }

    fn collapse(&mut self, _host: &mut dyn NavHost, _frame: &Frame) -> Schedule {
        self.engine.reverse();
        Schedule::new()
    }

    fn resize(&mut self, _host: &mut dyn NavHost, height: f64) {
        self.engine.set_panel_height(height);
    }
}

pub struct FallbackAnimator {
    timing: Timing,
}

impl FallbackAnimator {
    pub fn new(timing: Timing) -> Self {
        Self { timing }
    }

    fn hide_all(&self, host: &mut dyn NavHost, frame: &Frame) {
        for item in frame.items() {
            host.set_item_pose(item, Pose::hidden(self.timing.hidden_offset));
        }
    }
}

impl PanelAnimator for FallbackAnimator {
    fn name(&self) -> &'static str {
        "css-fallback"
    }

    fn prepare(&mut self, host: &mut dyn NavHost, frame: &Frame) {
        host.set_panel_height(frame.collapsed_height);
        self.hide_all(host, frame);
    }

    fn expand(&mut self, host: &mut dyn NavHost, frame: &Frame) -> Schedule {
        host.set_panel_height(frame.expanded_height);

        let mut schedule = Schedule::new();
        for (i, item) in frame.items().enumerate() {
            let delay = self.timing.stagger_ms.saturating_mul(i as u32);
            schedule.push(delay, Step::Reveal { item, generation: frame.generation });
        }
        schedule
    }

    fn collapse(&mut self, host: &mut dyn NavHost, frame: &Frame) -> Schedule {
        host.set_panel_height(frame.collapsed_height);
        self.hide_all(host, frame);

        let mut schedule = Schedule::new();
        schedule.push(
            self.timing.fallback_close_ms,
            Step::ReleasePanel { generation: frame.generation },
        );
        schedule
    }

    fn resize(&mut self, host: &mut dyn NavHost, height: f64) {
        host.set_panel_height(height);
    }
}

/// Picks the strategy once, up front: the timeline when the page offered an
/// engine, CSS transitions otherwise.
pub fn resolve_animator(
    engine: Option<Box<dyn TimelineEngine>>,
    config: &NavConfig,
) -> Box<dyn PanelAnimator> {
    match engine {
        Some(engine) => Box::new(TimelineAnimator::new(
            engine,
            config.timeline.clone(),
            config.timing.hidden_offset,
        )),
        None => {
            log::warn!("GSAP not loaded, using CSS fallback");
            Box::new(FallbackAnimator::new(config.timing.clone()))
        }
    }
}

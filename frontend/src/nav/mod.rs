//! Card-style navigation menu, independent of the browser.
//!
//! Everything in here talks to the page through [`NavHost`] and to time
//! through [`Scheduler`], so the whole state machine runs under a simulated
//! clock in tests. The `web` module supplies the browser-side pieces.

pub mod animator;
pub mod error;
pub mod host;
pub mod layout;
pub mod menu;
pub mod schedule;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use animator::{
    resolve_animator, FallbackAnimator, Frame, PanelAnimator, TimelineAnimator, TimelineEngine,
    TimelinePlan,
};
pub use error::NavError;
pub use host::{Item, NavHost, Part, Pose};
pub use layout::LayoutMetrics;
pub use menu::{click_lands_on_link, ExpandableNavMenu, NavCard};
pub use schedule::{ManualScheduler, Schedule, Scheduled, Scheduler, Step};
pub use state::MenuState;

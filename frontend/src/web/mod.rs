//! Browser side of the card nav: `web-sys` host, GSAP binding, timers and
//! listener wiring.

pub mod dom;
pub mod gsap;
pub mod listener;
pub mod mount;
pub mod timers;

pub use mount::{mount, page_config, CardNavHandle};

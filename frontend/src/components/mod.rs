pub mod card_nav;

pub use card_nav::{CardEntry, CardLink, CardNav};

/// Elements whose state class follows the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Toggle,
    Panel,
    Backdrop,
}

/// Something inside the panel that slides in when the menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Card(usize),
    ThemeSlot,
}

/// Vertical offset and opacity of a panel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset_y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose { offset_y: 0.0, opacity: 1.0 };

    pub fn hidden(offset_y: f64) -> Self {
        Self { offset_y, opacity: 0.0 }
    }
}

/// The page the menu lives in.
///
/// Every write is fire-and-forget: an implementation that can't perform one
/// (an element the page doesn't have, a rejected DOM call) logs and carries
/// on, so the menu never has to handle a failure mid-transition.
pub trait NavHost {
    fn set_class(&mut self, part: Part, on: bool);

    fn set_panel_height(&mut self, height: f64);

    fn set_item_pose(&mut self, item: Item, pose: Pose);

    fn set_scroll_lock(&mut self, locked: bool);

    fn viewport_height(&self) -> f64;

    /// Document offset of the element a card points at, if there is one.
    fn anchor_top(&self, target: &str) -> Option<f64>;

    /// Smooth-scroll the window so its top edge lands at `top`.
    fn scroll_to(&mut self, top: f64);
}

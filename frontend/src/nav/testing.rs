use std::collections::HashMap;

use super::host::{Item, NavHost, Part, Pose};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Class(Part, bool),
    PanelHeight(f64),
    Pose(Item, Pose),
    ScrollLock(bool),
    ScrollTo(f64),
}

/// In-memory page that records every write in order.
pub struct RecordingHost {
    pub viewport: f64,
    pub anchors: HashMap<String, f64>,
    pub calls: Vec<Call>,
}

impl RecordingHost {
    pub fn new(viewport: f64) -> Self {
        Self { viewport, anchors: HashMap::new(), calls: Vec::new() }
    }

    pub fn with_anchor(mut self, target: &str, top: f64) -> Self {
        self.anchors.insert(target.to_string(), top);
        self
    }

    pub fn class(&self, part: Part) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Class(p, on) if *p == part => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn panel_height(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::PanelHeight(h) => Some(*h),
            _ => None,
        })
    }

    pub fn pose(&self, item: Item) -> Option<Pose> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Pose(i, pose) if *i == item => Some(*pose),
            _ => None,
        })
    }

    pub fn scroll_locked(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::ScrollLock(locked) => Some(*locked),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::ScrollTo(top) => Some(*top),
                _ => None,
            })
            .collect()
    }
}

impl NavHost for RecordingHost {
    fn set_class(&mut self, part: Part, on: bool) {
        self.calls.push(Call::Class(part, on));
    }

    fn set_panel_height(&mut self, height: f64) {
        self.calls.push(Call::PanelHeight(height));
    }

    fn set_item_pose(&mut self, item: Item, pose: Pose) {
        self.calls.push(Call::Pose(item, pose));
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.calls.push(Call::ScrollLock(locked));
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn anchor_top(&self, target: &str) -> Option<f64> {
        self.anchors.get(target).copied()
    }

    fn scroll_to(&mut self, top: f64) {
        self.calls.push(Call::ScrollTo(top));
    }
}

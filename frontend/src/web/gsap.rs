use js_sys::{Array, Function, Reflect, JSON};
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::nav::{TimelineEngine, TimelinePlan};

use super::dom::DomElements;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &JsValue) -> Timeline;

    type Timeline;

    #[wasm_bindgen(method)]
    fn to(this: &Timeline, targets: &JsValue, vars: &JsValue, position: &JsValue) -> Timeline;

    #[wasm_bindgen(method)]
    fn play(this: &Timeline, from: &JsValue) -> Timeline;

    #[wasm_bindgen(method)]
    fn reverse(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method, js_name = eventCallback)]
    fn event_callback(this: &Timeline, kind: &str, callback: &Function) -> Timeline;

    #[wasm_bindgen(method, js_name = isActive)]
    fn is_active(this: &Timeline) -> bool;

    #[wasm_bindgen(method)]
    fn kill(this: &Timeline);
}

/// Whether the page loaded GSAP onto the global object.
pub fn is_available() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("gsap"))
        .map(|gsap| !gsap.is_undefined() && !gsap.is_null())
        .unwrap_or(false)
}

fn vars(value: serde_json::Value) -> JsValue {
    JSON::parse(&value.to_string()).unwrap_or_else(|e| {
        log::warn!("Failed to build tween vars: {:?}", e);
        JsValue::UNDEFINED
    })
}

/// Timeline engine backed by a page-provided GSAP.
pub struct GsapEngine {
    panel: JsValue,
    cards: JsValue,
    theme_slot: Option<JsValue>,
    plan: Option<TimelinePlan>,
    timeline: Option<Timeline>,
    on_reverse_complete: Closure<dyn FnMut()>,
}

impl GsapEngine {
    /// `None` when GSAP isn't on the page.
    pub fn detect<F>(elements: &DomElements, on_reverse_complete: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        if !is_available() {
            return None;
        }

        Some(Self {
            panel: elements.panel.clone().into(),
            cards: elements.cards.iter().collect::<Array>().into(),
            theme_slot: elements.theme_slot.clone().map(JsValue::from),
            plan: None,
            timeline: None,
            on_reverse_complete: Closure::<dyn FnMut()>::new(on_reverse_complete),
        })
    }

    fn assemble(&self, plan: &TimelinePlan) -> Timeline {
        let tuning = &plan.tuning;
        let timeline = gsap_timeline(&vars(json!({ "paused": true })));

        timeline.to(
            &self.panel,
            &vars(json!({
                "height": plan.expanded_height,
                "duration": tuning.panel_duration,
                "ease": tuning.ease,
            })),
            &JsValue::UNDEFINED,
        );
        timeline.to(
            &self.cards,
            &vars(json!({
                "y": 0,
                "opacity": 1,
                "duration": tuning.item_duration,
                "ease": tuning.ease,
                "stagger": tuning.stagger,
            })),
            &JsValue::from_str(&format!("-={}", tuning.cards_overlap)),
        );
        if let Some(slot) = &self.theme_slot {
            timeline.to(
                slot,
                &vars(json!({
                    "y": 0,
                    "opacity": 1,
                    "duration": tuning.item_duration,
                    "ease": tuning.ease,
                })),
                &JsValue::from_str(&format!("-={}", tuning.slot_overlap)),
            );
        }
        timeline.event_callback("onReverseComplete", self.on_reverse_complete.as_ref().unchecked_ref());
        timeline
    }
}

impl TimelineEngine for GsapEngine {
    fn build(&mut self, plan: &TimelinePlan) {
        gsap_set(&self.panel, &vars(json!({ "height": plan.collapsed_height, "overflow": "hidden" })));
        let hidden = vars(json!({ "y": plan.hidden_offset, "opacity": 0 }));
        gsap_set(&self.cards, &hidden);
        if let Some(slot) = &self.theme_slot {
            gsap_set(slot, &hidden);
        }

        if let Some(old) = self.timeline.take() {
            old.kill();
        }
        self.timeline = Some(self.assemble(plan));
        self.plan = Some(plan.clone());
    }

    fn play(&mut self, expanded_height: f64) {
        let Some(timeline) = &self.timeline else { return };

        if timeline.is_active() {
            // Mid-reverse: turn around from where it is.
            timeline.play(&JsValue::UNDEFINED);
            return;
        }

        let stale = self
            .plan
            .as_ref()
            .filter(|plan| plan.expanded_height != expanded_height)
            .cloned();
        if let Some(mut plan) = stale {
            plan.expanded_height = expanded_height;
            timeline.kill();
            let rebuilt = self.assemble(&plan);
            self.plan = Some(plan);
            self.timeline = Some(rebuilt);
        }

        if let Some(timeline) = &self.timeline {
            timeline.play(&JsValue::from_f64(0.0));
        }
    }

    fn reverse(&mut self) {
        if let Some(timeline) = &self.timeline {
            timeline.reverse();
        }
    }

    fn set_panel_height(&mut self, height: f64) {
        gsap_set(&self.panel, &vars(json!({ "height": height })));
    }
}

impl Drop for GsapEngine {
    fn drop(&mut self) {
        if let Some(timeline) = self.timeline.take() {
            timeline.kill();
        }
    }
}

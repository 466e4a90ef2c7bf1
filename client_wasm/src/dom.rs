//! DOM lookups and the score counter

use game_core::ScoreSink;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has the wrong type")))
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    element_by_id::<HtmlCanvasElement>(document, id)
}

/// Writes the score into an element's text
pub struct ElementScore {
    element: HtmlElement,
}

impl ElementScore {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ScoreSink for ElementScore {
    fn set_score(&mut self, score: u32) {
        self.element.set_text_content(Some(&score.to_string()));
    }
}

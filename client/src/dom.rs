use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

use sketchpad_shared::{to_surface_point, Point};

pub const CANVAS_ID: &str = "drawingCanvas";
pub const CLEAR_BUTTON_ID: &str = "clearCanvas";
pub const DRAWINGS_LIST_ID: &str = "drawings";
pub const COLOR_OPTION_SELECTOR: &str = ".color-option";
pub const TOOL_OPTION_SELECTOR: &str = ".tool-option";
pub const DRAWING_OPTION_SELECTOR: &str = ".drawing-option";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Marks `active` as the pressed option of its group.
pub fn set_active_option(options: &[Element], active: &Element) {
    for option in options {
        set_tool_button(option, option == active);
    }
}

pub fn set_tool_button(element: &Element, active: bool) {
    let pressed = if active { "true" } else { "false" };
    let _ = element.set_attribute("aria-pressed", pressed);
    let _ = element.class_list().toggle_with_force("active", active);
}

pub fn event_to_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    to_surface_point(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

pub fn debug_enabled(window: &web_sys::Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1") || search.contains("debug=true")
}

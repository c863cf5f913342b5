use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use sketchpad_shared::{Color, ColorSource, PaletteSelector, ToolSelector, ToolSource};

use crate::dom::{query_all, set_active_option, COLOR_OPTION_SELECTOR, TOOL_OPTION_SELECTOR};

/// Wires every `.color-option[data-color]` swatch to `palette`.
pub fn bind_palette(document: &Document, palette: &PaletteSelector) -> Result<(), JsValue> {
    let options = Rc::new(query_all(document, COLOR_OPTION_SELECTOR));
    log::debug!("Found {} color options", options.len());
    let current = palette.active_color();
    for option in options.iter() {
        let is_current = option.get_attribute("data-color").map(Color::new) == Some(current.clone());
        if is_current {
            set_active_option(&options, option);
        }
        let palette = palette.clone();
        let options_cb = options.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(option) = option_from_event(&event, "data-color") else {
                return;
            };
            let Some(value) = option.get_attribute("data-color") else {
                return;
            };
            palette.select(Color::new(value));
            set_active_option(&options_cb, &option);
        });
        option.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

/// Wires every `.tool-option[data-tool]` button to `tools`.
pub fn bind_tools(document: &Document, tools: &ToolSelector) -> Result<(), JsValue> {
    let options = Rc::new(query_all(document, TOOL_OPTION_SELECTOR));
    let current = tools.active_tool();
    for option in options.iter() {
        if option.get_attribute("data-tool").as_deref() == Some(current.as_str()) {
            set_active_option(&options, option);
        }
        let tools = tools.clone();
        let options_cb = options.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(option) = option_from_event(&event, "data-tool") else {
                return;
            };
            let Some(name) = option.get_attribute("data-tool") else {
                return;
            };
            match tools.select_named(&name) {
                Ok(_) => set_active_option(&options_cb, &option),
                Err(error) => log::warn!("Ignoring tool option: {error}"),
            }
        });
        option.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

/// Walks up from the click target to the element carrying `attribute`, so
/// clicks on icons nested inside a button still count.
pub fn option_from_event(event: &Event, attribute: &str) -> Option<Element> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if element.has_attribute(attribute) {
            return Some(element);
        }
        current = element.parent_element();
    }
    None
}

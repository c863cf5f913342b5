use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlImageElement, Response, Window};

use sketchpad_shared::drawings::MANIFEST_ROUTE;
use sketchpad_shared::{load_image, DrawingManifest, DrawingPreset, ImageSource};

use crate::dom::{get_element, query_all, DRAWINGS_LIST_ID, DRAWING_OPTION_SELECTOR};
use crate::palette::option_from_event;
use crate::state::SharedEngine;

const DRAWING_URL_ATTR: &str = "data-drawing-url";

/// Loads images through `<img>` elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlImageLoader;

impl ImageSource for HtmlImageLoader {
    type Image = HtmlImageElement;

    fn fetch(&self, locator: &str, on_ready: Box<dyn FnOnce(HtmlImageElement)>) {
        let locator = locator.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match load_html_image(&locator).await {
                Ok(image) => on_ready(image),
                Err(error) => log::warn!("Failed to load drawing {locator}: {error:?}"),
            }
        });
    }
}

/// Resolves once `locator` is fetched and decoded.
pub async fn load_html_image(locator: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(locator);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

/// Wires the `.drawing-option` elements already in the page.
pub fn bind_drawing_options(document: &Document, engine: &SharedEngine) -> Result<(), JsValue> {
    for option in query_all(document, DRAWING_OPTION_SELECTOR) {
        bind_drawing_option(&option, engine)?;
    }
    Ok(())
}

pub fn bind_drawing_option(option: &Element, engine: &SharedEngine) -> Result<(), JsValue> {
    let engine = engine.clone();
    let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(url) = option_from_event(&event, DRAWING_URL_ATTR)
            .and_then(|option| option.get_attribute(DRAWING_URL_ATTR))
        else {
            return;
        };
        load_image(&engine, &HtmlImageLoader, &url);
    });
    option.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

pub fn add_drawing_option(
    document: &Document,
    list: &Element,
    preset: &DrawingPreset,
    engine: &SharedEngine,
) -> Result<(), JsValue> {
    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_attribute("class", "drawing-option")?;
    button.set_attribute(DRAWING_URL_ATTR, &preset.url)?;
    button.set_attribute("aria-label", &format!("Load {}", preset.name))?;
    button.set_text_content(Some(&preset.name));
    list.append_child(&button)?;
    bind_drawing_option(&button, engine)
}

pub async fn fetch_manifest(window: &Window) -> Result<DrawingManifest, JsValue> {
    let response: Response = JsFuture::from(window.fetch_with_str(MANIFEST_ROUTE))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "Drawing list request failed with status {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("Drawing list is not text"))?;
    DrawingManifest::from_json(&text).map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Fetches the preset list and adds a button per preset to `#drawings`.
/// Pages without that container skip the request.
pub fn populate_drawings(window: Window, document: Document, engine: SharedEngine) {
    let Ok(list) = get_element::<Element>(&document, DRAWINGS_LIST_ID) else {
        log::debug!("No #{DRAWINGS_LIST_ID} container, skipping preset list");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let manifest = match fetch_manifest(&window).await {
            Ok(manifest) => manifest,
            Err(error) => {
                log::warn!("Could not fetch drawing list: {error:?}");
                return;
            }
        };
        log::info!("Adding {} preset drawings", manifest.drawings.len());
        for preset in &manifest.drawings {
            if let Err(error) = add_drawing_option(&document, &list, preset, &engine) {
                log::warn!("Could not add drawing {}: {error:?}", preset.name);
            }
        }
    });
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlCanvasElement, MouseEvent};

use sketchpad_shared::{
    ClearAction, Color, PaletteSelector, StrokeEngine, ToolMode, ToolSelector, SURFACE_HEIGHT,
    SURFACE_WIDTH,
};

use crate::dom::{debug_enabled, event_to_point, get_element, CANVAS_ID, CLEAR_BUTTON_ID};
use crate::images::{bind_drawing_options, populate_drawings};
use crate::palette::{bind_palette, bind_tools};
use crate::render::CanvasSurface;
use crate::state::SharedEngine;

fn init_logging(window: &web_sys::Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(error) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already set: {error}").into());
    }
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    init_logging(&window);
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        report_start(start_app());
        return Ok(());
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        report_start(start_app());
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn report_start(result: Result<(), JsValue>) {
    if let Err(error) = result {
        log::error!("Sketchpad failed to start: {error:?}");
    }
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, CANVAS_ID)?;
    let surface = CanvasSurface::new(&canvas, SURFACE_WIDTH, SURFACE_HEIGHT)?;
    let palette = PaletteSelector::new(Color::default());
    let tools = ToolSelector::new(ToolMode::Brush);
    let engine: SharedEngine = Rc::new(RefCell::new(StrokeEngine::new(
        surface,
        palette.clone(),
        tools.clone(),
    )));

    bind_pointer(&window, &canvas, &engine)?;
    bind_palette(&document, &palette)?;
    bind_tools(&document, &tools)?;

    match get_element::<HtmlButtonElement>(&document, CLEAR_BUTTON_ID) {
        Ok(clear_button) => {
            let clear_engine = engine.clone();
            let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
                clear_engine.borrow_mut().clear();
            });
            clear_button
                .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
            onclick.forget();
        }
        Err(_) => log::warn!("No #{CLEAR_BUTTON_ID} button, clearing is unavailable"),
    }

    bind_drawing_options(&document, &engine)?;
    populate_drawings(window.clone(), document.clone(), engine);

    log::info!("Sketchpad ready ({SURFACE_WIDTH}x{SURFACE_HEIGHT})");
    Ok(())
}

fn bind_pointer(
    window: &web_sys::Window,
    canvas: &HtmlCanvasElement,
    engine: &SharedEngine,
) -> Result<(), JsValue> {
    {
        let down_engine = engine.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let point = event_to_point(&down_canvas, &event);
            down_engine.borrow_mut().pointer_down(point);
        });
        canvas.add_event_listener_with_callback("mousedown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_engine = engine.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let mut engine = move_engine.borrow_mut();
            if !engine.is_painting() {
                return;
            }
            engine.pointer_move(event_to_point(&move_canvas, &event));
        });
        canvas.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        // Listen on the window so a release outside the canvas still ends
        // the stroke.
        let up_engine = engine.clone();
        let onup = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.button() != 0 {
                return;
            }
            up_engine.borrow_mut().pointer_up();
        });
        window.add_event_listener_with_callback("mouseup", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    Ok(())
}

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use sketchpad_client::{load_html_image, CanvasSurface};
use sketchpad_shared::{ClearAction, Color, Point, Segment, Surface, LINE_WIDTH};

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

// 2x2 opaque red PNG.
const RED_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAIAAAACCAYAAABytg0kAAAAEUlEQVR4nGP4z8DwH4QZYAwAR8oH+WdZbrcAAAAASUVORK5CYII=";

fn make_surface() -> CanvasSurface {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    CanvasSurface::new(&canvas, 64, 48).unwrap()
}

fn alpha_at(surface: &CanvasSurface, x: f64, y: f64) -> u8 {
    let data = surface
        .context()
        .get_image_data(x, y, 1.0, 1.0)
        .unwrap()
        .data();
    data[3]
}

fn rgba_at(surface: &CanvasSurface, x: f64, y: f64) -> Vec<u8> {
    surface
        .context()
        .get_image_data(x, y, 1.0, 1.0)
        .unwrap()
        .data()
        .to_vec()
}

fn segment(from: Point, to: Point) -> Segment {
    Segment {
        from,
        to,
        color: Color::new("black"),
        width: LINE_WIDTH,
    }
}

#[wasm_bindgen_test]
fn dot_marks_the_canvas() {
    let mut surface = make_surface();
    let point = Point::new(20.0, 20.0);
    surface.draw_segment(&segment(point, point));
    assert!(alpha_at(&surface, 20.0, 20.0) > 0);
    assert_eq!(alpha_at(&surface, 40.0, 40.0), 0);
}

#[wasm_bindgen_test]
fn clear_empties_the_canvas() {
    let mut surface = make_surface();
    surface.draw_segment(&segment(Point::new(5.0, 10.0), Point::new(50.0, 10.0)));
    assert!(alpha_at(&surface, 30.0, 10.0) > 0);
    surface.clear();
    assert_eq!(alpha_at(&surface, 30.0, 10.0), 0);
}

#[wasm_bindgen_test]
fn canvas_is_sized_to_the_surface() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    let _surface = CanvasSurface::new(&canvas, 800, 600).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (800, 600));
}

#[wasm_bindgen_test]
async fn image_is_stretched_over_the_canvas() {
    let mut surface = make_surface();
    let image = load_html_image(RED_PNG).await.unwrap();
    surface.paint_image(&image);
    assert_eq!(rgba_at(&surface, 0.0, 0.0), vec![255, 0, 0, 255]);
    assert_eq!(rgba_at(&surface, 63.0, 47.0), vec![255, 0, 0, 255]);
}

#[wasm_bindgen_test]
async fn broken_image_fails_to_load() {
    assert!(load_html_image("data:image/png;base64,AAAA").await.is_err());
    let image = load_html_image(RED_PNG).await.unwrap();
    assert_eq!((image.natural_width(), image.natural_height()), (2, 2));
}

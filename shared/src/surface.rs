use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Color;
use crate::engine::StrokeEngine;
use crate::selectors::{ColorSource, ToolSource};
use crate::Point;

/// One rasterized piece of a stroke, drawn with round caps.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f64,
}

impl Segment {
    /// A zero-length segment, which renders as a dot.
    pub fn is_dot(&self) -> bool {
        self.from == self.to
    }
}

pub trait ClearAction {
    /// Wipes the whole surface back to blank.
    fn clear(&mut self);
}

/// An immediate-mode raster target. Nothing drawn is remembered as a shape.
pub trait Surface: ClearAction {
    type Image;

    fn draw_segment(&mut self, segment: &Segment);

    /// Breaks path continuity so the next segment starts a fresh path.
    fn end_path(&mut self);

    /// Paints `image` stretched over the full logical surface, replacing
    /// whatever was there.
    fn paint_image(&mut self, image: &Self::Image);
}

/// Fetches bitmaps by locator. `on_ready` runs once the image is available
/// and is dropped without being called if the fetch fails.
pub trait ImageSource {
    type Image;

    fn fetch(&self, locator: &str, on_ready: Box<dyn FnOnce(Self::Image)>);
}

/// Starts loading `locator` and paints the result onto the engine's surface
/// when it arrives. Whatever reaches the surface last stays visible.
pub fn load_image<S, C, T, L>(
    engine: &Rc<RefCell<StrokeEngine<S, C, T>>>,
    loader: &L,
    locator: &str,
) where
    S: Surface + 'static,
    C: ColorSource + 'static,
    T: ToolSource + 'static,
    L: ImageSource<Image = S::Image>,
{
    log::info!("Loading drawing {locator}");
    let engine = Rc::clone(engine);
    let locator_done = locator.to_string();
    loader.fetch(
        locator,
        Box::new(move |image| {
            log::info!("Drawing ready {locator_done}");
            engine.borrow_mut().paint_image(&image);
        }),
    );
}

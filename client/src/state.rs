use std::cell::RefCell;
use std::rc::Rc;

use sketchpad_shared::{PaletteSelector, StrokeEngine, ToolSelector};

use crate::render::CanvasSurface;

pub type Engine = StrokeEngine<CanvasSurface, PaletteSelector, ToolSelector>;

/// The one engine of the page, shared by every event handler.
pub type SharedEngine = Rc<RefCell<Engine>>;

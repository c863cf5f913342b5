use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::color::{Color, ToolMode, UnknownTool};

/// Reports the color a brush stroke should use right now.
pub trait ColorSource {
    fn active_color(&self) -> Color;
}

/// Reports the tool that is active right now.
pub trait ToolSource {
    fn active_tool(&self) -> ToolMode;
}

impl ColorSource for Color {
    fn active_color(&self) -> Color {
        self.clone()
    }
}

impl ToolSource for ToolMode {
    fn active_tool(&self) -> ToolMode {
        *self
    }
}

/// Shared handle on the palette choice. Clones observe the same selection,
/// so one clone can sit inside the engine while another is updated from UI
/// events.
#[derive(Clone, Debug, Default)]
pub struct PaletteSelector {
    active: Rc<RefCell<Color>>,
}

impl PaletteSelector {
    pub fn new(initial: Color) -> Self {
        Self {
            active: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn select(&self, color: Color) {
        log::debug!("Palette color {color}");
        *self.active.borrow_mut() = color;
    }
}

impl ColorSource for PaletteSelector {
    fn active_color(&self) -> Color {
        self.active.borrow().clone()
    }
}

/// Shared handle on the tool choice, see [`PaletteSelector`].
#[derive(Clone, Debug, Default)]
pub struct ToolSelector {
    active: Rc<Cell<ToolMode>>,
}

impl ToolSelector {
    pub fn new(initial: ToolMode) -> Self {
        Self {
            active: Rc::new(Cell::new(initial)),
        }
    }

    pub fn select(&self, tool: ToolMode) {
        log::debug!("Tool {tool}");
        self.active.set(tool);
    }

    /// Selects a tool by its UI name. Unknown names leave the current tool
    /// in place.
    pub fn select_named(&self, name: &str) -> Result<ToolMode, UnknownTool> {
        let tool = name.parse::<ToolMode>()?;
        self.select(tool);
        Ok(tool)
    }
}

impl ToolSource for ToolSelector {
    fn active_tool(&self) -> ToolMode {
        self.active.get()
    }
}

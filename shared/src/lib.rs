use serde::{Deserialize, Serialize};

mod color;
pub mod drawings;
mod engine;
pub mod raster;
mod selectors;
mod surface;

pub use color::{Color, ToolMode, UnknownTool};
pub use drawings::{DrawingManifest, DrawingPreset};
pub use engine::StrokeEngine;
pub use selectors::{ColorSource, PaletteSelector, ToolSelector, ToolSource};
pub use surface::{load_image, ClearAction, ImageSource, Segment, Surface};

/// Logical width of the drawing surface.
pub const SURFACE_WIDTH: u32 = 800;
/// Logical height of the drawing surface.
pub const SURFACE_HEIGHT: u32 = 600;
pub const LINE_WIDTH: f64 = 5.0;
pub const DEFAULT_COLOR: &str = "black";
/// Color the eraser paints with. The eraser is an opaque overdraw, so this
/// only looks right while the page behind the canvas is white; a transparent
/// or tinted background would show the eraser marks.
pub const BACKGROUND_COLOR: &str = "white";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps a client-space position onto the surface by removing the surface's
/// on-screen origin. No scaling is applied, so a canvas displayed at another
/// size than its logical resolution will misalign.
pub fn to_surface_point(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> Point {
    Point {
        x: (client_x - origin_x) as f32,
        y: (client_y - origin_y) as f32,
    }
}

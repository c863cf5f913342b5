use crate::color::{Color, ToolMode};
use crate::selectors::{ColorSource, ToolSource};
use crate::surface::{ClearAction, Segment, Surface};
use crate::{Point, LINE_WIDTH};

/// Turns pointer events into segments on a raster surface.
///
/// The engine keeps only what it needs to join the next segment to the
/// previous one. Tool and color are asked for at the moment a segment is
/// emitted, so a change made mid-stroke affects the following segments only.
pub struct StrokeEngine<S, C, T> {
    surface: S,
    colors: C,
    tools: T,
    painting: bool,
    // Some only while painting, once the first segment is out.
    last_point: Option<Point>,
}

impl<S, C, T> StrokeEngine<S, C, T>
where
    S: Surface,
    C: ColorSource,
    T: ToolSource,
{
    pub fn new(surface: S, colors: C, tools: T) -> Self {
        Self {
            surface,
            colors,
            tools,
            painting: false,
            last_point: None,
        }
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Starts a stroke and marks a dot at `point`, so a plain click is
    /// visible.
    pub fn pointer_down(&mut self, point: Point) {
        if self.painting {
            // A lost pointer-up must not join the old stroke to the new one.
            self.surface.end_path();
        }
        log::debug!("Stroke start at ({}, {})", point.x, point.y);
        self.painting = true;
        self.emit(point, point);
    }

    /// Extends the current stroke to `point`. Ignored while not painting.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.painting {
            return;
        }
        let from = self.last_point.unwrap_or(point);
        self.emit(from, point);
    }

    pub fn pointer_up(&mut self) {
        if self.painting {
            log::debug!("Stroke end");
        }
        self.painting = false;
        self.last_point = None;
        self.surface.end_path();
    }

    /// Paints a loaded image over the whole surface. Pointer state is left
    /// alone, so a stroke in progress continues on top of the image.
    pub fn paint_image(&mut self, image: &S::Image) {
        self.surface.paint_image(image);
    }

    fn stroke_color(&self) -> Color {
        match self.tools.active_tool() {
            ToolMode::Brush => self.colors.active_color(),
            ToolMode::Eraser => Color::background(),
        }
    }

    fn emit(&mut self, from: Point, to: Point) {
        let segment = Segment {
            from,
            to,
            color: self.stroke_color(),
            width: LINE_WIDTH,
        };
        self.surface.draw_segment(&segment);
        self.last_point = Some(to);
    }
}

impl<S, C, T> ClearAction for StrokeEngine<S, C, T>
where
    S: Surface,
    C: ColorSource,
    T: ToolSource,
{
    fn clear(&mut self) {
        log::info!("Clearing surface");
        self.surface.clear();
    }
}

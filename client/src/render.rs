use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use sketchpad_shared::{ClearAction, Point, Segment, Surface};

/// The page's canvas seen as a [`Surface`].
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Sizes `canvas` to the logical surface and grabs its 2D context.
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl ClearAction for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.begin_path();
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn draw_segment(&mut self, segment: &Segment) {
        if segment.is_dot() {
            // Zero-length paths are pruned before stroking, so fill the cap.
            draw_dot(&self.ctx, segment.from, segment.color.as_css(), segment.width);
        } else {
            draw_segment(
                &self.ctx,
                segment.from,
                segment.to,
                segment.color.as_css(),
                segment.width,
            );
        }
    }

    fn end_path(&mut self) {
        self.ctx.begin_path();
    }

    fn paint_image(&mut self, image: &HtmlImageElement) {
        if let Err(error) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, self.width, self.height)
        {
            log::warn!("Failed to paint image {}: {error:?}", image.src());
        }
    }
}

pub fn draw_dot(ctx: &CanvasRenderingContext2d, point: Point, color: &str, width: f64) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(
        point.x as f64,
        point.y as f64,
        width / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    ctx.fill();
    ctx.begin_path();
}

pub fn draw_segment(
    ctx: &CanvasRenderingContext2d,
    from: Point,
    to: Point,
    color: &str,
    width: f64,
) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    ctx.stroke();
}

//! Headless RGBA surface. Renders the same marks the canvas does, closely
//! enough to reason about which pixels a stroke touches.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::surface::{ClearAction, Segment, Surface};
use crate::{SURFACE_HEIGHT, SURFACE_WIDTH};

pub const BLANK: [u8; 4] = [0, 0, 0, 0];

#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            // zeroed = transparent
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|pixel| pixel.0 == BLANK)
    }

    /// Coordinates of every pixel that is not blank, row by row.
    pub fn marked_pixels(&self) -> Vec<(u32, u32)> {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0 != BLANK)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}

impl ClearAction for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(BLANK);
        }
    }
}

impl Surface for RasterSurface {
    type Image = RgbaImage;

    fn draw_segment(&mut self, segment: &Segment) {
        let Some(rgba) = segment.color.to_rgba8() else {
            log::warn!("Skipping segment with unusable color {}", segment.color);
            return;
        };
        let radius = segment.width / 2.0;
        let (x1, y1) = (segment.from.x as f64, segment.from.y as f64);
        let (x2, y2) = (segment.to.x as f64, segment.to.y as f64);
        let max_x = self.image.width() as f64 - 1.0;
        let max_y = self.image.height() as f64 - 1.0;
        let left = (x1.min(x2) - radius).floor().max(0.0);
        let right = (x1.max(x2) + radius).ceil().min(max_x);
        let top = (y1.min(y2) - radius).floor().max(0.0);
        let bottom = (y1.max(y2) + radius).ceil().min(max_y);
        if left > right || top > bottom {
            return;
        }
        for py in top as u32..=bottom as u32 {
            for px in left as u32..=right as u32 {
                let cx = px as f64 + 0.5;
                let cy = py as f64 + 0.5;
                if distance_to_segment(cx, cy, x1, y1, x2, y2) <= radius {
                    self.image.put_pixel(px, py, Rgba(rgba));
                }
            }
        }
    }

    fn end_path(&mut self) {}

    fn paint_image(&mut self, image: &RgbaImage) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let (width, height) = self.image.dimensions();
        let stretched = imageops::resize(image, width, height, FilterType::Nearest);
        imageops::replace(&mut self.image, &stretched, 0, 0);
    }
}

pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = ((px - x1) * dx + (py - y1) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);
    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

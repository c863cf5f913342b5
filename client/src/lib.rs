mod app;
mod dom;
mod images;
mod palette;
mod render;
mod state;

pub use app::run;
pub use images::{load_html_image, HtmlImageLoader};
pub use render::CanvasSurface;

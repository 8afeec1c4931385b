mod error;
mod render;

pub use error::RenderError;
pub use render::{render, Renderer};

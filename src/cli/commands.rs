pub mod render;
pub mod sample;

pub use render::render;
pub use sample::sample;

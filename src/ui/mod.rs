pub mod input;
pub mod render;

pub use input::InputReader;
pub use render::Renderer;

pub mod rotation;
pub mod vec2;

pub use rotation::Mat2;
pub use vec2::Vec2;

pub mod vec2;
pub mod affine;

pub use vec2::Vec2;
pub use affine::Affine2;

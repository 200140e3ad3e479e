pub mod scene;

pub use scene::{BodyHandle, Scene};

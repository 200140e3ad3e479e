pub mod config;
pub mod error;

pub use config::{BodyDefaults, SceneConfig};
pub use error::{ResolveError, ShapeError};

//! Error types for the few operations that can refuse their input.

/// Raised when constructing a shape from invalid dimensions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// Reasons a contact could not be resolved. The bodies are left untouched in every case.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("both bodies are immovable, combined inverse mass is zero")]
    ImmovablePair,
    #[error("contact refers to a body that is not in this scene")]
    UnknownBody,
    #[error("contact refers to the same body on both sides")]
    SelfContact,
}

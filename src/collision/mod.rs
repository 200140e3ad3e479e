pub mod contact;
pub mod detection;
pub mod resolution;

// Re-export key types
pub use contact::Contact;
pub use detection::intersect;
pub use resolution::resolve_contact;

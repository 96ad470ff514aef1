pub mod error;
pub mod field;

// Re-exports für einfache Verwendung
pub use error::{FieldError, FieldResult};

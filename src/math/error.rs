// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid grid: resolution {resolution}, size {size}")]
    InvalidGrid { resolution: usize, size: f32 },
}

pub type FieldResult<T> = Result<T, FieldError>;

pub mod field_lines;
pub mod sparkle;

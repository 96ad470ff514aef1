pub mod ui;
pub mod visualization;

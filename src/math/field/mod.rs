//! Wellenfeld: Quellen erzeugen, Höhenfeld abtasten, Linien bauen.
pub mod grid;
pub mod mesh;
pub mod source;

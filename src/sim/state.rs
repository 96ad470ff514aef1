use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum VisualizerState {
    #[default] // Nichts gemountet
    Idle,
    /// Ebenen existieren und werden jeden Frame neu gebaut.
    Running,
}

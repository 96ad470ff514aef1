pub mod layers;
pub mod resources;
pub mod state;
pub mod systems;

// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod input;
pub mod math;
pub mod setup;
pub mod sim;

use debug::{
    ui::control_panel_ui_system,
    visualization::{
        field_lines::{FieldLineGizmos, HighlightGizmos, configure_line_gizmos, draw_field_lines_system},
        sparkle::{SparkleField, WandSettings, draw_sparkles_system, reroll_sparkles_system, wand_enabled},
    },
};
use input::{keyboard::keyboard_shortcuts_system, pointer::track_pointer_system};
use setup::{BACKGROUND_COLOR, setup_scene};
use sim::resources::*;
use sim::state::VisualizerState;
use sim::systems::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hankies in the Wind".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .register_type::<FieldTuning>()
        .add_plugins(ResourceInspectorPlugin::<FieldTuning>::default())
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .init_resource::<WaveSettings>()
        .init_resource::<FieldTuning>()
        .init_resource::<AnimationClock>()
        .init_resource::<PointerSource>()
        .init_resource::<Viewport>()
        .init_resource::<FieldStats>()
        .init_resource::<WandSettings>()
        .init_resource::<SparkleField>()
        .init_gizmo_group::<FieldLineGizmos>()
        .init_gizmo_group::<HighlightGizmos>()
        .init_state::<VisualizerState>()
        .add_systems(
            Startup,
            (setup_scene, configure_line_gizmos, request_mount_system),
        )
        // --- Lebenszyklus ---
        .add_systems(OnEnter(VisualizerState::Running), spawn_field_layers)
        .add_systems(OnExit(VisualizerState::Running), despawn_field_layers)
        // Bedienung läuft auch im Idle-Zustand, sonst ließe sich nicht wieder mounten.
        .add_systems(
            Update,
            (
                control_panel_ui_system,
                keyboard_shortcuts_system,
                handle_window_resize_system,
            ),
        )
        // --- Ein Frame: Zeiger, Zeit, Ebenen neu bauen, zeichnen ---
        .add_systems(
            Update,
            (
                track_pointer_system,
                advance_clock_system,
                regenerate_layers_system,
                draw_field_lines_system,
            )
                .chain()
                .after(control_panel_ui_system)
                .run_if(in_state(VisualizerState::Running)),
        )
        .add_systems(
            Update,
            (reroll_sparkles_system, draw_sparkles_system)
                .chain()
                .after(track_pointer_system)
                .run_if(in_state(VisualizerState::Running).and_then(wand_enabled)),
        )
        .run();
}

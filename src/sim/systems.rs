use super::layers::{FieldLayer, LAYER_COUNT, LayerMesh, build_layer, layer_transform};
use super::resources::{AnimationClock, FieldStats, FieldTuning, PointerSource, Viewport, WaveSettings};
use super::state::VisualizerState;
use bevy::prelude::*;
use bevy::window::WindowResized;

/// Startup: die Visualisierung direkt mounten.
pub fn request_mount_system(mut next_state: ResMut<NextState<VisualizerState>>) {
    next_state.set(VisualizerState::Running);
}

pub fn spawn_field_layers(mut commands: Commands) {
    for index in 0..LAYER_COUNT {
        commands.spawn((
            SpatialBundle::from_transform(layer_transform(index)),
            FieldLayer::new(index),
            LayerMesh::default(),
            Name::new(format!("Field layer {index}")),
        ));
    }
    info!("Mounted {} field layers.", LAYER_COUNT);
}

pub fn despawn_field_layers(
    mut commands: Commands,
    layers: Query<Entity, With<FieldLayer>>,
    mut pointer: ResMut<PointerSource>,
    mut stats: ResMut<FieldStats>,
) {
    for entity in layers.iter() {
        commands.entity(entity).despawn_recursive();
    }
    pointer.clear();
    *stats = FieldStats::default();
    info!("Field layers unmounted.");
}

pub fn advance_clock_system(settings: Res<WaveSettings>, mut clock: ResMut<AnimationClock>) {
    clock.advance(settings.animation_speed);
}

/// Baut alle Ebenen für diesen Frame neu; die Linien des Vorframes werden dabei verworfen.
pub fn regenerate_layers_system(
    settings: Res<WaveSettings>,
    tuning: Res<FieldTuning>,
    clock: Res<AnimationClock>,
    pointer: Res<PointerSource>,
    mut layers: Query<(&FieldLayer, &mut LayerMesh)>,
    mut stats: ResMut<FieldStats>,
) {
    // Ein Snapshot pro Frame, alle Ebenen sehen dieselben Werte.
    let settings = *settings;
    let pointer = pointer.position;
    let mut next_stats = FieldStats {
        min_height: f32::INFINITY,
        max_height: f32::NEG_INFINITY,
        ..default()
    };

    for (layer, mut mesh) in layers.iter_mut() {
        match build_layer(layer, &settings, &tuning, clock.elapsed, pointer) {
            Ok(built) => {
                next_stats.min_height = next_stats.min_height.min(built.min_height);
                next_stats.max_height = next_stats.max_height.max(built.max_height);
                next_stats.tear_segments += built.lines.tears.len();
                next_stats.highlighted_lines += built.lines.highlighted_count();
                next_stats.layers_built += 1;
                mesh.0 = built.lines;
            }
            Err(err) => {
                warn!("Skipping field layer {}: {}", layer.index, err);
                mesh.0.polylines.clear();
                mesh.0.tears.clear();
            }
        }
    }

    if next_stats.layers_built == 0 {
        next_stats.min_height = 0.0;
        next_stats.max_height = 0.0;
    }
    *stats = next_stats;
}

/// Übernimmt die letzte Größenänderung in Viewport und Kameraprojektion.
pub fn handle_window_resize_system(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(last) = resize_events.read().last() else {
        return;
    };
    viewport.resize(last.width, last.height);
    for mut projection in projections.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect_ratio();
        }
    }
    debug!(
        "Viewport resized to {}x{} (aspect {:.3})",
        viewport.width,
        viewport.height,
        viewport.aspect_ratio()
    );
}

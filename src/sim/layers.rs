use crate::math::error::FieldResult;
use crate::math::field::{
    grid::evaluate_height_grid,
    mesh::{LineGroup, build_line_group},
    source::generate_sources,
};
use crate::sim::resources::{FieldTuning, WaveSettings};
use bevy::prelude::*;
use std::f32::consts::PI;

pub const LAYER_COUNT: usize = 3;
pub const LAYER_TIME_OFFSETS: [f32; LAYER_COUNT] = [0.0, 0.33, 0.66];
pub const LAYER_SOURCE_SCALES: [f32; LAYER_COUNT] = [1.5, 0.8, 0.8];

/// Eine der drei versetzten Feldebenen ("Taschentücher").
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FieldLayer {
    pub index: usize,
    pub time_offset: f32,
    pub source_scale: f32,
}

impl FieldLayer {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            time_offset: LAYER_TIME_OFFSETS[index % LAYER_COUNT],
            source_scale: LAYER_SOURCE_SCALES[index % LAYER_COUNT],
        }
    }
}

/// Die Linien einer Ebene für den aktuellen Frame. Wird jeden Frame ersetzt.
#[derive(Component, Debug, Default, Clone)]
pub struct LayerMesh(pub LineGroup);

/// Lage der Ebenen: die erste liegt flach, die anderen beiden sind gefaltet dagegen.
pub fn layer_transform(index: usize) -> Transform {
    match index {
        0 => Transform::IDENTITY,
        1 => Transform::from_xyz(0.4, 0.6, -0.3)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, PI / 5.0, 0.0, PI / 12.0)),
        _ => Transform::from_xyz(-0.4, -0.5, 0.4)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, -PI / 4.0, PI / 6.0, 0.0)),
    }
}

/// Ergebnis eines Ebenenaufbaus: Linien plus Höhenbereich für die Statistik.
#[derive(Debug, Clone)]
pub struct BuiltLayer {
    pub lines: LineGroup,
    pub min_height: f32,
    pub max_height: f32,
}

/// Quellen erzeugen, Feld abtasten, Linien bauen. Rein, ohne ECS-Zugriff.
pub fn build_layer(
    layer: &FieldLayer,
    settings: &WaveSettings,
    tuning: &FieldTuning,
    elapsed: f32,
    pointer: Option<Vec3>,
) -> FieldResult<BuiltLayer> {
    let t = elapsed + layer.time_offset;
    let config = settings.source_config();
    let pointer_source = pointer.map(|position| tuning.pointer_wave().source_at(position, &config, t));
    let sources = generate_sources(t, layer.source_scale, &config, pointer_source);

    let grid = evaluate_height_grid(&sources, tuning.domain_size, tuning.resolution, t)?;
    let (min_height, max_height) = grid.min_max();
    let lines = build_line_group(&grid, pointer, &tuning.mesh_tuning());

    Ok(BuiltLayer {
        lines,
        min_height,
        max_height,
    })
}

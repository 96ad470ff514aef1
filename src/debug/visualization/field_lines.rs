use crate::math::field::mesh::LineMaterial;
use crate::sim::layers::LayerMesh;
use bevy::prelude::*;

/// Dünne, halbtransparente Gitterlinien.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct FieldLineGizmos;

/// Linien nahe der Zeigerquelle.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct HighlightGizmos;

pub const DEFAULT_LINE_COLOR: Color = Color::rgba(0.8, 0.88, 1.0, 0.28);
pub const TEAR_LINE_COLOR: Color = Color::rgba(0.9, 0.9, 0.95, 0.45);
pub const HIGHLIGHT_LINE_COLOR: Color = Color::rgba(1.0, 0.55, 0.2, 0.95);

/// Setzt die Strichstärken der beiden Materialgruppen.
pub fn configure_line_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (default_config, _) = config_store.config_mut::<FieldLineGizmos>();
    default_config.line_width = 1.0;

    let (highlight_config, _) = config_store.config_mut::<HighlightGizmos>();
    highlight_config.line_width = 3.0;
}

/// Zeichnet die Linien aller Ebenen mit der jeweiligen Ebenentransformation.
pub fn draw_field_lines_system(
    layers: Query<(&GlobalTransform, &LayerMesh)>,
    mut lines: Gizmos<FieldLineGizmos>,
    mut highlights: Gizmos<HighlightGizmos>,
) {
    for (transform, mesh) in layers.iter() {
        for polyline in &mesh.0.polylines {
            let points = polyline.points.iter().map(|p| transform.transform_point(*p));
            match polyline.material {
                LineMaterial::Default => lines.linestrip(points, DEFAULT_LINE_COLOR),
                LineMaterial::Highlighted => highlights.linestrip(points, HIGHLIGHT_LINE_COLOR),
            }
        }

        for tear in &mesh.0.tears {
            let start = transform.transform_point(tear.start);
            let end = transform.transform_point(tear.end);
            match tear.material {
                LineMaterial::Default => lines.line(start, end, TEAR_LINE_COLOR),
                LineMaterial::Highlighted => highlights.line(start, end, HIGHLIGHT_LINE_COLOR),
            }
        }
    }
}

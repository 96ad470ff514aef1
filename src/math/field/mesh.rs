// src/math/field/mesh.rs
use super::grid::HeightGrid;
use bevy::math::{Vec2, Vec3};

/// Welches Material eine Linie bekommt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineMaterial {
    /// Dezent, geringe Deckkraft.
    #[default]
    Default,
    /// Hell und dick, für Linien nahe der Zeigerquelle.
    Highlighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Fester Index `i` (festes x), läuft entlang z.
    Row,
    /// Fester Index `j` (festes z), läuft entlang x.
    Column,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub kind: LineKind,
    pub points: Vec<Vec3>,
    pub material: LineMaterial,
}

/// Kurzes diagonales Segment an einer Stelle mit starker lokaler Krümmung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TearSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub material: LineMaterial,
}

/// Stellschrauben des Mesh-Builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshTuning {
    /// Ab dieser Abweichung vom Nachbarmittel wird ein Riss gezeichnet.
    pub tear_threshold: f32,
    /// Hervorhebungsradius als Vielfaches der Gitterschrittweite.
    pub highlight_distance_factor: f32,
}

impl Default for MeshTuning {
    fn default() -> Self {
        Self {
            tear_threshold: 0.2,
            highlight_distance_factor: 1.5,
        }
    }
}

/// Linien einer Feldebene für genau einen Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGroup {
    pub polylines: Vec<Polyline>,
    pub tears: Vec<TearSegment>,
}

impl LineGroup {
    pub fn row_and_column_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn highlighted_count(&self) -> usize {
        self.polylines
            .iter()
            .filter(|line| line.material == LineMaterial::Highlighted)
            .count()
            + self
                .tears
                .iter()
                .filter(|tear| tear.material == LineMaterial::Highlighted)
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.tears.is_empty()
    }
}

fn material_for(point: Vec2, pointer: Option<Vec2>, radius: f32) -> LineMaterial {
    match pointer {
        Some(p) if point.distance(p) < radius => LineMaterial::Highlighted,
        _ => LineMaterial::Default,
    }
}

/// Wandelt ein Höhenfeld in Zeilen-, Spalten- und Risslinien um.
///
/// `pointer` ist die Position der Zeigerquelle in Ebenenkoordinaten; nur x und z zählen.
pub fn build_line_group(grid: &HeightGrid, pointer: Option<Vec3>, tuning: &MeshTuning) -> LineGroup {
    let nodes = grid.nodes_per_axis();
    let step = grid.step();
    let radius = tuning.highlight_distance_factor * step;
    let pointer_xz = pointer.map(|p| Vec2::new(p.x, p.z));

    let mut group = LineGroup {
        polylines: Vec::with_capacity(2 * nodes),
        tears: Vec::new(),
    };

    for i in 0..nodes {
        let x = grid.coord(i);
        group.polylines.push(Polyline {
            kind: LineKind::Row,
            points: (0..nodes)
                .map(|j| Vec3::new(x, grid.get(i, j), grid.coord(j)))
                .collect(),
            material: material_for(Vec2::new(x, 0.0), pointer_xz, radius),
        });
    }

    for j in 0..nodes {
        let z = grid.coord(j);
        group.polylines.push(Polyline {
            kind: LineKind::Column,
            points: (0..nodes)
                .map(|i| Vec3::new(grid.coord(i), grid.get(i, j), z))
                .collect(),
            material: material_for(Vec2::new(0.0, z), pointer_xz, radius),
        });
    }

    let half = step / 2.0;
    for i in 1..grid.resolution() {
        for j in 1..grid.resolution() {
            let Some(deviation) = grid.laplacian_deviation(i, j) else {
                continue;
            };
            if deviation <= tuning.tear_threshold {
                continue;
            }
            let center = Vec3::new(grid.coord(i), grid.get(i, j), grid.coord(j));
            let material = material_for(Vec2::new(center.x, center.z), pointer_xz, radius);
            group.tears.push(TearSegment {
                start: center + Vec3::new(-half, 0.0, -half),
                end: center + Vec3::new(half, 0.0, half),
                material,
            });
            group.tears.push(TearSegment {
                start: center + Vec3::new(-half, 0.0, half),
                end: center + Vec3::new(half, 0.0, -half),
                material,
            });
        }
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::field::grid::evaluate_height_grid;
    use crate::math::field::source::WaveSource;

    #[test]
    fn test_line_count_matches_resolution() {
        for resolution in [1, 4, 17, 40] {
            let grid = HeightGrid::flat(4.0, resolution).unwrap();
            let group = build_line_group(&grid, None, &MeshTuning::default());
            assert_eq!(group.row_and_column_count(), 2 * (resolution + 1));
            assert!(
                group
                    .polylines
                    .iter()
                    .all(|line| line.points.len() == resolution + 1)
            );
            let rows = group
                .polylines
                .iter()
                .filter(|line| line.kind == LineKind::Row)
                .count();
            assert_eq!(rows, resolution + 1);
        }
    }

    #[test]
    fn test_flat_grid_has_no_tears() {
        let grid = HeightGrid::flat(4.0, 20).unwrap();
        let group = build_line_group(&grid, Some(Vec3::ZERO), &MeshTuning::default());
        assert!(group.tears.is_empty());
    }

    #[test]
    fn test_spike_produces_two_crossing_tears() {
        let mut grid = HeightGrid::flat(4.0, 8).unwrap();
        grid.set(4, 4, 1.0);
        let group = build_line_group(&grid, None, &MeshTuning::default());
        // Spitze: Abweichung 1.0; Nachbarn: 0.25 > 0.2.
        assert_eq!(group.tears.len(), 2 * 5);

        let center = Vec3::new(grid.coord(4), 1.0, grid.coord(4));
        let at_spike: Vec<_> = group
            .tears
            .iter()
            .filter(|tear| (tear.start + tear.end) / 2.0 == center)
            .collect();
        assert_eq!(at_spike.len(), 2);
        for tear in at_spike {
            assert_eq!(tear.start.y, 1.0);
            assert_eq!(tear.end.y, 1.0);
            let extent = (tear.end - tear.start).abs();
            assert!((extent.x - grid.step()).abs() < 1e-6);
            assert!((extent.z - grid.step()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tear_threshold_is_exclusive() {
        let mut grid = HeightGrid::flat(4.0, 8).unwrap();
        grid.set(4, 4, 0.2);
        let tuning = MeshTuning::default();
        let group = build_line_group(&grid, None, &tuning);
        assert!(group.tears.is_empty());

        let lower = MeshTuning {
            tear_threshold: 0.1,
            ..tuning
        };
        assert_eq!(build_line_group(&grid, None, &lower).tears.len(), 2);
    }

    #[test]
    fn test_no_highlight_without_pointer() {
        let source = WaveSource::new(Vec3::ZERO, 5.0, 1.0, 0.0);
        let grid = evaluate_height_grid(&[source], 4.0, 20, 0.0).unwrap();
        let group = build_line_group(&grid, None, &MeshTuning::default());
        assert_eq!(group.highlighted_count(), 0);
    }

    #[test]
    fn test_highlight_near_pointer() {
        // step = 0.5, Radius = 0.75
        let grid = HeightGrid::flat(4.0, 8).unwrap();
        let group = build_line_group(&grid, Some(Vec3::new(0.0, 0.0, 0.0)), &MeshTuning::default());

        let highlighted_rows: Vec<f32> = group
            .polylines
            .iter()
            .filter(|l| l.kind == LineKind::Row && l.material == LineMaterial::Highlighted)
            .map(|l| l.points[0].x)
            .collect();
        assert_eq!(highlighted_rows, vec![-0.5, 0.0, 0.5]);

        let highlighted_columns = group
            .polylines
            .iter()
            .filter(|l| l.kind == LineKind::Column && l.material == LineMaterial::Highlighted)
            .count();
        assert_eq!(highlighted_columns, 3);
    }

    #[test]
    fn test_row_highlight_measures_against_zero_offset() {
        // Zeiger weit in z: Zeilen werden über hypot(x - px, pz) gemessen, also keine.
        let grid = HeightGrid::flat(4.0, 8).unwrap();
        let group = build_line_group(&grid, Some(Vec3::new(0.0, 0.0, 1.5)), &MeshTuning::default());
        assert!(
            group
                .polylines
                .iter()
                .filter(|l| l.kind == LineKind::Row)
                .all(|l| l.material == LineMaterial::Default)
        );
        let columns: Vec<f32> = group
            .polylines
            .iter()
            .filter(|l| l.kind == LineKind::Column && l.material == LineMaterial::Highlighted)
            .map(|l| l.points[0].z)
            .collect();
        assert_eq!(columns, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_tear_highlight_uses_cell_center() {
        let mut grid = HeightGrid::flat(4.0, 8).unwrap();
        grid.set(2, 6, 2.0);
        let pointer = Vec3::new(grid.coord(2), 0.0, grid.coord(6));
        let group = build_line_group(&grid, Some(pointer), &MeshTuning::default());
        let spike_center = Vec3::new(grid.coord(2), 2.0, grid.coord(6));
        for tear in &group.tears {
            let mid = (tear.start + tear.end) / 2.0;
            if mid == spike_center {
                assert_eq!(tear.material, LineMaterial::Highlighted);
            }
        }
        assert!(group.highlighted_count() > 0);
    }
}

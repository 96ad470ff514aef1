// src/math/field/grid.rs
use super::source::WaveSource;
use crate::math::error::{FieldError, FieldResult};

/// Räumliche Dämpfung pro Distanzeinheit.
pub const SPATIAL_DAMPING: f32 = 0.3;
/// Globaler Wanderterm, unabhängig von der Phase der einzelnen Quellen.
pub const TRAVEL_RATE: f32 = 5.0;

/// Abgetastetes Höhenfeld über einer quadratischen Domäne.
/// `(resolution + 1)^2` Werte, zeilenweise nach `i` gespeichert.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    data: Vec<f32>,
    resolution: usize,
    size: f32,
}

impl HeightGrid {
    /// Erstellt ein mit Nullen gefülltes Gitter.
    pub fn flat(size: f32, resolution: usize) -> FieldResult<Self> {
        validate(size, resolution)?;
        let nodes = resolution + 1;
        Ok(Self {
            data: vec![0.0; nodes * nodes],
            resolution,
            size,
        })
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> Option<usize> {
        let nodes = self.nodes_per_axis();
        if i < nodes && j < nodes {
            Some(i * nodes + j)
        } else {
            None
        }
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.idx(i, j)
            .and_then(|index| self.data.get(index).copied())
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        if let Some(slot) = self.idx(i, j).and_then(|index| self.data.get_mut(index)) {
            *slot = value;
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn nodes_per_axis(&self) -> usize {
        self.resolution + 1
    }

    /// Abstand zweier benachbarter Knoten in Weltkoordinaten.
    pub fn step(&self) -> f32 {
        self.size / self.resolution as f32
    }

    /// Weltkoordinate des Knotenindex `k` entlang einer Achse.
    pub fn coord(&self, k: usize) -> f32 {
        k as f32 * self.step() - self.size / 2.0
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Kleinster und größter Wert des Gitters.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Abweichung eines inneren Knotens vom Mittel seiner vier Nachbarn.
    /// Für Randknoten `None`.
    pub fn laplacian_deviation(&self, i: usize, j: usize) -> Option<f32> {
        if i == 0 || j == 0 || i >= self.resolution || j >= self.resolution {
            return None;
        }
        let mean = (self.get(i - 1, j) + self.get(i + 1, j) + self.get(i, j - 1) + self.get(i, j + 1))
            / 4.0;
        Some((self.get(i, j) - mean).abs())
    }
}

fn validate(size: f32, resolution: usize) -> FieldResult<()> {
    if resolution == 0 || !size.is_finite() || size <= 0.0 {
        return Err(FieldError::InvalidGrid { resolution, size });
    }
    Ok(())
}

/// Beitrag einer einzelnen Quelle in der Distanz `distance` zur Zeit `t`.
#[inline]
pub fn source_contribution(source: &WaveSource, distance: f32, t: f32) -> f32 {
    (distance * source.frequency - TRAVEL_RATE * t + source.phase).sin()
        * source.amplitude
        * (-SPATIAL_DAMPING * distance).exp()
}

/// Tastet das Interferenzfeld aller Quellen auf einem `(resolution+1)^2`-Gitter ab.
pub fn evaluate_height_grid(
    sources: &[WaveSource],
    size: f32,
    resolution: usize,
    t: f32,
) -> FieldResult<HeightGrid> {
    let mut grid = HeightGrid::flat(size, resolution)?;
    let nodes = grid.nodes_per_axis();

    for i in 0..nodes {
        let x = grid.coord(i);
        for j in 0..nodes {
            let z = grid.coord(j);
            let height: f32 = sources
                .iter()
                .map(|source| source_contribution(source, source.planar_distance(x, z), t))
                .sum();
            grid.set(i, j, height);
        }
    }

    Ok(grid)
}

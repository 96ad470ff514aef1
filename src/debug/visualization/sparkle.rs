// src/debug/visualization/sparkle.rs
use crate::sim::resources::PointerSource;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// Einstellungen des "Zauberstab"-Modus. Rein kosmetisch.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WandSettings {
    pub enabled: bool,
    pub sparkle_count: usize,
    /// Streuradius um den Zeiger in Weltkoordinaten.
    pub radius: f32,
}

impl Default for WandSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            sparkle_count: 24,
            radius: 0.35,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub offset: Vec3,
    pub size: f32,
}

/// Die Funken des aktuellen Frames, relativ zum Zeiger.
#[derive(Resource, Debug, Default)]
pub struct SparkleField {
    pub sparkles: Vec<Sparkle>,
}

pub fn wand_enabled(wand: Res<WandSettings>) -> bool {
    wand.enabled
}

/// Verteilt `count` Funken gleichmäßig über eine Kreisscheibe mit leichtem Höhenversatz.
pub fn scatter_sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Vec<Sparkle> {
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let distance = radius * rng.random::<f32>().sqrt();
            Sparkle {
                offset: Vec3::new(
                    distance * angle.cos(),
                    rng.random_range(0.02..0.2),
                    distance * angle.sin(),
                ),
                size: rng.random_range(0.01..0.035),
            }
        })
        .collect()
}

pub fn reroll_sparkles_system(wand: Res<WandSettings>, mut field: ResMut<SparkleField>) {
    field.sparkles = scatter_sparkles(&mut rand::rng(), wand.sparkle_count, wand.radius);
}

pub fn draw_sparkles_system(
    pointer: Res<PointerSource>,
    field: Res<SparkleField>,
    mut gizmos: Gizmos,
) {
    let Some(center) = pointer.position else {
        return;
    };
    for sparkle in &field.sparkles {
        let p = center + sparkle.offset;
        let s = sparkle.size;
        // Kleiner dreiachsiger Stern
        gizmos.line(p - Vec3::X * s, p + Vec3::X * s, Color::WHITE);
        gizmos.line(p - Vec3::Y * s, p + Vec3::Y * s, Color::rgb(1.0, 0.9, 0.5));
        gizmos.line(p - Vec3::Z * s, p + Vec3::Z * s, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let sparkles = scatter_sparkles(&mut rng, 50, 0.4);
        assert_eq!(sparkles.len(), 50);
        for sparkle in &sparkles {
            let planar = Vec2::new(sparkle.offset.x, sparkle.offset.z).length();
            assert!(planar <= 0.4 + 1e-5);
            assert!(sparkle.offset.y >= 0.02 && sparkle.offset.y < 0.2);
            assert!(sparkle.size > 0.0);
        }
    }

    #[test]
    fn test_scatter_is_seed_deterministic() {
        let a = scatter_sparkles(&mut StdRng::seed_from_u64(3), 10, 1.0);
        let b = scatter_sparkles(&mut StdRng::seed_from_u64(3), 10, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wand_disabled_by_default() {
        assert!(!WandSettings::default().enabled);
    }
}

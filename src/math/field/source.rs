// src/math/field/source.rs
use bevy::math::Vec3;
use std::f32::consts::TAU;

/// Eine punktförmige Wellenquelle, die einen gedämpften Sinusterm zum Höhenfeld beiträgt.
/// Wird jeden Frame neu erzeugt und hat keine Identität über Frames hinweg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSource {
    /// Position im Feld. Nur x und z gehen in die Distanz ein.
    pub position: Vec3,
    pub frequency: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl WaveSource {
    pub fn new(position: Vec3, frequency: f32, amplitude: f32, phase: f32) -> Self {
        Self {
            position,
            frequency,
            amplitude,
            phase,
        }
    }

    /// Abstand in der xz-Ebene, die y-Koordinate der Quelle wird ignoriert.
    #[inline]
    pub fn planar_distance(&self, x: f32, z: f32) -> f32 {
        let dx = x - self.position.x;
        let dz = z - self.position.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Momentaufnahme der Nutzerparameter, die der Quellengenerator braucht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceConfig {
    pub frequency: f32,
    pub amplitude: f32,
    pub count: u32,
}

/// Wie die interaktive Zeigerquelle aus den aktuellen Einstellungen abgeleitet wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerWave {
    pub frequency_boost: f32,
    pub amplitude_gain: f32,
    pub phase_rate: f32,
}

impl Default for PointerWave {
    fn default() -> Self {
        Self {
            frequency_boost: 2.0,
            amplitude_gain: 1.5,
            phase_rate: 6.0,
        }
    }
}

impl PointerWave {
    pub fn source_at(&self, position: Vec3, config: &SourceConfig, t: f32) -> WaveSource {
        WaveSource::new(
            position,
            config.frequency + self.frequency_boost,
            config.amplitude * self.amplitude_gain,
            self.phase_rate * t,
        )
    }
}

/// Erzeugt die Quellen einer Feldebene: `count` Quellen auf einem gewellten Ring,
/// eine Zentrumsquelle und optional die Zeigerquelle (immer als letztes Element).
pub fn generate_sources(
    t: f32,
    scale: f32,
    config: &SourceConfig,
    pointer: Option<WaveSource>,
) -> Vec<WaveSource> {
    let n = config.count as usize;
    let mut sources = Vec::with_capacity(n + 2);

    for i in 0..n {
        let theta = TAU * i as f32 / n as f32;
        let radius = scale * (1.0 + 0.2 * (3.0 * theta).sin());
        sources.push(WaveSource::new(
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin()),
            config.frequency + (2.0 * theta).sin(),
            config.amplitude + 0.1 * theta.cos(),
            3.0 * t + theta,
        ));
    }

    sources.push(WaveSource::new(
        Vec3::ZERO,
        config.frequency + 1.0,
        config.amplitude + 0.1,
        4.0 * t,
    ));

    if let Some(pointer_source) = pointer {
        sources.push(pointer_source);
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn config(count: u32) -> SourceConfig {
        SourceConfig {
            frequency: 2.5,
            amplitude: 0.4,
            count,
        }
    }

    #[test]
    fn test_source_count_without_pointer() {
        for n in 2..=12 {
            let sources = generate_sources(0.7, 1.5, &config(n), None);
            assert_eq!(sources.len(), n as usize + 1);
        }
    }

    #[test]
    fn test_pointer_source_is_appended_last() {
        let pointer = WaveSource::new(Vec3::new(0.3, 0.0, -0.2), 4.5, 0.6, 1.0);
        let sources = generate_sources(0.0, 1.5, &config(5), Some(pointer));
        assert_eq!(sources.len(), 7);
        assert_eq!(*sources.last().unwrap(), pointer);
    }

    #[test]
    fn test_ring_angles_evenly_spaced() {
        let n = 7;
        let sources = generate_sources(0.0, 1.0, &config(n), None);
        let step = TAU / n as f32;
        for (i, source) in sources.iter().take(n as usize).enumerate() {
            let angle = source.position.z.atan2(source.position.x).rem_euclid(TAU);
            let expected = step * i as f32;
            let diff = (angle - expected).abs();
            assert!(
                diff < 1e-4 || (TAU - diff) < 1e-4,
                "source {i}: angle {angle}, expected {expected}"
            );
            // Phase bei t = 0 entspricht genau dem Ringwinkel.
            assert_abs_diff_eq!(source.phase, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_ring_radius_modulation() {
        let scale = 0.8;
        let sources = generate_sources(0.0, scale, &config(4), None);
        for (i, source) in sources.iter().take(4).enumerate() {
            let theta = TAU * i as f32 / 4.0;
            let expected = scale * (1.0 + 0.2 * (3.0 * theta).sin());
            assert_abs_diff_eq!(source.position.length(), expected, epsilon = 1e-5);
            assert_eq!(source.position.y, 0.0);
        }
    }

    #[test]
    fn test_center_source_parameters() {
        let t = 1.25;
        let sources = generate_sources(t, 1.5, &config(5), None);
        let center = sources[5];
        assert_eq!(center.position, Vec3::ZERO);
        assert_abs_diff_eq!(center.frequency, 3.5, epsilon = 1e-6);
        assert_abs_diff_eq!(center.amplitude, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(center.phase, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pointer_wave_follows_settings() {
        let wave = PointerWave::default();
        let source = wave.source_at(Vec3::new(1.0, 0.0, 1.0), &config(5), 2.0);
        assert_abs_diff_eq!(source.frequency, 4.5, epsilon = 1e-6);
        assert_abs_diff_eq!(source.amplitude, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(source.phase, 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_planar_distance_ignores_height() {
        let source = WaveSource::new(Vec3::new(1.0, 5.0, 1.0), 1.0, 1.0, 0.0);
        assert_abs_diff_eq!(source.planar_distance(4.0, 5.0), 5.0, epsilon = 1e-6);
    }
}

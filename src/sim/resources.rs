use crate::math::field::{mesh::MeshTuning, source::{PointerWave, SourceConfig}};
use bevy::prelude::*;
use std::ops::RangeInclusive;

pub const FREQUENCY_RANGE: RangeInclusive<f32> = 1.0..=6.0;
pub const AMPLITUDE_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const SOURCE_COUNT_RANGE: RangeInclusive<u32> = 2..=12;
pub const ANIMATION_SPEED_RANGE: RangeInclusive<f32> = 0.0001..=0.1;

/// Vom Nutzer einstellbare Parameter. Jeder Frame liest eine Kopie davon.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WaveSettings {
    pub frequency: f32,
    pub amplitude: f32,
    pub num_sources: u32,
    /// Zeitzuwachs pro Frame.
    pub animation_speed: f32,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            frequency: 2.5,
            amplitude: 0.4,
            num_sources: 5,
            animation_speed: 0.0006,
        }
    }
}

impl WaveSettings {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zwingt alle Werte in ihre gültigen Bereiche.
    pub fn clamped(self) -> Self {
        Self {
            frequency: self
                .frequency
                .clamp(*FREQUENCY_RANGE.start(), *FREQUENCY_RANGE.end()),
            amplitude: self
                .amplitude
                .clamp(*AMPLITUDE_RANGE.start(), *AMPLITUDE_RANGE.end()),
            num_sources: self
                .num_sources
                .clamp(*SOURCE_COUNT_RANGE.start(), *SOURCE_COUNT_RANGE.end()),
            animation_speed: self
                .animation_speed
                .clamp(*ANIMATION_SPEED_RANGE.start(), *ANIMATION_SPEED_RANGE.end()),
        }
    }

    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            frequency: self.frequency,
            amplitude: self.amplitude,
            count: self.num_sources,
        }
    }
}

/// Feste Konstanten des Feldes, zur Laufzeit über Panel und Inspector änderbar.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct FieldTuning {
    /// Kantenlänge der quadratischen Domäne in Weltkoordinaten.
    pub domain_size: f32,
    /// Zellen pro Achse.
    pub resolution: usize,
    pub tear_threshold: f32,
    pub highlight_distance_factor: f32,
    pub pointer_frequency_boost: f32,
    pub pointer_amplitude_gain: f32,
    pub pointer_phase_rate: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        let mesh = MeshTuning::default();
        let pointer = PointerWave::default();
        Self {
            domain_size: 4.0,
            resolution: 40,
            tear_threshold: mesh.tear_threshold,
            highlight_distance_factor: mesh.highlight_distance_factor,
            pointer_frequency_boost: pointer.frequency_boost,
            pointer_amplitude_gain: pointer.amplitude_gain,
            pointer_phase_rate: pointer.phase_rate,
        }
    }
}

impl FieldTuning {
    pub fn mesh_tuning(&self) -> MeshTuning {
        MeshTuning {
            tear_threshold: self.tear_threshold,
            highlight_distance_factor: self.highlight_distance_factor,
        }
    }

    pub fn pointer_wave(&self) -> PointerWave {
        PointerWave {
            frequency_boost: self.pointer_frequency_boost,
            amplitude_gain: self.pointer_amplitude_gain,
            phase_rate: self.pointer_phase_rate,
        }
    }
}

/// Animationszeit. Läuft frameweise, nicht in Sekunden.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct AnimationClock {
    pub elapsed: f32,
    pub paused: bool,
    pub frame: u64,
}

impl AnimationClock {
    pub fn advance(&mut self, speed: f32) {
        if self.paused {
            return;
        }
        self.elapsed += speed;
        self.frame += 1;
    }
}

/// Position der interaktiven Quelle auf der Domänenebene. Der letzte Schreiber gewinnt.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerSource {
    pub position: Option<Vec3>,
}

impl PointerSource {
    pub fn set(&mut self, position: Vec3) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}

/// Aktuelle Größe der Anzeigefläche in logischen Pixeln.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Seitenverhältnis; bei degenerierter Höhe 1.0.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Diagnosewerte des zuletzt gebauten Frames.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FieldStats {
    pub min_height: f32,
    pub max_height: f32,
    pub tear_segments: usize,
    pub highlighted_lines: usize,
    pub layers_built: usize,
}

// ./src/debug/ui.rs
use crate::debug::visualization::sparkle::WandSettings;
use crate::sim::resources::{
    AMPLITUDE_RANGE, ANIMATION_SPEED_RANGE, AnimationClock, FREQUENCY_RANGE, FieldStats, FieldTuning,
    PointerSource, SOURCE_COUNT_RANGE, Viewport, WaveSettings,
};
use crate::sim::state::VisualizerState;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{Slider, Window},
};

#[allow(clippy::too_many_arguments)]
pub fn control_panel_ui_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<WaveSettings>,
    mut tuning: ResMut<FieldTuning>,
    mut clock: ResMut<AnimationClock>,
    mut wand: ResMut<WandSettings>,
    stats: Res<FieldStats>,
    pointer: Res<PointerSource>,
    viewport: Res<Viewport>,
    current_state: Res<State<VisualizerState>>,
    mut next_state: ResMut<NextState<VisualizerState>>,
) {
    let mut edited = *settings;

    Window::new("Hankies in the Wind")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Wellen");
            ui.add(Slider::new(&mut edited.frequency, FREQUENCY_RANGE).text("Frequenz"));
            ui.add(Slider::new(&mut edited.amplitude, AMPLITUDE_RANGE).text("Amplitude"));
            ui.add(Slider::new(&mut edited.num_sources, SOURCE_COUNT_RANGE).text("Quellen"));
            ui.add(
                Slider::new(&mut edited.animation_speed, ANIMATION_SPEED_RANGE)
                    .logarithmic(true)
                    .text("Geschwindigkeit"),
            );

            ui.horizontal(|ui| {
                if ui.button("↺ Reset").clicked() {
                    edited = WaveSettings::default();
                    info!("Wave settings reset to defaults.");
                }
                if ui
                    .button(if clock.paused { "▶ Play" } else { "⏸ Pause" })
                    .clicked()
                {
                    clock.paused = !clock.paused;
                }
            });

            ui.checkbox(&mut wand.enabled, "Zauberstab");

            ui.separator();
            ui.horizontal(|ui| match current_state.get() {
                VisualizerState::Running => {
                    if ui.button("⏏ Unmount").clicked() {
                        next_state.set(VisualizerState::Idle);
                    }
                }
                VisualizerState::Idle => {
                    if ui.button("⏵ Mount").clicked() {
                        next_state.set(VisualizerState::Running);
                    }
                }
            });

            ui.collapsing("Tuning", |ui| {
                ui.add(Slider::new(&mut tuning.resolution, 4..=96).text("Auflösung"));
                ui.add(Slider::new(&mut tuning.tear_threshold, 0.01..=1.0).text("Riss-Schwelle"));
                ui.add(
                    Slider::new(&mut tuning.highlight_distance_factor, 0.0..=6.0)
                        .text("Hervorhebung (× Schritt)"),
                );
            });

            ui.collapsing("Statistik", |ui| {
                ui.label(format!("Zeit: {:.4} (Frame {})", clock.elapsed, clock.frame));
                ui.label(format!(
                    "Höhe: {:.3} … {:.3}",
                    stats.min_height, stats.max_height
                ));
                ui.label(format!("Ebenen: {}", stats.layers_built));
                ui.label(format!("Risssegmente: {}", stats.tear_segments));
                ui.label(format!("Hervorgehoben: {}", stats.highlighted_lines));
                ui.label(match pointer.position {
                    Some(p) => format!("Zeiger: ({:.2}, {:.2})", p.x, p.z),
                    None => "Zeiger: –".to_string(),
                });
                ui.label(format!(
                    "Viewport: {:.0}×{:.0}",
                    viewport.width, viewport.height
                ));
            });
        });

    // Nur schreiben, wenn sich etwas geändert hat, damit Change Detection ruhig bleibt.
    let edited = edited.clamped();
    if edited != *settings {
        *settings = edited;
    }
}

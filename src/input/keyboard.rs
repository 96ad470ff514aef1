use crate::debug::visualization::sparkle::WandSettings;
use crate::sim::resources::{AnimationClock, WaveSettings};
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePause,
    ResetSettings,
    ToggleWand,
}

const SHORTCUTS: [(KeyCode, ShortcutAction); 3] = [
    (KeyCode::Space, ShortcutAction::TogglePause),
    (KeyCode::KeyR, ShortcutAction::ResetSettings),
    (KeyCode::KeyW, ShortcutAction::ToggleWand),
];

pub fn just_pressed_actions(keyboard_input: &ButtonInput<KeyCode>) -> Vec<ShortcutAction> {
    SHORTCUTS
        .iter()
        .filter(|(key, _)| keyboard_input.just_pressed(*key))
        .map(|(_, action)| *action)
        .collect()
}

pub fn apply_shortcut(
    action: ShortcutAction,
    settings: &mut WaveSettings,
    clock: &mut AnimationClock,
    wand: &mut WandSettings,
) {
    match action {
        ShortcutAction::TogglePause => clock.paused = !clock.paused,
        ShortcutAction::ResetSettings => {
            settings.reset();
            info!("Wave settings reset to defaults.");
        }
        ShortcutAction::ToggleWand => wand.enabled = !wand.enabled,
    }
}

pub fn keyboard_shortcuts_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut settings: ResMut<WaveSettings>,
    mut clock: ResMut<AnimationClock>,
    mut wand: ResMut<WandSettings>,
) {
    // Tastatureingaben in Textfeldern des Panels nicht abfangen
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    for action in just_pressed_actions(&keyboard_input) {
        apply_shortcut(action, &mut settings, &mut clock, &mut wand);
    }
}

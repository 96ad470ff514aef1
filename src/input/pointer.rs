// src/input/pointer.rs
use crate::sim::resources::{FieldTuning, PointerSource};
use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow};
use bevy_egui::EguiContexts;

/// Bildschirmposition (logische Pixel, Ursprung oben links) in normalisierte Gerätekoordinaten.
/// `None`, solange das Fenster keine Fläche hat.
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        2.0 * cursor.x / window_size.x - 1.0,
        1.0 - 2.0 * cursor.y / window_size.y,
    ))
}

/// NDC auf die Domänenebene: `ndc * size / 2`. Bildschirm-oben zeigt nach -z.
pub fn ndc_to_domain(ndc: Vec2, domain_size: f32) -> Vec3 {
    let half = domain_size / 2.0;
    Vec3::new(ndc.x * half, 0.0, -ndc.y * half)
}

/// Entscheidet, wo die Zeigerquelle in diesem Frame liegt.
/// Touch hat Vorrang vor der Maus; über dem Bedienfeld gibt es keine Quelle.
pub fn resolve_pointer(
    touch: Option<Vec2>,
    cursor: Option<Vec2>,
    window_size: Vec2,
    over_ui: bool,
    domain_size: f32,
) -> Option<Vec3> {
    if over_ui {
        return None;
    }
    let screen = touch.or(cursor)?;
    cursor_to_ndc(screen, window_size).map(|ndc| ndc_to_domain(ndc, domain_size))
}

pub fn track_pointer_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    mut cursor_left: EventReader<CursorLeft>,
    mut contexts: EguiContexts,
    tuning: Res<FieldTuning>,
    mut pointer: ResMut<PointerSource>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let left = cursor_left.read().count() > 0;
    let over_ui = contexts.ctx_mut().is_pointer_over_area();
    let touch = touches.iter().next().map(|touch| touch.position());
    let cursor = if left { None } else { window.cursor_position() };

    match resolve_pointer(
        touch,
        cursor,
        Vec2::new(window.width(), window.height()),
        over_ui,
        tuning.domain_size,
    ) {
        Some(position) => pointer.set(position),
        None => {
            if pointer.is_active() {
                debug!("Interactive source cleared.");
            }
            pointer.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_ndc_corners() {
        assert_eq!(cursor_to_ndc(Vec2::ZERO, WINDOW), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(cursor_to_ndc(WINDOW, WINDOW), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(cursor_to_ndc(WINDOW / 2.0, WINDOW), Some(Vec2::ZERO));
        assert_eq!(cursor_to_ndc(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn test_domain_mapping_scales_by_half_size() {
        let p = ndc_to_domain(Vec2::new(1.0, 1.0), 4.0);
        assert_eq!(p, Vec3::new(2.0, 0.0, -2.0));
        let q = ndc_to_domain(Vec2::new(-0.5, 0.0), 4.0);
        assert_eq!(q, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_touch_wins_over_cursor() {
        let p = resolve_pointer(Some(Vec2::ZERO), Some(WINDOW), WINDOW, false, 4.0);
        assert_eq!(p, Some(Vec3::new(-2.0, 0.0, -2.0)));
    }

    #[test]
    fn test_pointer_cleared_when_absent_or_over_ui() {
        assert_eq!(resolve_pointer(None, None, WINDOW, false, 4.0), None);
        assert_eq!(resolve_pointer(None, Some(WINDOW / 2.0), WINDOW, true, 4.0), None);
        assert_eq!(
            resolve_pointer(None, Some(WINDOW / 2.0), WINDOW, false, 4.0),
            Some(Vec3::ZERO)
        );
    }
}

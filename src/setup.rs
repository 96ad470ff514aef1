// ./src/setup.rs
use crate::sim::resources::Viewport;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::PanOrbitCamera;

pub const BACKGROUND_COLOR: Color = Color::rgb(0.03, 0.04, 0.07);

pub fn setup_scene(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(window) = windows.get_single() {
        viewport.resize(window.width(), window.height());
    }

    // Licht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.,
            range: 40.0,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0),
        ..default()
    });
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 3_000.0,
            ..default()
        },
        transform: Transform::from_xyz(-3.0, 5.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // Kamera. Linke Maustaste bleibt frei für die Zeigerquelle.
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 4.5, 5.5).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(7.0), // Start Entfernung
            ..default()
        },
    ));

    info!(
        "Scene ready, viewport {}x{}.",
        viewport.width, viewport.height
    );
}

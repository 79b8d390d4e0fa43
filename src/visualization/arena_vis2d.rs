use bevy::log::LogPlugin;
use bevy::math::primitives::{Circle, Rectangle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::Bounds;

#[derive(Component)]
struct BodyIndex(pub usize);

const TITLE: &str = "collisim";
/// Extra window space around the arena, in pixels
const MARGIN: f32 = 40.0;

fn body_color(i: usize) -> Color {
    match i {
        0 => Color::srgb(1.0, 0.5, 0.31), // coral
        _ => Color::srgb(0.53, 0.81, 0.92), // sky blue
    }
}

/// Arena coordinates grow down from the top-left corner, Bevy's grow up from the center
fn to_world(bounds: &Bounds, x: f64, y: f64) -> Vec2 {
    let c = bounds.center();
    Vec2::new((x - c.x) as f32, (c.y - y) as f32)
}

/// Open a window and drive the scenario from its frame clock.
///
/// Keys: `Space` (re)starts from the configured bodies, `P` pauses and resumes.
pub fn run_2d(scenario: Scenario) {
    let bounds = *scenario.engine.bounds();
    log::info!(
        "run_2d: starting Bevy 2D viewer, arena {}x{}",
        bounds.width(),
        bounds.height()
    );

    let window = Window {
        title: TITLE.to_string(),
        resolution: (
            bounds.width() as f32 + 2.0 * MARGIN,
            bounds.height() as f32 + 2.0 * MARGIN,
        )
            .into(),
        ..Default::default()
    };

    // env_logger already owns the global logger
    let plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        })
        .disable::<LogPlugin>();

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.16)))
        .add_plugins(plugins)
        .add_systems(Startup, setup_arena_system)
        .add_systems(
            Update,
            (operator_input_system, physics_step_system, sync_transforms_system).chain(),
        )
        .run();
}

fn setup_arena_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let bounds = scenario.engine.bounds();
    let floor = Rectangle::new(bounds.width() as f32, bounds.height() as f32);
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(floor)),
        material: materials.add(ColorMaterial::from(Color::srgb(0.2, 0.2, 0.25))),
        transform: Transform::from_xyz(0.0, 0.0, -1.0),
        ..Default::default()
    });

    // Unit circles scaled by radius, so a restart with new radii only touches transforms
    let unit = meshes.add(Circle::new(1.0));
    for (i, body) in scenario.engine.bodies().iter().enumerate() {
        let p = to_world(bounds, body.x.x, body.x.y);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(unit.clone()),
                material: materials.add(ColorMaterial::from(body_color(i))),
                transform: Transform::from_xyz(p.x, p.y, 0.0)
                    .with_scale(Vec3::splat(body.radius as f32)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn operator_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        if let Err(e) = scenario.restart() {
            log::error!("cannot start: {e}");
        }
    }
    if keys.just_pressed(KeyCode::KeyP) {
        let running = scenario.engine.toggle_pause();
        log::info!("{}", if running { "resumed" } else { "paused" });
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.advance_frame(time.delta_seconds_f64());
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let bounds = scenario.engine.bounds();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.engine.body(*i) {
            let p = to_world(bounds, b.x.x, b.x.y);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
            transform.scale = Vec3::splat(b.radius as f32);
        }
    }
}

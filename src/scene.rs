use bevy::app::AppExit;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::placement::PlaceInFrontOfCamera;
use crate::resources::XrSceneSettings;
use crate::xr_init::XrSessionStable;
use crate::xr_input::hands::roles::HandRoles;
use crate::xr_input::hands::tracking::{HandIndex, TrackedHand};

/// The camera placement is computed against. An XR backend drives its transform from
/// the head pose once a session runs.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneCamera;

/// Parent of the scene's content objects.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneGroup;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<XrSceneSettings>()
            .init_resource::<HandRoles>()
            .add_systems(Startup, spawn_scene)
            .add_systems(
                XrSessionStable,
                place_debug_object.run_if(|settings: Res<XrSceneSettings>| {
                    settings.place_debug_object_on_ready
                }),
            )
            .add_systems(Last, cleanup_on_exit);
    }
}

pub fn spawn_scene(mut commands: Commands, settings: Res<XrSceneSettings>) {
    commands.insert_resource(ClearColor(settings.clear_color));
    commands.insert_resource(AmbientLight {
        color: settings.ambient_color,
        brightness: settings.ambient_brightness,
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: settings.shadow_map_size,
    });

    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(settings.camera_position)
                .looking_at(settings.camera_target, Vec3::Y),
            projection: PerspectiveProjection {
                fov: settings.camera_fov.to_radians(),
                near: settings.camera_near,
                far: settings.camera_far,
                ..default()
            }
            .into(),
            ..default()
        },
        SceneCamera,
        Name::new("Scene Camera"),
    ));

    commands.spawn((
        DirectionalLightBundle {
            directional_light: DirectionalLight {
                shadows_enabled: true,
                ..default()
            },
            // straight down, so the default up vector would be parallel
            transform: Transform::from_translation(settings.light_position)
                .looking_at(Vec3::ZERO, Vec3::Z),
            ..default()
        },
        Name::new("Sun"),
    ));

    commands.spawn((SpatialBundle::default(), SceneGroup, Name::new("Scene Group")));

    if settings.spawn_hands {
        for index in 0..HandRoles::MAX_HANDS as u8 {
            commands.spawn((
                SpatialBundle::default(),
                TrackedHand::default(),
                HandIndex(index),
                Name::new(format!("Hand {index}")),
            ));
        }
    }
    info!("spawned XR scene");
}

fn place_debug_object(
    groups: Query<&Children, With<SceneGroup>>,
    mut place: EventWriter<PlaceInFrontOfCamera>,
) {
    let Some(&object) = groups.iter().flat_map(|children| children.iter()).next() else {
        debug!("scene group is empty, nothing to place");
        return;
    };
    place.send(PlaceInFrontOfCamera { object });
}

pub fn cleanup_on_exit(
    mut exit: EventReader<AppExit>,
    mut commands: Commands,
    groups: Query<Entity, With<SceneGroup>>,
    hands: Query<Entity, With<TrackedHand>>,
    mut roles: ResMut<HandRoles>,
) {
    if exit.read().last().is_none() {
        return;
    }
    info!("Initiating cleanup...");
    for entity in groups.iter().chain(hands.iter()) {
        commands.entity(entity).despawn_recursive();
    }
    roles.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xr_init::XrFrameAvailable;
    use crate::XrScenePlugin;

    fn scene_app(settings: XrSceneSettings) -> App {
        let mut app = App::new();
        app.add_plugins(XrScenePlugin { settings });
        app.update();
        app
    }

    fn count<T: Component>(app: &mut App) -> usize {
        app.world
            .query_filtered::<Entity, With<T>>()
            .iter(&app.world)
            .count()
    }

    #[test]
    fn spawns_camera_group_and_hands() {
        let mut app = scene_app(XrSceneSettings::default());
        assert_eq!(count::<SceneCamera>(&mut app), 1);
        assert_eq!(count::<SceneGroup>(&mut app), 1);
        assert_eq!(count::<TrackedHand>(&mut app), 2);

        let mut indices: Vec<u8> = app
            .world
            .query::<&HandIndex>()
            .iter(&app.world)
            .map(|index| **index)
            .collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1]);

        let roles = app.world.resource::<HandRoles>();
        assert_eq!(roles.tracked_hands().count(), 2);

        let camera = app
            .world
            .query_filtered::<&Transform, With<SceneCamera>>()
            .single(&app.world);
        assert_eq!(camera.translation, Vec3::new(0.0, 1.6, 3.0));
    }

    #[test]
    fn hands_are_optional() {
        let mut app = scene_app(XrSceneSettings {
            spawn_hands: false,
            ..default()
        });
        assert_eq!(count::<TrackedHand>(&mut app), 0);
    }

    #[test]
    fn exit_despawns_scene_and_hands() {
        let mut app = scene_app(XrSceneSettings::default());
        let group = app
            .world
            .query_filtered::<Entity, With<SceneGroup>>()
            .single(&app.world);
        let child = app.world.spawn(SpatialBundle::default()).id();
        app.world.entity_mut(group).add_child(child);
        app.update();

        app.world.send_event(AppExit);
        app.update();

        assert_eq!(count::<SceneGroup>(&mut app), 0);
        assert_eq!(count::<TrackedHand>(&mut app), 0);
        assert!(app.world.get_entity(child).is_none());
        assert_eq!(count::<SceneCamera>(&mut app), 1);
        assert_eq!(app.world.resource::<HandRoles>().tracked_hands().count(), 0);
    }

    #[test]
    fn debug_object_is_placed_once_stable() {
        let mut app = scene_app(XrSceneSettings {
            place_debug_object_on_ready: true,
            ..default()
        });
        let group = app
            .world
            .query_filtered::<Entity, With<SceneGroup>>()
            .single(&app.world);
        let object = app.world.spawn(SpatialBundle::default()).id();
        app.world.entity_mut(group).add_child(object);

        // no transform propagation in this app, hand it the poses directly
        let (camera, mut camera_global) = app
            .world
            .query_filtered::<(&Transform, &mut GlobalTransform), With<SceneCamera>>()
            .single_mut(&mut app.world);
        *camera_global = GlobalTransform::from(*camera);

        app.world.resource_mut::<XrFrameAvailable>().0 = true;
        app.update();
        app.update();

        let placed = app.world.get::<Transform>(object).unwrap();
        assert!(placed
            .translation
            .abs_diff_eq(Vec3::new(0.0, 1.6, 2.5), 1e-4));
    }
}

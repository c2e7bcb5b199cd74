use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::resources::XrSceneSettings;
use crate::scene::SceneCamera;

/// Moves `object` in front of the scene camera and turns it towards the camera.
///
/// The object should already be a child of the node it is anchored to; the placement
/// is computed in that parent's local space. Objects without a parent are placed in
/// world space.
#[derive(Event, Clone, Copy, Debug)]
pub struct PlaceInFrontOfCamera {
    pub object: Entity,
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<XrSceneSettings>()
            .add_event::<PlaceInFrontOfCamera>()
            .add_systems(
                PostUpdate,
                handle_placement_events.before(TransformSystem::TransformPropagate),
            );
    }
}

/// Places `object` `distance` meters in front of `camera`, expressed in the local space
/// of `anchor`, and orients it so its forward (`-Z`) looks at the camera.
///
/// Holds for any anchor translation and rotation. Non-uniform anchor scale is not
/// supported.
pub fn place_relative_to_camera(
    object: &mut Transform,
    anchor: &GlobalTransform,
    camera: &GlobalTransform,
    distance: f32,
) {
    let world_to_anchor = anchor.affine().inverse();
    let (_, anchor_rotation, _) = anchor.to_scale_rotation_translation();
    let inverse_anchor_rotation = anchor_rotation.inverse();

    let camera_position = camera.translation();
    let camera_position_local = world_to_anchor.transform_point3(camera_position);
    let camera_direction_local = inverse_anchor_rotation * camera_forward(camera);
    object.translation = camera_position_local + distance * camera_direction_local;

    // look-at happens in world space, then the anchor rotation is taken back out
    let object_world_position = anchor.transform_point(object.translation);
    let world_rotation = Transform::from_translation(object_world_position)
        .looking_at(camera_position, Vec3::Y)
        .rotation;
    object.rotation = inverse_anchor_rotation * world_rotation;
}

/// World space direction the camera looks along.
pub fn camera_forward(camera: &GlobalTransform) -> Vec3 {
    let (_, rotation, _) = camera.to_scale_rotation_translation();
    (rotation * Vec3::NEG_Z).normalize()
}

fn handle_placement_events(
    mut events: EventReader<PlaceInFrontOfCamera>,
    settings: Res<XrSceneSettings>,
    camera: Query<&GlobalTransform, With<SceneCamera>>,
    anchors: Query<&GlobalTransform>,
    mut objects: Query<(&mut Transform, Option<&Parent>)>,
) {
    for event in events.read() {
        let Ok(camera) = camera.get_single() else {
            warn!("no single scene camera, can't place {:?}", event.object);
            continue;
        };
        let Ok((mut transform, parent)) = objects.get_mut(event.object) else {
            warn!("can't place {:?}, it has no transform", event.object);
            continue;
        };
        let anchor = match parent {
            Some(parent) => match anchors.get(parent.get()) {
                Ok(anchor) => *anchor,
                Err(_) => {
                    warn!(
                        "parent {:?} of {:?} has no global transform, can't place it",
                        parent.get(),
                        event.object
                    );
                    continue;
                }
            },
            None => GlobalTransform::IDENTITY,
        };
        place_relative_to_camera(&mut transform, &anchor, camera, settings.placement_distance);
        debug!(
            "placed {:?} at {} in front of the camera",
            event.object, transform.translation
        );
    }
}

//! Runs the scene with a desktop stand-in for the XR backend: frames are always
//! available, both hands connect right away and the left hand pinches every second.

use bevy::prelude::*;
use bevy_xr_scene::prelude::*;
use bevy_xr_scene::scene::spawn_scene;
use bevy_xr_scene::xr_input::hands::tracking::handle_hand_connected;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    App::new()
        .add_plugins(DefaultXrScenePlugins)
        .add_plugins(HandJointGizmosPlugin)
        .add_systems(Startup, setup.after(spawn_scene))
        .add_systems(
            PreUpdate,
            (mark_frame_available, connect_hands.before(handle_hand_connected)),
        )
        .add_systems(Update, (animate_hands, log_pinches))
        .add_systems(XrSessionStable, (place_cube, log_hand_roles))
        .run();
    Ok(())
}

#[derive(Component)]
struct Cube;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    group: Query<Entity, With<SceneGroup>>,
) {
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(5.0, 5.0)),
        material: materials.add(Color::rgb(0.3, 0.5, 0.3)),
        ..default()
    });
    let cube = commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Cuboid::new(0.1, 0.1, 0.1)),
                material: materials.add(Color::rgb(0.8, 0.7, 0.6)),
                transform: Transform::from_xyz(0.0, 0.5, 0.0),
                ..default()
            },
            Cube,
        ))
        .id();
    if let Ok(group) = group.get_single() {
        commands.entity(group).add_child(cube);
    }
}

fn mark_frame_available(mut frame: ResMut<XrFrameAvailable>) {
    frame.0 = true;
}

fn connect_hands(
    hands: Query<(Entity, &TrackedHand, &HandIndex)>,
    mut connected: EventWriter<HandConnected>,
) {
    for (entity, hand, index) in &hands {
        if hand.is_ready() {
            continue;
        }
        let handedness = if **index == 0 { "left" } else { "right" };
        connected.send(HandConnected {
            hand: entity,
            handedness: handedness.into(),
            device: format!("desktop-hand-{}", **index),
        });
    }
}

fn animate_hands(time: Res<Time>, mut hands: Query<&mut TrackedHand>) {
    let gap = 0.02 + 0.015 * (time.elapsed_seconds() * std::f32::consts::TAU).sin();
    for mut hand in &mut hands {
        let Some(handedness) = hand.handedness() else {
            continue;
        };
        let side = if handedness == Handedness::Left { -0.2 } else { 0.2 };
        let wrist = Vec3::new(side, 1.2, 2.5);
        let gap = if handedness == Handedness::Left { gap } else { 0.05 };
        hand.set_joint(HandJoint::Wrist, Transform::from_translation(wrist));
        hand.set_joint(
            HandJoint::ThumbTip,
            Transform::from_translation(wrist + Vec3::new(0.0, 0.05, -0.1)),
        );
        hand.set_joint(
            HandJoint::IndexTip,
            Transform::from_translation(wrist + Vec3::new(0.0, 0.05 + gap, -0.1)),
        );
    }
}

fn log_pinches(mut started: EventReader<PinchStarted>, mut ended: EventReader<PinchEnded>) {
    for pinch in started.read() {
        info!("pinch started at {}", pinch.position);
    }
    for pinch in ended.read() {
        info!("pinch ended at {}", pinch.position);
    }
}

fn place_cube(cube: Query<Entity, With<Cube>>, mut place: EventWriter<PlaceInFrontOfCamera>) {
    for object in &cube {
        place.send(PlaceInFrontOfCamera { object });
    }
}

fn log_hand_roles(roles: Res<HandRoles>) {
    info!(
        "left hand: {:?}, right hand: {:?}",
        roles.left_hand(),
        roles.right_hand()
    );
}

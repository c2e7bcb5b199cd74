use bevy::prelude::*;
use bevy::utils::HashMap;

use super::roles::HandRoles;
use super::HandJoint;
use crate::resources::XrSceneSettings;
use crate::xr_input::Handedness;

/// A hand input source. The handedness arrives with [`HandConnected`], joint poses
/// are written by the XR backend every frame in world space.
///
/// The handedness here mirrors [`HandRoles`], which is the source of truth for roles.
#[derive(Component, Debug, Clone, Default)]
pub struct TrackedHand {
    handedness: Option<Handedness>,
    device: Option<String>,
    joints: HashMap<HandJoint, Transform>,
    pinching: bool,
}

impl TrackedHand {
    pub fn handedness(&self) -> Option<Handedness> {
        self.handedness
    }

    /// Ready once the runtime told us which hand this is.
    pub fn is_ready(&self) -> bool {
        self.handedness.is_some()
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn joint(&self, joint: HandJoint) -> Option<&Transform> {
        self.joints.get(&joint)
    }

    /// Looks a joint up by its WebXR name, e.g. `"index-finger-tip"`.
    pub fn joint_by_name(&self, name: &str) -> Option<&Transform> {
        name.parse().ok().and_then(|joint| self.joint(joint))
    }

    pub fn joints(&self) -> impl Iterator<Item = (HandJoint, &Transform)> {
        self.joints.iter().map(|(joint, pose)| (*joint, pose))
    }

    pub fn set_joint(&mut self, joint: HandJoint, pose: Transform) {
        self.joints.insert(joint, pose);
    }

    /// Drops all joint poses, e.g. when tracking is lost for a frame.
    pub fn clear_joints(&mut self) {
        self.joints.clear();
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }
}

/// Which runtime hand slot an entity stands for (0 or 1).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Deref)]
pub struct HandIndex(pub u8);

/// Sent by the XR backend once the runtime identified a hand input source.
#[derive(Event, Clone, Debug)]
pub struct HandConnected {
    pub hand: Entity,
    /// Handedness as reported by the runtime (`"left"`, `"right"` or `"none"`).
    pub handedness: String,
    pub device: String,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PinchStarted {
    pub hand: Entity,
    pub position: Vec3,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PinchEnded {
    pub hand: Entity,
    pub position: Vec3,
}

/// World position of a pinch: the index finger tip.
pub fn pinch_position(hand: &TrackedHand) -> Option<Vec3> {
    hand.joint(HandJoint::IndexTip).map(|pose| pose.translation)
}

pub fn untrack_removed_hands(
    mut roles: ResMut<HandRoles>,
    mut removed: RemovedComponents<TrackedHand>,
) {
    for hand in removed.read() {
        if roles.untrack(hand) {
            debug!("hand {:?} is gone, releasing its role", hand);
        }
    }
}

pub fn register_tracked_hands(
    mut roles: ResMut<HandRoles>,
    new_hands: Query<Entity, Added<TrackedHand>>,
) {
    for hand in &new_hands {
        match roles.track(hand) {
            Ok(()) => debug!("tracking hand {:?}", hand),
            Err(err) => warn!("{err}"),
        }
    }
}

pub fn handle_hand_connected(
    mut events: EventReader<HandConnected>,
    mut roles: ResMut<HandRoles>,
    mut hands: Query<&mut TrackedHand>,
) {
    for event in events.read() {
        let Ok(mut hand) = hands.get_mut(event.hand) else {
            warn!("{:?} connected but is not a tracked hand", event.hand);
            continue;
        };
        let handedness = Handedness::from_runtime(&event.handedness);
        if let Err(err) = roles.assign(event.hand, handedness) {
            error!("{err}");
            continue;
        }
        if handedness == Handedness::Unknown {
            warn!(
                "hand {:?} connected without handedness ({:?})",
                event.hand, event.handedness
            );
        }
        hand.handedness = Some(handedness);
        hand.device = Some(event.device.clone());
        info!(
            "hand {:?} connected as {} from {}",
            event.hand, handedness, event.device
        );
    }
}

pub fn detect_pinches(
    settings: Res<XrSceneSettings>,
    mut hands: Query<(Entity, &mut TrackedHand)>,
    mut started: EventWriter<PinchStarted>,
    mut ended: EventWriter<PinchEnded>,
) {
    for (entity, mut hand) in &mut hands {
        let (Some(thumb), Some(index)) = (
            hand.joint(HandJoint::ThumbTip),
            hand.joint(HandJoint::IndexTip),
        ) else {
            continue;
        };
        let distance = thumb.translation.distance(index.translation);
        let position = index.translation;
        if hand.pinching && distance > settings.pinch_end_distance() {
            hand.pinching = false;
            ended.send(PinchEnded {
                hand: entity,
                position,
            });
        } else if !hand.pinching && distance <= settings.pinch_start_distance() {
            hand.pinching = true;
            started.send(PinchStarted {
                hand: entity,
                position,
            });
        }
    }
}

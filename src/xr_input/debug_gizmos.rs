use bevy::prelude::*;

use super::hands::tracking::TrackedHand;
use super::hands::HandJoint;

const JOINT_RADIUS: f32 = 0.008;
const TIP_RADIUS: f32 = 0.006;

/// Draws a sphere at every tracked hand joint, coloured by finger.
/// Needs bevy's gizmo plugin, so it is not part of [`XrScenePlugin`](crate::XrScenePlugin).
#[derive(Default)]
pub struct HandJointGizmosPlugin;

impl Plugin for HandJointGizmosPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, draw_hand_joint_gizmos);
    }
}

fn draw_hand_joint_gizmos(mut gizmos: Gizmos, hands: Query<&TrackedHand>) {
    for hand in &hands {
        for (joint, pose) in hand.joints() {
            let radius = if joint.is_tip() { TIP_RADIUS } else { JOINT_RADIUS };
            let color = if hand.is_pinching() && joint.is_tip() {
                Color::WHITE
            } else {
                gizmo_color(joint)
            };
            gizmos.sphere(pose.translation, pose.rotation, radius, color);
        }
    }
}

fn gizmo_color(joint: HandJoint) -> Color {
    match joint {
        HandJoint::Wrist => Color::GRAY,
        j if j.is_thumb() => Color::RED,
        j if j.is_index() => Color::ORANGE,
        j if j.is_middle() => Color::YELLOW,
        j if j.is_ring() => Color::GREEN,
        j if j.is_little() => Color::BLUE,
        // should be impossible to hit
        _ => Color::rgb(1.0, 0.0, 1.0),
    }
}

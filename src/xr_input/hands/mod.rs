use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use thiserror::Error;

pub mod roles;
pub mod tracking;

pub const HAND_JOINT_COUNT: usize = 25;

/// A tracked hand joint, named after the WebXR hand joints.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum HandJoint {
    Wrist = 0,
    ThumbMetacarpal = 1,
    ThumbProximal = 2,
    ThumbDistal = 3,
    ThumbTip = 4,
    IndexMetacarpal = 5,
    IndexProximal = 6,
    IndexIntermediate = 7,
    IndexDistal = 8,
    IndexTip = 9,
    MiddleMetacarpal = 10,
    MiddleProximal = 11,
    MiddleIntermediate = 12,
    MiddleDistal = 13,
    MiddleTip = 14,
    RingMetacarpal = 15,
    RingProximal = 16,
    RingIntermediate = 17,
    RingDistal = 18,
    RingTip = 19,
    LittleMetacarpal = 20,
    LittleProximal = 21,
    LittleIntermediate = 22,
    LittleDistal = 23,
    LittleTip = 24,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hand joint `{0}`")]
pub struct UnknownJointName(pub String);

impl HandJoint {
    pub const fn is_thumb(&self) -> bool {
        matches!(
            self,
            HandJoint::ThumbMetacarpal
                | HandJoint::ThumbProximal
                | HandJoint::ThumbDistal
                | HandJoint::ThumbTip
        )
    }
    pub const fn is_index(&self) -> bool {
        matches!(
            self,
            HandJoint::IndexMetacarpal
                | HandJoint::IndexProximal
                | HandJoint::IndexIntermediate
                | HandJoint::IndexDistal
                | HandJoint::IndexTip
        )
    }
    pub const fn is_middle(&self) -> bool {
        matches!(
            self,
            HandJoint::MiddleMetacarpal
                | HandJoint::MiddleProximal
                | HandJoint::MiddleIntermediate
                | HandJoint::MiddleDistal
                | HandJoint::MiddleTip
        )
    }
    pub const fn is_ring(&self) -> bool {
        matches!(
            self,
            HandJoint::RingMetacarpal
                | HandJoint::RingProximal
                | HandJoint::RingIntermediate
                | HandJoint::RingDistal
                | HandJoint::RingTip
        )
    }
    pub const fn is_little(&self) -> bool {
        matches!(
            self,
            HandJoint::LittleMetacarpal
                | HandJoint::LittleProximal
                | HandJoint::LittleIntermediate
                | HandJoint::LittleDistal
                | HandJoint::LittleTip
        )
    }
    pub const fn is_tip(&self) -> bool {
        matches!(
            self,
            HandJoint::ThumbTip
                | HandJoint::IndexTip
                | HandJoint::MiddleTip
                | HandJoint::RingTip
                | HandJoint::LittleTip
        )
    }

    pub const fn get_all_joints() -> [HandJoint; HAND_JOINT_COUNT] {
        [
            HandJoint::Wrist,
            HandJoint::ThumbMetacarpal,
            HandJoint::ThumbProximal,
            HandJoint::ThumbDistal,
            HandJoint::ThumbTip,
            HandJoint::IndexMetacarpal,
            HandJoint::IndexProximal,
            HandJoint::IndexIntermediate,
            HandJoint::IndexDistal,
            HandJoint::IndexTip,
            HandJoint::MiddleMetacarpal,
            HandJoint::MiddleProximal,
            HandJoint::MiddleIntermediate,
            HandJoint::MiddleDistal,
            HandJoint::MiddleTip,
            HandJoint::RingMetacarpal,
            HandJoint::RingProximal,
            HandJoint::RingIntermediate,
            HandJoint::RingDistal,
            HandJoint::RingTip,
            HandJoint::LittleMetacarpal,
            HandJoint::LittleProximal,
            HandJoint::LittleIntermediate,
            HandJoint::LittleDistal,
            HandJoint::LittleTip,
        ]
    }

    /// The joint name used by the WebXR hand input module.
    pub const fn webxr_name(&self) -> &'static str {
        match self {
            HandJoint::Wrist => "wrist",
            HandJoint::ThumbMetacarpal => "thumb-metacarpal",
            HandJoint::ThumbProximal => "thumb-phalanx-proximal",
            HandJoint::ThumbDistal => "thumb-phalanx-distal",
            HandJoint::ThumbTip => "thumb-tip",
            HandJoint::IndexMetacarpal => "index-finger-metacarpal",
            HandJoint::IndexProximal => "index-finger-phalanx-proximal",
            HandJoint::IndexIntermediate => "index-finger-phalanx-intermediate",
            HandJoint::IndexDistal => "index-finger-phalanx-distal",
            HandJoint::IndexTip => "index-finger-tip",
            HandJoint::MiddleMetacarpal => "middle-finger-metacarpal",
            HandJoint::MiddleProximal => "middle-finger-phalanx-proximal",
            HandJoint::MiddleIntermediate => "middle-finger-phalanx-intermediate",
            HandJoint::MiddleDistal => "middle-finger-phalanx-distal",
            HandJoint::MiddleTip => "middle-finger-tip",
            HandJoint::RingMetacarpal => "ring-finger-metacarpal",
            HandJoint::RingProximal => "ring-finger-phalanx-proximal",
            HandJoint::RingIntermediate => "ring-finger-phalanx-intermediate",
            HandJoint::RingDistal => "ring-finger-phalanx-distal",
            HandJoint::RingTip => "ring-finger-tip",
            HandJoint::LittleMetacarpal => "pinky-finger-metacarpal",
            HandJoint::LittleProximal => "pinky-finger-phalanx-proximal",
            HandJoint::LittleIntermediate => "pinky-finger-phalanx-intermediate",
            HandJoint::LittleDistal => "pinky-finger-phalanx-distal",
            HandJoint::LittleTip => "pinky-finger-tip",
        }
    }
}

impl FromStr for HandJoint {
    type Err = UnknownJointName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandJoint::get_all_joints()
            .into_iter()
            .find(|joint| joint.webxr_name() == s)
            .ok_or_else(|| UnknownJointName(s.to_owned()))
    }
}

impl fmt::Display for HandJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.webxr_name())
    }
}

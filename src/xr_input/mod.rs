pub mod debug_gizmos;
pub mod hands;

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use self::hands::roles::HandRoles;
use self::hands::tracking::{
    detect_pinches, handle_hand_connected, register_tracked_hands, untrack_removed_hands,
    HandConnected, PinchEnded, PinchStarted,
};
use crate::resources::XrSceneSettings;

/// Which hand a tracked input source belongs to, as reported by the XR runtime.
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Reflect)]
pub enum Handedness {
    Left,
    Right,
    /// The runtime reported `"none"` or something unrecognised.
    Unknown,
}

impl Handedness {
    /// The opposite role, if this is a real hand.
    pub fn opposite(self) -> Option<Handedness> {
        match self {
            Handedness::Left => Some(Handedness::Right),
            Handedness::Right => Some(Handedness::Left),
            Handedness::Unknown => None,
        }
    }

    /// Reads the handedness string of an input source. Anything but `left`/`right`
    /// is [`Handedness::Unknown`].
    pub fn from_runtime(handedness: &str) -> Handedness {
        match handedness.trim() {
            s if s.eq_ignore_ascii_case("left") => Handedness::Left,
            s if s.eq_ignore_ascii_case("right") => Handedness::Right,
            _ => Handedness::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
            Handedness::Unknown => "none",
        }
    }
}

impl FromStr for Handedness {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Handedness::from_runtime(s))
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hand connection handling, role resolution and pinch detection.
#[derive(Copy, Clone)]
pub struct XrHandInputPlugin;

impl Plugin for XrHandInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HandRoles>()
            .init_resource::<XrSceneSettings>()
            .add_event::<HandConnected>()
            .add_event::<PinchStarted>()
            .add_event::<PinchEnded>()
            .add_systems(
                PreUpdate,
                (
                    untrack_removed_hands,
                    register_tracked_hands,
                    handle_hand_connected,
                )
                    .chain(),
            )
            .add_systems(Update, detect_pinches);
    }
}

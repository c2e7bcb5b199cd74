use bevy::ecs::entity::Entity;
use thiserror::Error;

use crate::xr_input::Handedness;

/// Errors reported while assigning or resolving hand roles.
///
/// None of these are fatal; systems log them and keep running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("hand {0:?} does not have a handedness")]
    UnknownHandedness(Entity),
    #[error("hand {0:?} is not one of the tracked hands")]
    UntrackedHand(Entity),
    #[error("hand {hand:?} already has handedness {existing}, ignoring {reported}")]
    AlreadyAssigned {
        hand: Entity,
        existing: Handedness,
        reported: Handedness,
    },
    #[error("hand {rejected:?} reported {handedness} but {existing:?} already holds that role")]
    DuplicateHandedness {
        handedness: Handedness,
        existing: Entity,
        rejected: Entity,
    },
    #[error("only two hands can be tracked, refusing to track {0:?}")]
    TooManyHands(Entity),
}

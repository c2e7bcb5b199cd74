use bevy::prelude::*;
use bevy::utils::HashMap;

use crate::error::HandError;
use crate::xr_input::Handedness;

/// Maps the two tracked hands to their left/right roles.
///
/// Roles only resolve once both hands are ready, i.e. have a handedness assigned.
/// Assignment is explicit: a second hand claiming an already taken role is rejected
/// instead of being inferred by elimination.
#[derive(Resource, Default, Debug, Clone)]
pub struct HandRoles {
    hands: Vec<(Entity, Option<Handedness>)>,
    roles: HashMap<Handedness, Entity>,
}

impl HandRoles {
    pub const MAX_HANDS: usize = 2;

    /// Starts tracking `hand` with no handedness yet.
    pub fn track(&mut self, hand: Entity) -> Result<(), HandError> {
        if self.is_tracked(hand) {
            return Ok(());
        }
        if self.hands.len() >= Self::MAX_HANDS {
            return Err(HandError::TooManyHands(hand));
        }
        self.hands.push((hand, None));
        Ok(())
    }

    /// Forgets `hand` and the role it held, freeing the slot for a new hand.
    /// Returns whether the hand was tracked.
    pub fn untrack(&mut self, hand: Entity) -> bool {
        let Some(slot) = self.hands.iter().position(|(e, _)| *e == hand) else {
            return false;
        };
        self.hands.remove(slot);
        self.roles.retain(|_, e| *e != hand);
        true
    }

    pub fn is_tracked(&self, hand: Entity) -> bool {
        self.hands.iter().any(|(e, _)| *e == hand)
    }

    /// Records the handedness the runtime reported for `hand`.
    ///
    /// A hand's handedness is set once. [`Handedness::Unknown`] marks the hand ready
    /// without giving it a role.
    pub fn assign(&mut self, hand: Entity, handedness: Handedness) -> Result<(), HandError> {
        let slot = self
            .hands
            .iter()
            .position(|(e, _)| *e == hand)
            .ok_or(HandError::UntrackedHand(hand))?;
        if let Some(existing) = self.hands[slot].1 {
            return Err(HandError::AlreadyAssigned {
                hand,
                existing,
                reported: handedness,
            });
        }
        if handedness != Handedness::Unknown {
            if let Some(&existing) = self.roles.get(&handedness) {
                return Err(HandError::DuplicateHandedness {
                    handedness,
                    existing,
                    rejected: hand,
                });
            }
            self.roles.insert(handedness, hand);
        }
        self.hands[slot].1 = Some(handedness);
        Ok(())
    }

    /// The handedness of a tracked hand, `None` while it is not ready.
    pub fn handedness(&self, hand: Entity) -> Option<Handedness> {
        self.hands
            .iter()
            .find(|(e, _)| *e == hand)
            .and_then(|(_, handedness)| *handedness)
    }

    pub fn both_ready(&self) -> bool {
        self.hands.len() == Self::MAX_HANDS
            && self.hands.iter().all(|(_, handedness)| handedness.is_some())
    }

    pub fn hand(&self, handedness: Handedness) -> Option<Entity> {
        if !self.both_ready() {
            return None;
        }
        self.roles.get(&handedness).copied()
    }

    pub fn left_hand(&self) -> Option<Entity> {
        self.hand(Handedness::Left)
    }

    pub fn right_hand(&self) -> Option<Entity> {
        self.hand(Handedness::Right)
    }

    /// The hand opposite to `hand`.
    ///
    /// `Ok(None)` while the hands are not both ready.
    pub fn other_hand(&self, hand: Entity) -> Result<Option<Entity>, HandError> {
        if !self.both_ready() {
            return Ok(None);
        }
        let handedness = self
            .handedness(hand)
            .ok_or(HandError::UntrackedHand(hand))?;
        match handedness.opposite() {
            Some(opposite) => Ok(self.hand(opposite)),
            None => {
                let err = HandError::UnknownHandedness(hand);
                error!("{err}");
                Err(err)
            }
        }
    }

    pub fn tracked_hands(&self) -> impl Iterator<Item = Entity> + '_ {
        self.hands.iter().map(|(e, _)| *e)
    }

    pub fn clear(&mut self) {
        self.hands.clear();
        self.roles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands() -> (HandRoles, Entity, Entity) {
        let (a, b) = (Entity::from_raw(10), Entity::from_raw(11));
        let mut roles = HandRoles::default();
        roles.track(a).unwrap();
        roles.track(b).unwrap();
        (roles, a, b)
    }

    #[test]
    fn unavailable_until_both_hands_ready() {
        let (mut roles, a, b) = hands();
        assert_eq!(roles.left_hand(), None);
        assert_eq!(roles.right_hand(), None);
        assert_eq!(roles.other_hand(a), Ok(None));

        roles.assign(a, Handedness::Right).unwrap();
        assert_eq!(roles.left_hand(), None);
        assert_eq!(roles.right_hand(), None);
        assert_eq!(roles.other_hand(a), Ok(None));

        roles.assign(b, Handedness::Left).unwrap();
        assert_eq!(roles.left_hand(), Some(b));
        assert_eq!(roles.right_hand(), Some(a));
    }

    #[test]
    fn other_hand_is_complementary() {
        let (mut roles, a, b) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        roles.assign(b, Handedness::Right).unwrap();

        let left = roles.left_hand().unwrap();
        let right = roles.right_hand().unwrap();
        assert_ne!(left, right);
        assert_eq!(roles.other_hand(left), Ok(Some(right)));
        assert_eq!(roles.other_hand(right), Ok(Some(left)));
    }

    #[test]
    fn unknown_handedness_is_an_error() {
        let (mut roles, a, b) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        roles.assign(b, Handedness::Unknown).unwrap();

        assert!(roles.both_ready());
        assert_eq!(roles.other_hand(b), Err(HandError::UnknownHandedness(b)));
        assert_eq!(roles.left_hand(), Some(a));
        assert_eq!(roles.right_hand(), None);
        assert_eq!(roles.other_hand(a), Ok(None));
    }

    #[test]
    fn duplicate_handedness_is_rejected() {
        let (mut roles, a, b) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        assert_eq!(
            roles.assign(b, Handedness::Left),
            Err(HandError::DuplicateHandedness {
                handedness: Handedness::Left,
                existing: a,
                rejected: b,
            })
        );
        assert!(!roles.both_ready());
        assert_eq!(roles.left_hand(), None);
        assert_eq!(roles.handedness(b), None);
    }

    #[test]
    fn handedness_is_assigned_once() {
        let (mut roles, a, _) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        assert_eq!(
            roles.assign(a, Handedness::Right),
            Err(HandError::AlreadyAssigned {
                hand: a,
                existing: Handedness::Left,
                reported: Handedness::Right,
            })
        );
        assert_eq!(roles.handedness(a), Some(Handedness::Left));
    }

    #[test]
    fn only_two_hands_are_tracked() {
        let (mut roles, a, _) = hands();
        let third = Entity::from_raw(12);
        assert_eq!(roles.track(a), Ok(()));
        assert_eq!(roles.track(third), Err(HandError::TooManyHands(third)));
        assert_eq!(
            roles.assign(third, Handedness::Left),
            Err(HandError::UntrackedHand(third))
        );
    }

    #[test]
    fn untracked_hand_frees_its_role() {
        let (mut roles, a, b) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        roles.assign(b, Handedness::Right).unwrap();

        assert!(roles.untrack(a));
        assert!(!roles.untrack(a));
        assert!(!roles.is_tracked(a));
        assert!(!roles.both_ready());
        assert_eq!(roles.left_hand(), None);

        let c = Entity::from_raw(12);
        roles.track(c).unwrap();
        roles.assign(c, Handedness::Left).unwrap();
        assert_eq!(roles.left_hand(), Some(c));
        assert_eq!(roles.right_hand(), Some(b));
    }

    #[test]
    fn other_hand_of_a_stranger_is_an_error() {
        let (mut roles, a, b) = hands();
        roles.assign(a, Handedness::Left).unwrap();
        roles.assign(b, Handedness::Right).unwrap();
        let stranger = Entity::from_raw(99);
        assert_eq!(
            roles.other_hand(stranger),
            Err(HandError::UntrackedHand(stranger))
        );
    }
}

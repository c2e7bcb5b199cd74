pub mod schedules;
pub use schedules::*;

use bevy::prelude::*;

/// How far the XR session has come since it was started.
///
/// A session can report itself as started before the runtime produces frames, and the
/// head pose of the very first frame is not reliable. The readiness only moves forward:
/// `NotStarted -> FirstFrameSeen -> Stable`.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Reflect, Debug, Default)]
pub enum XrSessionReadiness {
    /// No XR frame has been produced yet.
    #[default]
    NotStarted,
    /// One XR frame was rendered, its poses are not used.
    FirstFrameSeen,
    /// Poses can be used for initialization.
    Stable,
}

impl XrSessionReadiness {
    /// Moves the gate forward by one frame.
    ///
    /// Returns `true` only on the call that reaches [`XrSessionReadiness::Stable`].
    pub fn advance(&mut self, frame_available: bool) -> bool {
        match *self {
            XrSessionReadiness::NotStarted => {
                if frame_available {
                    *self = XrSessionReadiness::FirstFrameSeen;
                }
                false
            }
            XrSessionReadiness::FirstFrameSeen => {
                *self = XrSessionReadiness::Stable;
                true
            }
            XrSessionReadiness::Stable => false,
        }
    }
}

/// Set by the XR backend while the runtime has a current frame for this update.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Reflect, Debug, Default, Deref, DerefMut)]
pub struct XrFrameAvailable(pub bool);

/// Number of frames that went through the readiness gate. Every frame is rendered,
/// gated or not. Backends and diagnostics read it as the XR frame counter.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Reflect, Debug, Default, Deref)]
pub struct XrFramesRendered(u64);

pub struct XrSessionReadinessPlugin;

impl Plugin for XrSessionReadinessPlugin {
    fn build(&self, app: &mut App) {
        add_schedules(app);
        app.init_resource::<XrSessionReadiness>()
            .init_resource::<XrFrameAvailable>()
            .init_resource::<XrFramesRendered>()
            .add_systems(PreUpdate, advance_session_readiness);
    }
}

/// A [`Condition`](bevy::ecs::schedule::Condition) system that says if XR poses are stable
pub fn session_stable(readiness: Option<Res<XrSessionReadiness>>) -> bool {
    matches!(readiness.as_deref(), Some(XrSessionReadiness::Stable))
}

/// A [`Condition`](bevy::ecs::schedule::Condition) system that says if at least one XR frame was seen
pub fn session_started(readiness: Option<Res<XrSessionReadiness>>) -> bool {
    readiness.is_some_and(|r| *r != XrSessionReadiness::NotStarted)
}

pub fn advance_session_readiness(world: &mut World) {
    let frame_available = world
        .get_resource::<XrFrameAvailable>()
        .is_some_and(|available| **available);
    world.resource_mut::<XrFramesRendered>().0 += 1;

    let mut readiness = *world.resource::<XrSessionReadiness>();
    let became_stable = readiness.advance(frame_available);
    world
        .resource_mut::<XrSessionReadiness>()
        .set_if_neq(readiness);

    match readiness {
        XrSessionReadiness::FirstFrameSeen => debug!("first XR frame seen, waiting one more frame"),
        XrSessionReadiness::Stable if became_stable => {
            info!("XR session initialized, running session stable schedule");
            world.run_schedule(XrSessionStable);
        }
        _ => {}
    }
}

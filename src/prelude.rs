use bevy::ecs::schedule::{IntoSystemConfigs, SystemConfigs};

pub use crate::error::HandError;
pub use crate::placement::{place_relative_to_camera, PlaceInFrontOfCamera};
pub use crate::resources::XrSceneSettings;
pub use crate::scene::{SceneCamera, SceneGroup};
pub use crate::xr_init::{
    session_stable, session_started, XrFrameAvailable, XrSessionReadiness, XrSessionStable,
};
pub use crate::xr_input::debug_gizmos::HandJointGizmosPlugin;
pub use crate::xr_input::hands::roles::HandRoles;
pub use crate::xr_input::hands::tracking::{
    pinch_position, HandConnected, HandIndex, PinchEnded, PinchStarted, TrackedHand,
};
pub use crate::xr_input::hands::HandJoint;
pub use crate::xr_input::Handedness;
pub use crate::{DefaultXrScenePlugins, XrScenePlugin};

pub trait XrSystems<Marker> {
    /// Only run once XR poses are stable.
    fn xr_stable_only(self) -> SystemConfigs;
}

impl<T: IntoSystemConfigs<M>, M> XrSystems<M> for T {
    fn xr_stable_only(self) -> SystemConfigs {
        self.into_configs().run_if(session_stable)
    }
}

pub mod error;
pub mod placement;
pub mod prelude;
pub mod resources;
pub mod scene;
pub mod xr_init;
pub mod xr_input;

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use placement::PlacementPlugin;
use resources::XrSceneSettings;
use scene::ScenePlugin;
use xr_init::XrSessionReadinessPlugin;
use xr_input::XrHandInputPlugin;

/// Adds the hand-tracked XR scene to an App: session readiness, hand roles,
/// camera-relative placement and the scene itself.
///
/// An XR backend is expected to report frames through
/// [`XrFrameAvailable`](xr_init::XrFrameAvailable), send
/// [`HandConnected`](xr_input::hands::tracking::HandConnected) events and write joint
/// poses into [`TrackedHand`](xr_input::hands::tracking::TrackedHand).
#[derive(Default)]
pub struct XrScenePlugin {
    pub settings: XrSceneSettings,
}

impl Plugin for XrScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone());
        app.add_plugins((
            XrSessionReadinessPlugin,
            XrHandInputPlugin,
            PlacementPlugin,
            ScenePlugin,
        ));
    }
}

pub struct DefaultXrScenePlugins;

impl PluginGroup for DefaultXrScenePlugins {
    fn build(self) -> PluginGroupBuilder {
        DefaultPlugins.build().add(XrScenePlugin::default())
    }
}

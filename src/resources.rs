use bevy::prelude::*;

/// Settings for the scene, hands and placement. Inserted by
/// [`XrScenePlugin`](crate::XrScenePlugin); every plugin falls back to the defaults
/// when it is used on its own.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct XrSceneSettings {
    pub clear_color: Color,
    /// Flat-screen camera position, before an XR session takes over the head pose.
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// Vertical field of view, in degrees.
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    pub light_position: Vec3,
    pub shadow_map_size: usize,
    /// Distance in front of the camera, in meters, used by
    /// [`PlaceInFrontOfCamera`](crate::placement::PlaceInFrontOfCamera).
    pub placement_distance: f32,
    /// Thumb tip to index tip distance, in meters, around which a pinch toggles.
    pub pinch_distance: f32,
    pub pinch_hysteresis: f32,
    /// Spawn the two tracked hand entities with the scene.
    pub spawn_hands: bool,
    /// Move the first object of the scene group in front of the camera once the
    /// session is stable.
    pub place_debug_object_on_ready: bool,
}

impl Default for XrSceneSettings {
    fn default() -> Self {
        Self {
            clear_color: Color::rgb_u8(0x20, 0x20, 0x20),
            camera_position: Vec3::new(0.0, 1.6, 3.0),
            camera_target: Vec3::new(0.0, 1.6, 0.0),
            camera_fov: 50.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            ambient_color: Color::rgb_u8(0x80, 0x80, 0x80),
            ambient_brightness: 300.0,
            light_position: Vec3::new(0.0, 6.0, 0.0),
            shadow_map_size: 4096,
            placement_distance: 0.5,
            pinch_distance: 0.02,
            pinch_hysteresis: 0.005,
            spawn_hands: true,
            place_debug_object_on_ready: false,
        }
    }
}

impl XrSceneSettings {
    pub fn pinch_start_distance(&self) -> f32 {
        self.pinch_distance - self.pinch_hysteresis
    }

    pub fn pinch_end_distance(&self) -> f32 {
        self.pinch_distance + self.pinch_hysteresis
    }
}

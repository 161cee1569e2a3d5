use bevy_ecs::prelude::*;

use crate::math::Vec3f;

// Interaction policy. Built once at startup and read by the systems;
// tests swap in their own values.
#[derive(Resource, Debug, Clone)]
pub struct Settings {
    // Mesh name prefix that marks a prop as pickable.
    pub selectable_prefix: String,
    // Mesh name prefix that gets a fixed body instead of a dynamic one.
    pub static_prefix: String,
    pub highlight_color: Vec3f,
    pub highlight_inner_glow: bool,
    // When true, highlighting a new prop clears every previous highlight,
    // capping the set at one member.
    pub exclusive_highlight: bool,
    // Forward travel per frame while the trigger is held.
    pub move_step: f32,
    pub gravity: Vec3f,
    pub world_asset: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selectable_prefix: String::from("CowBoy"),
            static_prefix: String::from("Plane"),
            highlight_color: Vec3f::new(0.0, 1.0, 0.0),
            highlight_inner_glow: false,
            exclusive_highlight: true,
            move_step: 0.2,
            gravity: Vec3f::new(0.0, -9.81, 0.0),
            world_asset: String::from("showcase_scene.obj"),
        }
    }
}

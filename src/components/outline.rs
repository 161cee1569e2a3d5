use bevy_ecs::prelude::*;

use crate::math::Vec3f;

// Annotation the external renderer draws the emphasis effect from.
#[derive(Debug, Component)]
pub struct Outline {
    pub color: Vec3f,
    pub inner_glow: bool,
}

// Marks a prop the pointer may toggle a highlight on.
#[derive(Debug, Component)]
pub struct Selectable;

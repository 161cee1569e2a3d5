use bevy_ecs::prelude::*;

use crate::components::Transform;
use crate::math::Vec3f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Hemispheric,
    Directional,
}

#[derive(Debug, Component)]
pub struct Light {
    pub kind: LightKind,
    pub direction: Vec3f,
    pub intensity: f32,
}

impl Light {
    pub fn spawn(mut commands: Commands) {
        commands.spawn((
            Light {
                kind: LightKind::Hemispheric,
                direction: Vec3f::new(0.0, 1.0, 0.0),
                intensity: 0.5,
            },
            Transform::default(),
        ));
        commands.spawn((
            Light {
                kind: LightKind::Directional,
                direction: Vec3f::new(3.0, -1.0, 0.0),
                intensity: 0.8,
            },
            Transform::default(),
        ));
    }
}

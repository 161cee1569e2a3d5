use bevy_ecs::prelude::*;

use crate::components::transform::Transform;
use crate::components::{PhysicsBody, PhysicsBodyParams};
use crate::math::Vec3f;
use crate::physics_world::PhysicsWorld;

const GROUND_SIZE: f32 = 200.0;
const GROUND_THICKNESS: f32 = 0.1;
const SKYBOX_SIZE: f32 = 750.0;

#[derive(Debug, Component)]
pub struct Ground;

// Surface the XR layer may teleport the viewpoint onto.
#[derive(Debug, Component)]
pub struct TeleportTarget;

#[derive(Debug, Component)]
pub struct Visibility {
    pub visible: bool,
}

#[derive(Debug, Component)]
pub struct Skybox {
    pub color: Vec3f,
    pub size: f32,
}

impl Ground {
    // The ground catches teleports and dropped props but is never drawn.
    pub fn spawn(mut commands: Commands, mut physics: ResMut<PhysicsWorld>) {
        let half = GROUND_THICKNESS / 2.0;
        let pos = Vec3f::new(0.0, -half, 0.0);

        let physics_body = PhysicsBody::new(
            PhysicsBodyParams {
                pos,
                half_extents: Vec3f::new(GROUND_SIZE / 2.0, half, GROUND_SIZE / 2.0),
                rotation_axis: Vec3f::y(),
                rotation_angle: 0.0,
                movable: false,
                start_asleep: false,
                friction: 0.5,
                restitution: 0.7,
            },
            &mut physics,
        );

        commands.spawn((
            Ground,
            TeleportTarget,
            Visibility { visible: false },
            Transform::from_position(pos),
            physics_body,
        ));
    }
}

impl Skybox {
    pub fn spawn(mut commands: Commands) {
        commands.spawn((
            Skybox {
                color: Vec3f::new(0.53, 0.81, 0.92),
                size: SKYBOX_SIZE,
            },
            Transform::default(),
        ));
    }
}

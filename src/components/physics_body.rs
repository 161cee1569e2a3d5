use bevy_ecs::prelude::*;
use rapier3d::prelude::*;

use crate::components::Transform;
use crate::math::Vec3f;
use crate::physics_world::PhysicsWorld;

#[derive(Component)]
pub struct PhysicsBody {
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

pub struct PhysicsBodyParams {
    pub pos: Vec3f,
    pub half_extents: Vec3f,
    pub rotation_axis: Vec3f,
    pub rotation_angle: f32,
    pub movable: bool,
    // Dynamic bodies created asleep stay out of the simulation until
    // something disturbs them.
    pub start_asleep: bool,
    pub friction: f32,
    pub restitution: f32,
}

impl PhysicsBody {
    pub fn new(params: PhysicsBodyParams, physics: &mut PhysicsWorld) -> Self {
        let PhysicsBodyParams {
            pos,
            half_extents,
            rotation_axis,
            rotation_angle,
            movable,
            start_asleep,
            friction,
            restitution,
        } = params;

        let body = RigidBodyBuilder::new(orig_type(movable))
            .translation(vector![pos.x, pos.y, pos.z])
            .rotation(rotation_axis * rotation_angle)
            .sleeping(start_asleep)
            .build();

        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .restitution(restitution)
            .friction(friction)
            .build();

        let (body, collider) = physics.add_body(body, collider);

        Self { body, collider }
    }

    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn collider_handle(&self) -> ColliderHandle {
        self.collider
    }

    pub fn sync(mut q: Query<(&mut Transform, &PhysicsBody)>, physics: Res<PhysicsWorld>) {
        for (mut transform, body) in q.iter_mut() {
            let body = physics.bodies.get(body.body).unwrap();
            let phys_pos = body.translation();
            let phys_rot = body.rotation().inverse(); // Not sure why inverse is needed
            transform.set(*phys_pos, *phys_rot.quaternion());
        }
    }
}

fn orig_type(movable: bool) -> RigidBodyType {
    if movable { RigidBodyType::Dynamic } else { RigidBodyType::Fixed }
}

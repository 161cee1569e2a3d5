use bevy_ecs::prelude::*;
use bevy_hierarchy::BuildChildren;

use crate::components::transform::Transform;
use crate::components::{PhysicsBody, PhysicsBodyParams, Selectable};
use crate::config::Settings;
use crate::events::WorldLoadedEvent;
use crate::math::Vec3f;
use crate::physics_world::PhysicsWorld;

const ROOT_NAME: &str = "world";

// Root node of the loaded bundle, addressable by the renderer as one batch.
#[derive(Debug, Component)]
pub struct SceneRoot {
    pub name: String,
}

impl Default for SceneRoot {
    fn default() -> Self {
        Self {
            name: String::from(ROOT_NAME),
        }
    }
}

// Participates in collision queries (pick rays included).
#[derive(Debug, Component)]
pub struct Collidable;

#[derive(Debug, Component)]
pub struct SceneMesh {
    pub name: String,
    pub half_extents: Vec3f,
}

impl SceneMesh {
    // Bundle delivery: rename the root, spawn every mesh under it and mark
    // it collidable. Pickable props get tagged here as well.
    pub fn spawn_loaded(
        mut commands: Commands,
        settings: Res<Settings>,
        mut events: EventReader<WorldLoadedEvent>,
    ) {
        for event in events.iter() {
            let root = commands
                .spawn((SceneRoot::default(), Transform::default()))
                .id();

            for model in &event.models {
                let (center, half_extents) = bounds(&model.positions);
                let mut mesh = commands.spawn((
                    SceneMesh {
                        name: model.name.clone(),
                        half_extents,
                    },
                    Transform::from_position(center),
                    Collidable,
                ));
                if model.name.starts_with(&settings.selectable_prefix) {
                    mesh.insert(Selectable);
                }
                let mesh = mesh.id();
                commands.entity(root).push_children(&[mesh]);
            }
        }
    }

    // After the whole batch has landed: detach each mesh from the root and
    // classify it by name. Flat surfaces become fixed bodies; everything
    // else simulates, but only once something wakes it.
    pub fn assign_physics_bodies(
        mut commands: Commands,
        mut physics: ResMut<PhysicsWorld>,
        settings: Res<Settings>,
        meshes: Query<(Entity, &SceneMesh, &Transform), (Added<SceneMesh>, Without<PhysicsBody>)>,
    ) {
        for (entity, mesh, transform) in meshes.iter() {
            commands.entity(entity).remove_parent();

            let movable = !mesh.name.starts_with(&settings.static_prefix);
            let body = PhysicsBody::new(
                PhysicsBodyParams {
                    pos: transform.position(),
                    half_extents: mesh.half_extents,
                    rotation_axis: Vec3f::y(),
                    rotation_angle: 0.0,
                    movable,
                    start_asleep: movable,
                    friction: 0.7,
                    restitution: 0.2,
                },
                &mut physics,
            );
            commands.entity(entity).insert(body);
        }
    }
}

fn bounds(positions: &[Vec3f]) -> (Vec3f, Vec3f) {
    if positions.is_empty() {
        return (Vec3f::zeros(), Vec3f::from_element(0.5));
    }
    let mut min = positions[0];
    let mut max = positions[0];
    for p in positions {
        min = min.inf(p);
        max = max.sup(p);
    }
    ((min + max) / 2.0, (max - min) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_unit_cube() {
        let positions = vec![Vec3f::new(-1.0, 0.0, -1.0), Vec3f::new(1.0, 2.0, 1.0)];
        let (center, half) = bounds(&positions);
        assert_eq!(center, Vec3f::new(0.0, 1.0, 0.0));
        assert_eq!(half, Vec3f::new(1.0, 1.0, 1.0));
    }
}

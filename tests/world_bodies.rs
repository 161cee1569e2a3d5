use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;
use rapier3d::prelude::RigidBodyType;

use showcase_xr::assets::WorldModel;
use showcase_xr::components::{PhysicsBody, SceneMesh, Selectable};
use showcase_xr::config::Settings;
use showcase_xr::events::WorldLoadedEvent;
use showcase_xr::math::Vec3f;
use showcase_xr::physics_world::PhysicsWorld;
use showcase_xr::systems::register_body_entities;

fn cube(name: &str, center: Vec3f, half: f32) -> WorldModel {
    WorldModel {
        name: String::from(name),
        positions: vec![
            center - Vec3f::from_element(half),
            center + Vec3f::from_element(half),
        ],
        indices: vec![],
    }
}

fn setup() -> (World, Schedule) {
    let settings = Settings::default();
    let mut world = World::default();
    world.insert_resource(PhysicsWorld::new(settings.gravity));
    world.insert_resource(settings);
    world.init_resource::<Events<WorldLoadedEvent>>();

    let mut schedule = Schedule::default();
    schedule
        .add_systems(SceneMesh::spawn_loaded)
        .add_systems(SceneMesh::assign_physics_bodies.after(SceneMesh::spawn_loaded))
        .add_systems(register_body_entities.after(SceneMesh::assign_physics_bodies));
    (world, schedule)
}

fn find_mesh(world: &mut World, name: &str) -> Entity {
    let mut meshes = world.query::<(Entity, &SceneMesh)>();
    meshes
        .iter(world)
        .find(|(_, mesh)| mesh.name == name)
        .map(|(entity, _)| entity)
        .unwrap()
}

#[test]
fn flat_surfaces_get_fixed_bodies() {
    let (mut world, mut schedule) = setup();
    world.send_event(WorldLoadedEvent {
        models: vec![cube("PlaneFloor01", Vec3f::zeros(), 10.0)],
    });
    schedule.run(&mut world);

    let entity = find_mesh(&mut world, "PlaneFloor01");
    let handle = world.get::<PhysicsBody>(entity).unwrap().body_handle();
    let physics = world.resource::<PhysicsWorld>();
    let body = physics.bodies.get(handle).unwrap();
    assert_eq!(body.body_type(), RigidBodyType::Fixed);
}

#[test]
fn props_get_dynamic_bodies_created_asleep() {
    let (mut world, mut schedule) = setup();
    world.send_event(WorldLoadedEvent {
        models: vec![cube("CowBoy02", Vec3f::new(-22.0, 1.0, 10.0), 1.0)],
    });
    schedule.run(&mut world);

    let entity = find_mesh(&mut world, "CowBoy02");
    let handle = world.get::<PhysicsBody>(entity).unwrap().body_handle();
    let physics = world.resource::<PhysicsWorld>();
    let body = physics.bodies.get(handle).unwrap();
    assert_eq!(body.body_type(), RigidBodyType::Dynamic);
    assert!(body.is_sleeping());
}

#[test]
fn selectable_prefix_tags_pickable_props() {
    let (mut world, mut schedule) = setup();
    world.send_event(WorldLoadedEvent {
        models: vec![
            cube("CowBoy01", Vec3f::new(-26.0, 1.0, 6.0), 1.0),
            cube("Crate01", Vec3f::new(-28.0, 0.5, 12.0), 0.5),
            cube("PlaneFloor01", Vec3f::zeros(), 10.0),
        ],
    });
    schedule.run(&mut world);

    let cowboy = find_mesh(&mut world, "CowBoy01");
    let crate_prop = find_mesh(&mut world, "Crate01");
    let floor = find_mesh(&mut world, "PlaneFloor01");
    assert!(world.get::<Selectable>(cowboy).is_some());
    assert!(world.get::<Selectable>(crate_prop).is_none());
    assert!(world.get::<Selectable>(floor).is_none());
}

#[test]
fn pick_rays_resolve_to_the_spawned_entity() {
    let (mut world, mut schedule) = setup();
    world.send_event(WorldLoadedEvent {
        models: vec![cube("CowBoy01", Vec3f::new(0.0, 1.0, -5.0), 1.0)],
    });
    schedule.run(&mut world);

    // Step once so the query pipeline picks up the new collider.
    world
        .resource_mut::<PhysicsWorld>()
        .update(1.0 / 60.0);

    let entity = find_mesh(&mut world, "CowBoy01");
    let physics = world.resource::<PhysicsWorld>();
    let hit = physics
        .cast_ray(Vec3f::new(0.0, 1.0, 0.0), Vec3f::new(0.0, 0.0, -1.0), 100.0)
        .and_then(|collider| physics.entity_of(collider));
    assert_eq!(hit, Some(entity));

    let miss = physics.cast_ray(Vec3f::new(0.0, 1.0, 0.0), Vec3f::new(0.0, 1.0, 0.0), 100.0);
    assert!(miss.is_none());
}

#[test]
fn meshes_are_detached_from_the_root_after_classification() {
    use bevy_hierarchy::Parent;

    let (mut world, mut schedule) = setup();
    world.send_event(WorldLoadedEvent {
        models: vec![cube("CowBoy01", Vec3f::new(-26.0, 1.0, 6.0), 1.0)],
    });
    schedule.run(&mut world);

    let entity = find_mesh(&mut world, "CowBoy01");
    assert!(world.get::<Parent>(entity).is_none());
}

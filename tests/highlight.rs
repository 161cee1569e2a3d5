use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;

use showcase_xr::components::{Outline, SceneMesh, Selectable, Transform};
use showcase_xr::config::Settings;
use showcase_xr::events::PointerEvent;
use showcase_xr::highlight::Highlights;
use showcase_xr::math::Vec3f;

fn setup(settings: Settings) -> (World, Schedule) {
    let mut world = World::default();
    world.insert_resource(settings);
    world.insert_resource(Highlights::default());
    world.init_resource::<Events<PointerEvent>>();

    let mut schedule = Schedule::default();
    schedule.add_systems(Highlights::process_picks);
    (world, schedule)
}

fn spawn_prop(world: &mut World, name: &str, selectable: bool) -> Entity {
    let mut entity = world.spawn((
        SceneMesh {
            name: String::from(name),
            half_extents: Vec3f::from_element(1.0),
        },
        Transform::default(),
    ));
    if selectable {
        entity.insert(Selectable);
    }
    entity.id()
}

fn pick(world: &mut World, entity: Entity) {
    world.send_event(PointerEvent::Down {
        picked: Some(entity),
    });
}

#[test]
fn pick_toggles_outline_on_and_off() {
    let (mut world, mut schedule) = setup(Settings::default());
    let prop = spawn_prop(&mut world, "CowBoy01", true);

    pick(&mut world, prop);
    schedule.run(&mut world);
    assert!(world.get::<Outline>(prop).is_some());
    assert_eq!(world.resource::<Highlights>().len(), 1);

    // Picking the same prop again returns to the empty set.
    pick(&mut world, prop);
    schedule.run(&mut world);
    assert!(world.get::<Outline>(prop).is_none());
    assert!(world.resource::<Highlights>().is_empty());
}

#[test]
fn exclusive_policy_keeps_at_most_one_highlight() {
    let (mut world, mut schedule) = setup(Settings::default());
    let a = spawn_prop(&mut world, "CowBoy01", true);
    let b = spawn_prop(&mut world, "CowBoy02", true);

    pick(&mut world, a);
    schedule.run(&mut world);
    pick(&mut world, b);
    schedule.run(&mut world);

    assert!(world.get::<Outline>(a).is_none());
    assert!(world.get::<Outline>(b).is_some());
    assert_eq!(world.resource::<Highlights>().len(), 1);
}

#[test]
fn non_exclusive_policy_accumulates() {
    let settings = Settings {
        exclusive_highlight: false,
        ..Settings::default()
    };
    let (mut world, mut schedule) = setup(settings);
    let a = spawn_prop(&mut world, "CowBoy01", true);
    let b = spawn_prop(&mut world, "CowBoy02", true);

    pick(&mut world, a);
    pick(&mut world, b);
    schedule.run(&mut world);

    assert!(world.get::<Outline>(a).is_some());
    assert!(world.get::<Outline>(b).is_some());
    assert_eq!(world.resource::<Highlights>().len(), 2);
}

#[test]
fn non_selectable_hits_and_misses_are_ignored() {
    let (mut world, mut schedule) = setup(Settings::default());
    let crate_prop = spawn_prop(&mut world, "Crate01", false);

    pick(&mut world, crate_prop);
    world.send_event(PointerEvent::Down { picked: None });
    world.send_event(PointerEvent::Up);
    schedule.run(&mut world);

    assert!(world.get::<Outline>(crate_prop).is_none());
    assert!(world.resource::<Highlights>().is_empty());
}

#[test]
fn outline_carries_configured_color_without_inner_glow() {
    let (mut world, mut schedule) = setup(Settings::default());
    let prop = spawn_prop(&mut world, "CowBoy01", true);

    pick(&mut world, prop);
    schedule.run(&mut world);

    let outline = world.get::<Outline>(prop).unwrap();
    assert_eq!(outline.color, Vec3f::new(0.0, 1.0, 0.0));
    assert!(!outline.inner_glow);
}

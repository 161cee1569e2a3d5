use bevy_ecs::event::{Events, ManualEventReader};
use bevy_ecs::prelude::*;

use showcase_xr::events::{ControllerEvent, TriggerEdgeEvent};
use showcase_xr::input::{Controllers, Hand};
use showcase_xr::systems::{emit_trigger_edges, route_controller_events};

fn setup() -> (World, Schedule) {
    let mut world = World::default();
    world.insert_resource(Controllers::new());
    world.init_resource::<Events<ControllerEvent>>();
    world.init_resource::<Events<TriggerEdgeEvent>>();

    let mut schedule = Schedule::default();
    schedule.add_systems((
        route_controller_events,
        emit_trigger_edges.after(route_controller_events),
    ));
    (world, schedule)
}

fn edges(world: &World) -> Vec<bool> {
    let events = world.resource::<Events<TriggerEdgeEvent>>();
    let mut reader: ManualEventReader<TriggerEdgeEvent> = ManualEventReader::default();
    reader.iter(events).map(|e| e.pressed).collect()
}

#[test]
fn edge_emitted_only_on_level_change() {
    let (mut world, mut schedule) = setup();
    world.send_event(ControllerEvent::Connected {
        tag: String::from("controller-right"),
    });
    schedule.run(&mut world);

    world
        .resource_mut::<Controllers>()
        .set_trigger(Hand::Right, true);
    schedule.run(&mut world);
    // A steady level report is not a new edge.
    world
        .resource_mut::<Controllers>()
        .set_trigger(Hand::Right, true);
    schedule.run(&mut world);
    world
        .resource_mut::<Controllers>()
        .set_trigger(Hand::Right, false);
    schedule.run(&mut world);

    assert_eq!(edges(&world), vec![true, false]);
}

#[test]
fn unconnected_right_controller_polls_as_noop() {
    let (mut world, mut schedule) = setup();

    world
        .resource_mut::<Controllers>()
        .set_trigger(Hand::Right, true);
    schedule.run(&mut world);

    assert!(edges(&world).is_empty());
}

#[test]
fn left_trigger_does_not_drive_locomotion() {
    let (mut world, mut schedule) = setup();
    world.send_event(ControllerEvent::Connected {
        tag: String::from("controller-left"),
    });
    schedule.run(&mut world);

    world
        .resource_mut::<Controllers>()
        .set_trigger(Hand::Left, true);
    schedule.run(&mut world);

    assert!(edges(&world).is_empty());
}

#[test]
fn connection_tags_route_by_suffix() {
    let (mut world, mut schedule) = setup();
    // An id without a "left" suffix fills the right slot.
    world.send_event(ControllerEvent::Connected {
        tag: String::from("gamepad-7"),
    });
    schedule.run(&mut world);

    let controllers = world.resource::<Controllers>();
    assert!(controllers.connected(Hand::Right));
    assert!(!controllers.connected(Hand::Left));
}

#[test]
fn disconnect_empties_the_slot() {
    let (mut world, mut schedule) = setup();
    world.send_event(ControllerEvent::Connected {
        tag: String::from("controller-right"),
    });
    schedule.run(&mut world);
    assert!(world.resource::<Controllers>().connected(Hand::Right));

    world.send_event(ControllerEvent::Disconnected {
        tag: String::from("controller-right"),
    });
    schedule.run(&mut world);

    let controllers = world.resource::<Controllers>();
    assert!(!controllers.connected(Hand::Right));
    assert!(controllers.trigger(Hand::Right).is_none());
}

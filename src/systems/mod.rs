mod schedules;

use crate::app::AppState;
use crate::components::{Camera, PhysicsBody};
use crate::events::{
    ControllerEvent, FrameTimeEvent, KeyboardEvent, TriggerEdgeEvent, WindowResizeEvent,
};
use crate::frame_time::FrameTime;
use crate::input::{Controllers, Hand};
use crate::physics_world::PhysicsWorld;
use bevy_ecs::prelude::*;
use winit::event::VirtualKeyCode;

pub use schedules::{
    new_camera_update_schedule, new_preupdate_schedule, new_spawn_scene_schedule,
    new_update_schedule, CameraUpdateLabel, PreupdateLabel, SpawnLabel, UpdateLabel,
};

pub fn escape_on_exit(mut app: ResMut<AppState>, mut keyboard_events: EventReader<KeyboardEvent>) {
    if keyboard_events
        .iter()
        .any(|e| e.code == VirtualKeyCode::Escape && e.pressed)
    {
        app.running = false;
    }
}

pub fn resize_camera(
    mut cameras: Query<&mut Camera>,
    mut events: EventReader<WindowResizeEvent>,
) {
    if let Some(e) = events.iter().last() {
        for mut camera in cameras.iter_mut() {
            camera.resize(e.new_size.width, e.new_size.height);
        }
    }
}

pub fn update_frame_time(
    app: Res<AppState>,
    mut frame_time: ResMut<FrameTime>,
    mut events: EventReader<FrameTimeEvent>,
) {
    if app.frametime_manual {
        if let Some(e) = events.iter().last() {
            frame_time.set(e.duration);
        }
    } else {
        frame_time.update();
    }
}

pub fn update_physics(mut physics: ResMut<PhysicsWorld>, frame_time: Res<FrameTime>) {
    physics.update(frame_time.delta);
}

// Connection events land in the slot their tag's handedness suffix names.
pub fn route_controller_events(
    mut controllers: ResMut<Controllers>,
    mut events: EventReader<ControllerEvent>,
) {
    for event in events.iter() {
        match event {
            ControllerEvent::Connected { tag } => controllers.connect(tag),
            ControllerEvent::Disconnected { tag } => controllers.disconnect(tag),
        }
    }
}

// Forward movement listens to the right-hand trigger only, and only to
// actual level changes.
pub fn emit_trigger_edges(
    mut controllers: ResMut<Controllers>,
    mut edges: EventWriter<TriggerEdgeEvent>,
) {
    if let Some(trigger) = controllers.trigger(Hand::Right) {
        if trigger.changed {
            edges.send(TriggerEdgeEvent {
                pressed: trigger.pressed,
            });
        }
    }
    controllers.clear_edges();
}

// Keeps the collider -> entity map current so pick rays resolve.
pub fn register_body_entities(
    mut physics: ResMut<PhysicsWorld>,
    bodies: Query<(Entity, &PhysicsBody), Added<PhysicsBody>>,
) {
    for (entity, body) in bodies.iter() {
        physics.register_entity(body.collider_handle(), entity);
    }
}

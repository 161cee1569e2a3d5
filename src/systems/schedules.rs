use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ScheduleLabel;

use crate::assets::deliver_world;
use crate::components::{Ground, Light, PhysicsBody, Player, SceneMesh, Skybox};
use crate::highlight::Highlights;
use crate::locomotion::Locomotion;
use crate::systems::{
    emit_trigger_edges, escape_on_exit, register_body_entities, resize_camera,
    route_controller_events, update_frame_time, update_physics,
};

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SpawnLabel;

pub fn new_spawn_scene_schedule() -> (Schedule, SpawnLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems(Player::spawn.run_if(run_once()))
        .add_systems(Light::spawn.run_if(run_once()))
        .add_systems(Ground::spawn.run_if(run_once()))
        .add_systems(Skybox::spawn.run_if(run_once()));
    (schedule, SpawnLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PreupdateLabel;

pub fn new_preupdate_schedule() -> (Schedule, PreupdateLabel) {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        escape_on_exit,
        resize_camera,
        update_frame_time,
        deliver_world,
        route_controller_events,
        emit_trigger_edges.after(route_controller_events),
    ));
    (schedule, PreupdateLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UpdateLabel;

pub fn new_update_schedule() -> (Schedule, UpdateLabel) {
    let mut schedule = Schedule::default();
    schedule
        .add_systems(Highlights::process_picks)
        .add_systems(Locomotion::apply_trigger_edges)
        .add_systems(SceneMesh::spawn_loaded)
        .add_systems(SceneMesh::assign_physics_bodies.after(SceneMesh::spawn_loaded))
        .add_systems(register_body_entities.after(SceneMesh::assign_physics_bodies))
        .add_systems(update_physics.after(register_body_entities))
        .add_systems(PhysicsBody::sync.after(update_physics))
        .add_systems(
            Locomotion::advance_player
                .after(Locomotion::apply_trigger_edges)
                .after(update_physics),
        );
    (schedule, UpdateLabel)
}

#[derive(ScheduleLabel, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CameraUpdateLabel;

pub fn new_camera_update_schedule() -> (Schedule, CameraUpdateLabel) {
    let mut schedule = Schedule::default();
    schedule.add_systems((Player::update_player_view_xr,));
    (schedule, CameraUpdateLabel)
}

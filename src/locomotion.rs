use bevy_ecs::prelude::*;

use crate::app::AppState;
use crate::components::{Player, Transform};
use crate::config::Settings;
use crate::events::TriggerEdgeEvent;

// Whether the forward-movement trigger is currently held. Set from edges
// only; the level between edges is implied.
#[derive(Resource, Debug, Default)]
pub struct Locomotion {
    pub moving: bool,
}

impl Locomotion {
    pub fn apply_trigger_edges(
        mut locomotion: ResMut<Locomotion>,
        mut events: EventReader<TriggerEdgeEvent>,
    ) {
        for event in events.iter() {
            locomotion.moving = event.pressed;
        }
    }

    // One fixed step along the camera's forward vector per frame while
    // moving. Movement may push through geometry; any collision response
    // belongs to the physics engine, not here.
    pub fn advance_player(
        locomotion: Res<Locomotion>,
        app_state: Res<AppState>,
        settings: Res<Settings>,
        mut players: Query<(&mut Player, &mut Transform)>,
    ) {
        if !locomotion.moving || !app_state.xr_session_active {
            return;
        }
        for (mut player, mut transform) in players.iter_mut() {
            let step = transform.forward() * settings.move_step;
            transform.translate(step);
            // Keep the rig offset in sync so the next headset pose update
            // doesn't snap the camera back.
            player.rig_offset += step;
        }
    }
}

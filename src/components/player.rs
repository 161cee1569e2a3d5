use bevy_ecs::prelude::*;

use crate::components::{Camera, Transform};
use crate::events::CameraSetEvent;
use crate::math::{Vec3, Vec3f};

// Initial viewpoint, looking back across the showcase floor.
const START_POS: [f32; 3] = [-32.0, 2.0, 8.0];
const START_YAW: f32 = 2.0;
const FOVY_DEG: f32 = 90.0;

#[derive(Debug, Component)]
pub struct Player {
    // World-space offset of the XR rig. Headset poses are relative to it,
    // so locomotion persists across tracking updates.
    pub rig_offset: Vec3f,
}

impl Player {
    pub fn spawn(mut commands: Commands) {
        let pos = Vec3f::new(START_POS[0], START_POS[1], START_POS[2]);
        let mut transform = Transform::from_position(pos);
        transform.rotate_axis(&Vec3::y_axis(), START_YAW);

        commands.spawn((
            Player { rig_offset: pos },
            Camera::new(
                crate::app::DEFAULT_SURFACE_SIZE.0,
                crate::app::DEFAULT_SURFACE_SIZE.1,
                FOVY_DEG.to_radians(),
                0.1,
                1000.0,
            ),
            transform,
        ));
    }

    // Headset view pose owns the camera while a session runs; we only add
    // the rig offset accumulated by locomotion.
    pub fn update_player_view_xr(
        mut events: EventReader<CameraSetEvent>,
        mut player: Query<(&Player, &mut Transform, &mut Camera)>,
    ) {
        for event in events.iter() {
            for (player, mut transform, mut camera) in player.iter_mut() {
                transform.set_pose(player.rig_offset + event.pos, event.rot);
                camera.set_projection_matrix(event.projection_matrix);
            }
        }
    }
}

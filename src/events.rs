use crate::app::SurfaceSize;
use crate::assets::WorldModel;
use crate::math::{Mat4f, UnitQuatf, Vec3f};
use bevy_ecs::prelude::*;
use winit::event::VirtualKeyCode;

#[derive(Event)]
pub struct WindowResizeEvent {
    pub new_size: SurfaceSize,
}

#[derive(Event)]
pub struct KeyboardEvent {
    pub code: VirtualKeyCode,
    pub pressed: bool,
}

// Pick result reported by the platform layer. Only Down is routed to the
// highlight set; a Down with no hit is ignored there.
#[derive(Event)]
pub enum PointerEvent {
    Down { picked: Option<Entity> },
    Up,
}

// Controller lifecycle. The tag ends with a handedness suffix and decides
// which slot the controller lands in.
#[derive(Event)]
pub enum ControllerEvent {
    Connected { tag: String },
    Disconnected { tag: String },
}

// Sent only when the trigger's pressed level actually changes.
#[derive(Event)]
pub struct TriggerEdgeEvent {
    pub pressed: bool,
}

#[derive(Event)]
pub struct FrameTimeEvent {
    pub duration: std::time::Duration,
}

#[derive(Event)]
pub struct CameraSetEvent {
    pub pos: Vec3f,
    pub rot: UnitQuatf,
    pub projection_matrix: Mat4f,
}

#[derive(Event)]
pub struct WorldLoadedEvent {
    pub models: Vec<WorldModel>,
}

mod camera;
mod environment;
mod light;
mod outline;
mod physics_body;
mod player;
mod scene_mesh;
mod transform;

pub use camera::Camera;
pub use environment::{Ground, Skybox, TeleportTarget, Visibility};
pub use light::{Light, LightKind};
pub use outline::{Outline, Selectable};
pub use physics_body::{PhysicsBody, PhysicsBodyParams};
pub use player::Player;
pub use scene_mesh::{Collidable, SceneMesh, SceneRoot};
pub use transform::Transform;

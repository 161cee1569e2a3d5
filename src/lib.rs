pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod events;
pub mod frame_time;
pub mod highlight;
pub mod input;
pub mod locomotion;
pub mod logging;
pub mod math;
pub mod physics_world;
pub mod systems;

#[cfg(target_arch = "wasm32")]
pub mod xr;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    const XR_MODE: bool = true;
    crate::app::run_experience(XR_MODE).await
}

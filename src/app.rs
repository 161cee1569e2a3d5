use crate::assets::{self, WorldLoader};
use crate::config::Settings;
use crate::events::{
    CameraSetEvent, ControllerEvent, FrameTimeEvent, KeyboardEvent, PointerEvent,
    TriggerEdgeEvent, WindowResizeEvent, WorldLoadedEvent,
};
use crate::frame_time::FrameTime;
use crate::highlight::Highlights;
use crate::input::{Controllers, Hand};
use crate::locomotion::Locomotion;
use crate::math::{Mat4f, UnitQuatf, Vec3f};
use crate::physics_world::PhysicsWorld;
use bevy_ecs::prelude::*;
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};

#[cfg(target_arch = "wasm32")]
use winit::platform::web::EventLoopExtWebSys;

#[cfg(target_arch = "wasm32")]
use crate::xr::WebXRApp;

use winit::event::{ElementState, Event, KeyboardInput, MouseButton, WindowEvent};
use winit::window::{Window, WindowBuilder};

use crate::components::{Player, Transform};
use crate::systems::*;

use crate::logging::{init_logging, printlog};

use std::cell::RefCell;
use std::rc::Rc;

pub type SurfaceSize = winit::dpi::PhysicalSize<u32>;

pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (1900, 1200);

// How far a pick ray reaches before it counts as a miss.
const MAX_PICK_DISTANCE: f32 = 100.0;

#[derive(Resource)]
pub struct AppState {
    pub running: bool,
    pub webxr: bool,
    pub frametime_manual: bool,
    // Locomotion is inert until the platform reports a live session.
    pub xr_session_active: bool,
}

pub struct App {
    pub world: World,
}

impl App {
    pub fn new(webxr: bool) -> Self {
        let mut world = World::default();
        world.init_resource::<Schedules>();

        let settings = Settings::default();
        world.insert_resource(PhysicsWorld::new(settings.gravity));
        world.insert_resource(settings);

        world.insert_resource(AppState {
            running: true,
            webxr,
            frametime_manual: webxr,
            xr_session_active: false,
        });
        world.insert_resource(FrameTime::new());
        world.insert_resource(Controllers::new());
        world.insert_resource(Highlights::default());
        world.insert_resource(Locomotion::default());
        world.insert_non_send_resource(WorldLoader::new());

        // Events
        world.init_resource::<Events<WindowResizeEvent>>();
        world.init_resource::<Events<KeyboardEvent>>();
        world.init_resource::<Events<PointerEvent>>();
        world.init_resource::<Events<ControllerEvent>>();
        world.init_resource::<Events<TriggerEdgeEvent>>();
        world.init_resource::<Events<FrameTimeEvent>>();
        world.init_resource::<Events<CameraSetEvent>>();
        world.init_resource::<Events<WorldLoadedEvent>>();

        // Schedules
        let spawn_scene_schedule = new_spawn_scene_schedule();
        world.add_schedule(spawn_scene_schedule.0, spawn_scene_schedule.1);
        let preupdate_schedule = new_preupdate_schedule();
        world.add_schedule(preupdate_schedule.0, preupdate_schedule.1);
        let update_schedule = new_update_schedule();
        world.add_schedule(update_schedule.0, update_schedule.1);
        let camera_update_schedule = new_camera_update_schedule();
        world.add_schedule(camera_update_schedule.0, camera_update_schedule.1);

        Self { world }
    }

    // Per-frame tick from whichever loop drives us.
    pub fn update_scene(&mut self, duration: std::time::Duration) {
        self.world.send_event(FrameTimeEvent { duration });
        self.world.run_schedule(SpawnLabel);
        self.world.run_schedule(PreupdateLabel);
        self.world.run_schedule(UpdateLabel);
    }

    // Headset view pose for this frame.
    pub fn update_camera(&mut self, pos: Vec3f, rot: UnitQuatf, projection_matrix: Mat4f) {
        self.world.send_event(CameraSetEvent {
            pos,
            rot,
            projection_matrix,
        });
        self.world.run_schedule(CameraUpdateLabel);
    }

    pub fn set_xr_session_active(&mut self, active: bool) {
        self.world.resource_mut::<AppState>().xr_session_active = active;
    }

    pub fn controller_connected(&mut self, tag: &str) {
        self.world.send_event(ControllerEvent::Connected {
            tag: String::from(tag),
        });
    }

    pub fn controller_disconnected(&mut self, tag: &str) {
        self.world.send_event(ControllerEvent::Disconnected {
            tag: String::from(tag),
        });
    }

    // Trigger level as reported by the platform; edges are derived inside.
    pub fn set_controller_trigger(&mut self, hand: Hand, pressed: bool) {
        self.world
            .resource_mut::<Controllers>()
            .set_trigger(hand, pressed);
    }

    // Resolve a pick ray against the physics scene and report the result.
    pub fn pointer_pick(&mut self, origin: Vec3f, dir: Vec3f) {
        let picked = {
            let physics = self.world.resource::<PhysicsWorld>();
            physics
                .cast_ray(origin, dir, MAX_PICK_DISTANCE)
                .and_then(|collider| physics.entity_of(collider))
        };
        self.world.send_event(PointerEvent::Down { picked });
    }

    // Windowed mode picks along the camera's view direction.
    pub fn pointer_pick_from_camera(&mut self) {
        let mut players = self.world.query_filtered::<&Transform, With<Player>>();
        let ray = players
            .iter(&self.world)
            .next()
            .map(|t| (t.position(), t.forward()));
        if let Some((origin, dir)) = ray {
            self.pointer_pick(origin, dir);
        }
    }
}

pub struct Experience {
    pub app: Rc<RefCell<App>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    xr_app: Option<WebXRApp>,
}

impl Experience {
    async fn new(webxr: bool) -> Self {
        let app = App::new(webxr);
        let loader = app.world.non_send_resource::<WorldLoader>().clone();
        let world_asset = app.world.resource::<Settings>().world_asset.clone();

        #[cfg(target_arch = "wasm32")]
        {
            // Kick the bundle load off and let the frame loop run; delivery
            // arrives through the loader cell whenever the fetch finishes.
            wasm_bindgen_futures::spawn_local(async move {
                loader.complete(assets::load_world(&world_asset).await);
            });

            if webxr {
                // Request the XrSession as soon as possible after the user
                // interaction that triggered the wasm to load; more than a
                // few seconds of delay makes the request fail a security
                // check on the Meta Quest browser.
                let xr_app = WebXRApp::new().await;
                let app = Rc::new(RefCell::new(app));
                xr_app.start(app.clone());
                Self {
                    app,
                    xr_app: Some(xr_app),
                }
            } else {
                let app = Rc::new(RefCell::new(app));
                Self { app, xr_app: None }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            loader.complete(assets::load_world(&world_asset).await);
            let app = Rc::new(RefCell::new(app));
            Self { app }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_window_canvas(window: &Window, surface_size: SurfaceSize) {
    // Winit prevents sizing with CSS, so we have to set
    // the size manually when on web.
    window.set_inner_size(surface_size);

    use winit::platform::web::WindowExtWebSys;
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| {
            let dst = doc.get_element_by_id("showcase")?;
            let canvas = web_sys::Element::from(window.canvas());
            canvas.set_id("canvas");
            dst.append_child(&canvas).ok()?;
            Some(())
        })
        .expect("Couldn't append canvas to document body.");
}

pub async fn run_experience(webxr: bool) {
    init_logging();
    printlog("running run_experience - starting");

    let event_loop = EventLoop::new();

    let surface_size = SurfaceSize::new(DEFAULT_SURFACE_SIZE.0, DEFAULT_SURFACE_SIZE.1);

    let window = WindowBuilder::new()
        .with_title("Showcase")
        .with_inner_size(surface_size)
        .build(&event_loop)
        .unwrap();

    #[cfg(target_arch = "wasm32")]
    {
        setup_window_canvas(&window, surface_size);
    }

    let experience = Experience::new(webxr).await;
    experience
        .app
        .borrow_mut()
        .world
        .insert_non_send_resource(window);
    printlog("running run_experience - created experience");

    let event_handler = move |event: Event<()>,
                              _: &EventLoopWindowTarget<()>,
                              control_flow: &mut ControlFlow| {
        let mut app = experience.app.borrow_mut();
        let window_id = app.world.non_send_resource::<Window>().id();

        match event {
            Event::WindowEvent {
                ref event,
                window_id: id,
            } if id == window_id => match event {
                WindowEvent::MouseInput { state, button, .. } => {
                    if *button == MouseButton::Left {
                        match state {
                            ElementState::Pressed => app.pointer_pick_from_camera(),
                            ElementState::Released => {
                                app.world.send_event(PointerEvent::Up);
                            }
                        }
                    }
                }

                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(keycode),
                            ..
                        },
                    ..
                } => {
                    app.world.send_event(KeyboardEvent {
                        code: *keycode,
                        pressed: *key_state == ElementState::Pressed,
                    });
                }

                WindowEvent::Resized(new_size) => {
                    if webxr {
                        return;
                    }
                    app.world.send_event(WindowResizeEvent {
                        new_size: *new_size,
                    });
                }

                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    if webxr {
                        return;
                    }
                    app.world.send_event(WindowResizeEvent {
                        new_size: **new_inner_size,
                    });
                }

                _ => (),
            },

            Event::RedrawRequested(id) if id == window_id => {
                // The XR frame loop drives the schedules in XR mode.
                if webxr {
                    return;
                }
                app.world.run_schedule(SpawnLabel);
                app.world.run_schedule(PreupdateLabel);
                app.world.run_schedule(UpdateLabel);
            }

            Event::RedrawEventsCleared => {
                // RedrawRequested will only trigger once, unless we manually
                // request it.
                if webxr {
                    return;
                }
                app.world.non_send_resource::<Window>().request_redraw();
            }

            _ => {}
        }

        if !app.world.resource::<AppState>().running {
            *control_flow = ControlFlow::Exit;
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        event_loop.spawn(event_handler);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        event_loop.run(event_handler);
    }
}

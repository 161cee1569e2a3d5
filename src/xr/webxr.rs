#![cfg(web_sys_unstable_apis)]

#[allow(unused_imports)]
use log::{debug, error, info};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::*;

use crate::input::Hand;
use crate::logging::printlog;
use crate::math::{Mat4, Mat4f, Quat, UnitQuat, UnitQuatf, Vec3f};

// Index of the xr-standard-trigger button in the gamepad mapping.
const TRIGGER_BUTTON: u32 = 0;

fn request_animation_frame(session: &XrSession, f: &Closure<dyn FnMut(f64, XrFrame)>) -> u32 {
    // This turns the Closure into a js_sys::Function
    // See https://rustwasm.github.io/wasm-bindgen/api/wasm_bindgen/closure/struct.Closure.html#casting-a-closure-to-a-js_sysfunction
    session.request_animation_frame(f.as_ref().unchecked_ref())
}

// We need to take care here because:
// * WebGL matrices are stored as an array in column-major order
// * nalgebra::Matrix4::new args are in row-major order
// https://developer.mozilla.org/en-US/docs/Web/API/XRRigidTransform/matrix
fn to_mat(v: &Vec<f32>) -> Mat4f {
    Mat4::new(
        v[0], v[4], v[8], v[12],
        v[1], v[5], v[9], v[13],
        v[2], v[6], v[10], v[14],
        v[3], v[7], v[11], v[15],
    )
}

fn to_pose(transform: &XrRigidTransform) -> (Vec3f, UnitQuatf) {
    let p = transform.position();
    let position = Vec3f::new(p.x() as f32, p.y() as f32, p.z() as f32);
    let o = transform.orientation();
    let rotation = Quat::new(o.w() as f32, o.x() as f32, o.y() as f32, o.z() as f32);
    (position, UnitQuat::new_normalize(rotation))
}

fn handedness_tag(source: &XrInputSource) -> String {
    let suffix = match source.handedness() {
        XrHandedness::Left => "left",
        XrHandedness::Right => "right",
        _ => "none",
    };
    format!("controller-{}", suffix)
}

fn trigger_pressed(source: &XrInputSource) -> bool {
    let Some(gamepad) = source.gamepad() else {
        return false;
    };
    let buttons = gamepad.buttons();
    if buttons.length() <= TRIGGER_BUTTON {
        return false;
    }
    GamepadButton::from(buttons.get(TRIGGER_BUTTON)).pressed()
}

fn create_webgl_context(xr_mode: bool) -> Result<WebGl2RenderingContext, JsValue> {
    let canvas = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();

    let gl: WebGl2RenderingContext = if xr_mode {
        let gl_attribs = Object::new();
        Reflect::set(
            &gl_attribs,
            &JsValue::from_str("xrCompatible"),
            &JsValue::TRUE,
        )
        .unwrap();

        canvas
            .get_context_with_context_options("webgl2", &gl_attribs)?
            .unwrap()
            .dyn_into()?
    } else {
        canvas.get_context("webgl2")?.unwrap().dyn_into()?
    };

    Ok(gl)
}

pub struct WebXRApp {
    session: Rc<RefCell<XrSession>>,
    ref_space: Rc<RefCell<XrReferenceSpace>>,
}

impl WebXRApp {
    pub async fn new() -> Self {
        printlog("Starting WebGL2 for WebXR");

        let gl = create_webgl_context(true).unwrap();

        printlog("Starting WebXR...");
        let navigator: web_sys::Navigator = web_sys::window().unwrap().navigator();
        let xr = navigator.xr();
        let session_mode = XrSessionMode::ImmersiveVr;
        let session_supported_promise = xr.is_session_supported(session_mode);

        let supports_session =
            wasm_bindgen_futures::JsFuture::from(session_supported_promise).await;
        let supports_session = supports_session.unwrap();
        if supports_session == false {
            panic!("XR session not supported");
        }

        let session_init = XrSessionInit::new();
        let xr_session_promise = xr.request_session_with_options(session_mode, &session_init);
        let xr_session = wasm_bindgen_futures::JsFuture::from(xr_session_promise).await;
        let xr_session: XrSession = xr_session.unwrap().into();

        // The highlight outline pass needs a stencil on the session's GL
        // layer; the default layer omits it and outlines silently vanish
        // on the Quest browser.
        let mut layer_init = XrWebGlLayerInit::new();
        layer_init.stencil(true);
        let xr_gl_layer = XrWebGlLayer::new_with_web_gl2_rendering_context_and_layer_init(
            &xr_session,
            &gl,
            &layer_init,
        )
        .unwrap();
        let mut render_state_init = XrRenderStateInit::new();
        render_state_init.base_layer(Some(&xr_gl_layer));
        xr_session.update_render_state_with_state(&render_state_init);

        let ref_space_type = XrReferenceSpaceType::Local;
        let ref_space_promise = xr_session.request_reference_space(ref_space_type);
        let ref_space = wasm_bindgen_futures::JsFuture::from(ref_space_promise).await;
        let ref_space: XrReferenceSpace = ref_space.unwrap().into();

        let session = Rc::new(RefCell::new(xr_session));
        let ref_space = Rc::new(RefCell::new(ref_space));

        Self { session, ref_space }
    }

    pub fn start(&self, app: Rc<RefCell<crate::app::App>>) {
        let f = Rc::new(RefCell::new(None));
        let g = f.clone();

        let ref_space = self.ref_space.clone();
        let last_frame_time = Rc::new(RefCell::new(0.));
        // Trigger levels per controller tag, for pick edges and
        // connect/disconnect detection.
        let seen: Rc<RefCell<HashMap<String, bool>>> = Rc::new(RefCell::new(HashMap::new()));

        app.borrow_mut().set_xr_session_active(true);

        {
            let app = app.clone();
            let onend = Closure::<dyn FnMut(XrSessionEvent)>::new(move |_: XrSessionEvent| {
                app.borrow_mut().set_xr_session_active(false);
            });
            self.session
                .borrow()
                .set_onend(Some(onend.as_ref().unchecked_ref()));
            onend.forget();
        }

        let frame_app = app.clone();
        *g.borrow_mut() = Some(Closure::new(move |time: f64, frame: XrFrame| {
            let sess: XrSession = frame.session();
            let mut app = frame_app.borrow_mut();
            let ref_space = &ref_space.borrow();
            let mut seen = seen.borrow_mut();

            // Controller roster and trigger levels.
            let sources = sess.input_sources();
            let mut present: Vec<String> = Vec::new();
            for i in 0..sources.length() {
                let Some(source) = sources.get(i) else { continue };
                let tag = handedness_tag(&source);

                if !seen.contains_key(&tag) {
                    seen.insert(tag.clone(), false);
                    app.controller_connected(&tag);
                }

                let pressed = trigger_pressed(&source);
                app.set_controller_trigger(Hand::from_tag(&tag), pressed);

                // A fresh press doubles as the pointer-down: cast a pick ray
                // along the controller's target ray.
                let was_pressed = seen.get(&tag).copied().unwrap_or(false);
                if pressed && !was_pressed {
                    if let Some(pose) = frame.get_pose(&source.target_ray_space(), ref_space) {
                        let (origin, rotation) = to_pose(&pose.transform());
                        let dir = rotation * -Vec3f::z();
                        app.pointer_pick(origin, dir);
                    }
                }
                seen.insert(tag.clone(), pressed);
                present.push(tag);
            }

            let gone: Vec<String> = seen
                .keys()
                .filter(|tag| !present.contains(tag))
                .cloned()
                .collect();
            for tag in gone {
                seen.remove(&tag);
                app.controller_disconnected(&tag);
            }

            let delta_time =
                std::time::Duration::from_millis((time - *last_frame_time.borrow()) as u64);
            last_frame_time.replace(time);
            app.update_scene(delta_time);

            // One camera update per frame from the viewer pose; the external
            // renderer handles per-eye views itself.
            if let Some(viewer_pose) = frame.get_viewer_pose(ref_space) {
                let (position, rotation) = to_pose(&viewer_pose.transform());
                let projection = viewer_pose
                    .views()
                    .get(0)
                    .dyn_into::<XrView>()
                    .map(|view| to_mat(&view.projection_matrix()))
                    .unwrap_or_else(|_| Mat4::identity());
                app.update_camera(position, rotation, projection);
            }

            // Schedule ourself for another requestAnimationFrame callback.
            request_animation_frame(&sess, f.borrow().as_ref().unwrap());
        }));

        let session = &self.session.borrow();
        request_animation_frame(session, g.borrow().as_ref().unwrap());
    }
}

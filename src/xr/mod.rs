mod webxr;

pub use webxr::WebXRApp;

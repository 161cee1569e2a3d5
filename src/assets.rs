use bevy_ecs::prelude::{EventWriter, NonSend};
use cfg_if::cfg_if;
use std::cell::RefCell;
use std::io::{BufReader, Cursor};
use std::rc::Rc;

use crate::events::WorldLoadedEvent;
use crate::math::Vec3f;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> reqwest::Url {
    let window = web_sys::window().unwrap();
    let location = window.location();
    let origin = location.origin().unwrap();
    let base = reqwest::Url::parse(&format!("{}/res/", origin,)).unwrap();
    base.join(file_name).unwrap()
}

pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            let url = format_url(file_name);
            let txt = reqwest::get(url)
                .await?
                .text()
                .await?;
        } else {
            let path = std::path::Path::new(env!("OUT_DIR"))
                .join("res")
                .join(file_name);
            let txt = std::fs::read_to_string(path)?;
        }
    }

    Ok(txt)
}

// One named mesh out of the world bundle. Geometry is kept only long enough
// to size colliders; the renderer has its own copy of the bundle.
#[derive(Debug, Clone)]
pub struct WorldModel {
    pub name: String,
    pub positions: Vec<Vec3f>,
    pub indices: Vec<u32>,
}

pub async fn load_world(file_name: &str) -> anyhow::Result<Vec<WorldModel>> {
    let text = load_string(file_name).await?;
    let mut reader = BufReader::new(Cursor::new(text.into_bytes()));
    let (models, _materials) =
        tobj::load_obj_buf(&mut reader, &tobj::GPU_LOAD_OPTIONS, |_| Ok(Default::default()))?;

    Ok(models
        .into_iter()
        .map(|model| WorldModel {
            name: model.name,
            positions: model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vec3f::new(p[0], p[1], p[2]))
                .collect(),
            indices: model.mesh.indices,
        })
        .collect())
}

// Completion cell for the fire-and-forget world load. The loading future
// fills it from wherever it runs; deliver_world turns the completion into
// an event on the next frame. The render loop never waits on it.
#[derive(Clone, Default)]
pub struct WorldLoader(Rc<RefCell<Option<anyhow::Result<Vec<WorldModel>>>>>);

impl WorldLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(&self, result: anyhow::Result<Vec<WorldModel>>) {
        *self.0.borrow_mut() = Some(result);
    }

    pub fn take(&self) -> Option<anyhow::Result<Vec<WorldModel>>> {
        self.0.borrow_mut().take()
    }
}

pub fn deliver_world(loader: NonSend<WorldLoader>, mut events: EventWriter<WorldLoadedEvent>) {
    if let Some(result) = loader.take() {
        match result {
            Ok(models) => events.send(WorldLoadedEvent { models }),
            // Failures surface on the loader's own channel; nothing to retry.
            Err(e) => log::error!("world bundle load failed: {e:?}"),
        }
    }
}

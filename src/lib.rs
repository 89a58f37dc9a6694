#![cfg(target_arch = "wasm32")]
use crate::audio::HtmlBell;
use crate::constants::{BELL_SRC, BELL_VOLUME, DEFAULT_ROOT_ID};
use crate::dom::ElementSurface;
use crate::strategy::InputStrategy;
use crate::view::DialView;
use crate::widget::Telegraph;
use std::cell::RefCell;
use std::rc::Rc;
use telegraph_core::DragController;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod input;
mod labels;
mod strategy;
mod view;
mod widget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("telegraph-web starting");
    Ok(())
}

/// A mounted telegraph. Freeing it removes every listener and silences the bell.
#[wasm_bindgen]
pub struct TelegraphHandle {
    // listeners go first so no callback outlives the widget
    listeners: Vec<events::EventListener>,
    telegraph: Rc<RefCell<Telegraph>>,
    strategy: InputStrategy,
}

#[wasm_bindgen]
impl TelegraphHandle {
    /// Kebab-case key of the current engine order, e.g. `half-ahead`.
    #[wasm_bindgen(js_name = positionKey)]
    pub fn position_key(&self) -> String {
        self.telegraph.borrow().controller().position().key().to_string()
    }

    pub fn label(&self) -> String {
        self.telegraph.borrow().controller().label().to_string()
    }

    pub fn angle(&self) -> f32 {
        self.telegraph.borrow().controller().angle()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.telegraph.borrow().is_dragging()
    }

    pub fn strategy(&self) -> String {
        self.strategy.as_str().to_string()
    }
}

impl Drop for TelegraphHandle {
    fn drop(&mut self) {
        self.listeners.clear();
        log::info!("[telegraph] unmounted ({} input)", self.strategy.as_str());
    }
}

/// Mount on an element the host already holds. `strategy` is `global` or `capture`.
#[wasm_bindgen(js_name = mountTelegraph)]
pub fn mount_telegraph(root: web::Element, strategy: &str) -> Result<TelegraphHandle, JsValue> {
    mount(root, strategy).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Mount on `#root_id`, or on `#engine-telegraph` when `root_id` is empty.
#[wasm_bindgen(js_name = mountTelegraphById)]
pub fn mount_telegraph_by_id(root_id: &str, strategy: &str) -> Result<TelegraphHandle, JsValue> {
    let id = if root_id.is_empty() {
        DEFAULT_ROOT_ID
    } else {
        root_id
    };
    find_root(id)
        .and_then(|root| mount(root, strategy))
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn find_root(id: &str) -> anyhow::Result<web::Element> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

fn mount(root: web::Element, strategy: &str) -> anyhow::Result<TelegraphHandle> {
    let strategy: InputStrategy = strategy.parse()?;
    let bell = HtmlBell::new(BELL_SRC, BELL_VOLUME)?;
    let view = DialView::attach(&root);
    let controller = DragController::new(ElementSurface::new(root.clone()), bell);
    let telegraph = Rc::new(RefCell::new(Telegraph::new(controller, view)));

    let listeners = events::wire_input(strategy, &root, &telegraph).map_err(|e| {
        log::error!("[telegraph] input wiring failed: {:#}", e);
        e
    })?;
    log::info!(
        "[telegraph] mounted with {} input ({} listeners)",
        strategy.as_str(),
        listeners.len()
    );
    Ok(TelegraphHandle {
        listeners,
        telegraph,
        strategy,
    })
}

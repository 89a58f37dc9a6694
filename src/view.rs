use crate::constants::{FACE_CLASS, LABEL_CLASS, LEVER_CLASS, READOUT_CLASS};
use crate::dom;
use crate::labels::{DialLabels, LabelHost};
use glam::Vec2;
use telegraph_core::{InteractionState, TelegraphPosition};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM pieces the widget draws into. Any of them may be absent.
pub struct DialView {
    lever: Option<web::HtmlElement>,
    readout: Option<web::Element>,
    _labels: Option<DialLabels<Face>>,
}

impl DialView {
    pub fn attach(root: &web::Element) -> Self {
        let lever: Option<web::HtmlElement> =
            dom::find_child(root, LEVER_CLASS).and_then(|el| el.dyn_into().ok());
        let readout = dom::find_child(root, READOUT_CLASS);
        if lever.is_none() {
            log::warn!("[view] no .{} under dial root; lever will not rotate", LEVER_CLASS);
        }
        let labels = dom::find_child(root, FACE_CLASS).map(|el| DialLabels::place(Face(el)));
        Self {
            lever,
            readout,
            _labels: labels,
        }
    }

    pub fn render(&self, state: &InteractionState) {
        if let Some(lever) = &self.lever {
            dom::set_style(lever, "transform", &format!("rotate({}deg)", state.angle));
        }
        if let Some(readout) = &self.readout {
            readout.set_text_content(Some(state.position.label()));
        }
    }
}

struct Face(web::Element);

impl LabelHost for Face {
    type Node = web::Element;

    fn clear_stale(&self) {
        let Ok(stale) = self.0.query_selector_all(&format!(".{LABEL_CLASS}")) else {
            return;
        };
        for i in 0..stale.length() {
            if let Some(el) = stale.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                el.remove();
            }
        }
    }

    fn insert(&self, position: TelegraphPosition, offset: Vec2) -> Option<web::Element> {
        let document = self.0.owner_document()?;
        let el = document.create_element("div").ok()?;
        el.set_class_name(LABEL_CLASS);
        _ = el.set_attribute("data-position", position.key());
        el.set_text_content(Some(position.label()));
        let html = el.dyn_ref::<web::HtmlElement>()?;
        let transform = format!("translate({}px, {}px)", offset.x, offset.y);
        dom::set_style(html, "transform", &transform);
        self.0.append_child(&el).ok()?;
        Some(el)
    }

    fn remove(&self, node: &web::Element) {
        node.remove();
    }
}

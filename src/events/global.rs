//! Container-level mouse/touch input.
//!
//! Presses are taken on the dial itself. While a session is open, moves and
//! releases are tracked on the document so the lever keeps following, and
//! the session still ends, once the pointer leaves the dial. The document
//! listeners exist only for the length of a session.

use super::EventListener;
use crate::input;
use crate::widget::Telegraph;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use telegraph_core::DialEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct DocumentTracking {
    document: web::Document,
    telegraph: Rc<RefCell<Telegraph>>,
    session: RefCell<Vec<EventListener>>,
}

impl DocumentTracking {
    fn press(self: &Rc<Self>, pointer: Vec2) {
        self.telegraph.borrow_mut().dispatch(DialEvent::Press(pointer));
        if !self.session.borrow().is_empty() {
            return;
        }
        match self.track_document() {
            Ok(listeners) => *self.session.borrow_mut() = listeners,
            Err(e) => {
                log::error!("[input] document tracking failed: {:#}", e);
                self.telegraph.borrow_mut().dispatch(DialEvent::Cancel);
            }
        }
    }

    fn track_document(self: &Rc<Self>) -> anyhow::Result<Vec<EventListener>> {
        let weak = Rc::downgrade(self);
        Ok(vec![
            wire_mousemove(&self.document, &self.telegraph)?,
            wire_touchmove(&self.document, &self.telegraph)?,
            wire_session_end(&self.document, "mouseup", DialEvent::Release, &weak)?,
            wire_session_end(&self.document, "touchend", DialEvent::Release, &weak)?,
            wire_session_end(&self.document, "touchcancel", DialEvent::Cancel, &weak)?,
        ])
    }

    fn end(&self, event: DialEvent) {
        self.telegraph.borrow_mut().dispatch(event);
        let stale = std::mem::take(&mut *self.session.borrow_mut());
        // one of these closures is running right now; free them once it returns
        spawn_local(async move { drop(stale) });
    }
}

pub fn wire_global_listeners(
    root: &web::Element,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<Vec<EventListener>> {
    let document = root
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("dial root has no owner document"))?;
    let tracking = Rc::new(DocumentTracking {
        document,
        telegraph: telegraph.clone(),
        session: RefCell::new(Vec::new()),
    });

    Ok(vec![
        wire_mousedown(root, &tracking)?,
        wire_touchstart(root, &tracking)?,
    ])
}

fn wire_mousedown(
    root: &web::Element,
    tracking: &Rc<DocumentTracking>,
) -> anyhow::Result<EventListener> {
    let tracking = tracking.clone();
    EventListener::new(root, "mousedown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        ev.prevent_default();
        tracking.press(input::mouse_client(ev));
    })
}

fn wire_touchstart(
    root: &web::Element,
    tracking: &Rc<DocumentTracking>,
) -> anyhow::Result<EventListener> {
    let tracking = tracking.clone();
    EventListener::non_passive(root, "touchstart", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        ev.prevent_default();
        if let Some(pos) = input::first_touch_client(ev) {
            tracking.press(pos);
        }
    })
}

fn wire_mousemove(
    document: &web::Document,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<EventListener> {
    let t = telegraph.clone();
    EventListener::new(document, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            t.borrow_mut().dispatch(DialEvent::Move(input::mouse_client(ev)));
        }
    })
}

fn wire_touchmove(
    document: &web::Document,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<EventListener> {
    let t = telegraph.clone();
    EventListener::non_passive(document, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        // keep the page from scrolling while the lever is held
        ev.prevent_default();
        if let Some(pos) = input::first_touch_client(ev) {
            t.borrow_mut().dispatch(DialEvent::Move(pos));
        }
    })
}

fn wire_session_end(
    document: &web::Document,
    kind: &'static str,
    event: DialEvent,
    tracking: &Weak<DocumentTracking>,
) -> anyhow::Result<EventListener> {
    let tracking = tracking.clone();
    EventListener::new(document, kind, move |_ev: web::Event| {
        if let Some(tracking) = tracking.upgrade() {
            tracking.end(event);
        }
    })
}

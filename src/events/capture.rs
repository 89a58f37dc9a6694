//! Pointer events with capture on the lever knob.
//!
//! Capturing the pointer keeps move/up events flowing to the knob after
//! the pointer leaves it. Only the pointer that opened the session drives
//! the lever.

use super::EventListener;
use crate::constants::KNOB_CLASS;
use crate::dom;
use crate::input;
use crate::widget::Telegraph;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use telegraph_core::DialEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

type ActivePointer = Rc<Cell<Option<i32>>>;

pub fn wire_knob_capture(
    root: &web::Element,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<Vec<EventListener>> {
    let knob = dom::find_child(root, KNOB_CLASS)
        .ok_or_else(|| anyhow::anyhow!("capture input needs a .{} element", KNOB_CLASS))?;
    if let Some(html) = knob.dyn_ref::<web::HtmlElement>() {
        dom::set_style(html, "touch-action", "none");
    }
    let active: ActivePointer = Rc::new(Cell::new(None));

    Ok(vec![
        wire_pointerdown(&knob, &active, telegraph)?,
        wire_pointermove(&knob, &active, telegraph)?,
        wire_pointer_end(&knob, "pointerup", DialEvent::Release, &active, telegraph)?,
        wire_pointer_end(&knob, "pointercancel", DialEvent::Cancel, &active, telegraph)?,
        wire_pointer_end(&knob, "lostpointercapture", DialEvent::Cancel, &active, telegraph)?,
    ])
}

fn wire_pointerdown(
    knob: &web::Element,
    active: &ActivePointer,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<EventListener> {
    let t = telegraph.clone();
    let active = active.clone();
    let knob_for_capture = knob.clone();
    EventListener::new(knob, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if active.get().is_some_and(|id| id != ev.pointer_id()) {
            return;
        }
        ev.prevent_default();
        active.set(Some(ev.pointer_id()));
        if let Err(e) = knob_for_capture.set_pointer_capture(ev.pointer_id()) {
            log::warn!("[input] setPointerCapture failed: {:?}", e);
        }
        t.borrow_mut().dispatch(DialEvent::Press(input::mouse_client(ev)));
    })
}

fn wire_pointermove(
    knob: &web::Element,
    active: &ActivePointer,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<EventListener> {
    let t = telegraph.clone();
    let active = active.clone();
    EventListener::new(knob, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if active.get() != Some(ev.pointer_id()) {
            return;
        }
        t.borrow_mut().dispatch(DialEvent::Move(input::mouse_client(ev)));
    })
}

fn wire_pointer_end(
    knob: &web::Element,
    kind: &'static str,
    event: DialEvent,
    active: &ActivePointer,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<EventListener> {
    let t = telegraph.clone();
    let active = active.clone();
    let knob_for_release = knob.clone();
    EventListener::new(knob, kind, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if active.get() != Some(ev.pointer_id()) {
            return;
        }
        active.set(None);
        if knob_for_release.has_pointer_capture(ev.pointer_id()) {
            _ = knob_for_release.release_pointer_capture(ev.pointer_id());
        }
        t.borrow_mut().dispatch(event);
    })
}

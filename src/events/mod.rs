pub mod capture;
pub mod global;
pub mod listener;

pub use listener::EventListener;

use crate::strategy::InputStrategy;
use crate::widget::Telegraph;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_input(
    strategy: InputStrategy,
    root: &web::Element,
    telegraph: &Rc<RefCell<Telegraph>>,
) -> anyhow::Result<Vec<EventListener>> {
    match strategy {
        InputStrategy::Global => global::wire_global_listeners(root, telegraph),
        InputStrategy::Capture => capture::wire_knob_capture(root, telegraph),
    }
}

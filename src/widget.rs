use crate::audio::HtmlBell;
use crate::dom::ElementSurface;
use crate::view::DialView;
use telegraph_core::{DialEvent, DialOutcome, DragController};

pub type Controller = DragController<ElementSurface, HtmlBell>;

/// One mounted telegraph: controller state plus the DOM it draws into.
pub struct Telegraph {
    controller: Controller,
    view: DialView,
}

impl Telegraph {
    pub fn new(controller: Controller, view: DialView) -> Self {
        let t = Self { controller, view };
        t.render();
        t
    }

    pub fn dispatch(&mut self, event: DialEvent) -> DialOutcome {
        let outcome = self.controller.handle(event);
        if outcome != DialOutcome::Ignored {
            self.render();
        }
        outcome
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    fn render(&self) {
        self.view.render(&self.controller.state());
    }
}

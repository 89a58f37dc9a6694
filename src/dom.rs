use telegraph_core::{DialRect, DialSurface};
use web_sys as web;

#[inline]
pub fn find_child(root: &web::Element, class: &str) -> Option<web::Element> {
    root.query_selector(&format!(".{class}")).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Measures the dial through the element the widget was mounted on.
pub struct ElementSurface {
    el: web::Element,
}

impl ElementSurface {
    pub fn new(el: web::Element) -> Self {
        Self { el }
    }
}

impl DialSurface for ElementSurface {
    fn measure(&self) -> Option<DialRect> {
        if !self.el.is_connected() {
            return None;
        }
        let r = self.el.get_bounding_client_rect();
        let rect = DialRect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        );
        rect.is_measurable().then_some(rect)
    }
}

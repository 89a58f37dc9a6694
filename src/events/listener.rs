use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it unregisters the callback.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        Self::register(target, kind, None, handler)
    }

    /// Registers with `passive: false` so the handler may call `preventDefault`
    /// on touch events.
    pub fn non_passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        Self::register(target, kind, Some(&opts), handler)
    }

    fn register(
        target: &web::EventTarget,
        kind: &'static str,
        options: Option<&web::AddEventListenerOptions>,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        match options {
            Some(o) => target
                .add_event_listener_with_callback_and_add_event_listener_options(kind, callback, o),
            None => target.add_event_listener_with_callback(kind, callback),
        }
        .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

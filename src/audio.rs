use telegraph_core::{BellCue, BellError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Ship's bell backed by one `<audio>` element owned by a single widget.
///
/// Dropping the bell pauses it, so an unmounted widget goes quiet.
pub struct HtmlBell {
    audio: web::HtmlAudioElement,
}

impl HtmlBell {
    pub fn new(src: &str, volume: f64) -> anyhow::Result<Self> {
        let audio = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("bell audio element: {:?}", e))?;
        audio.set_volume(volume);
        Ok(Self { audio })
    }
}

// Autoplay policy rejects play() until the page sees a user gesture.
fn discard_rejection(promise: js_sys::Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[bell] play rejected: {:?}", e);
        }
    });
}

impl BellCue for HtmlBell {
    fn reset_and_play(&mut self) -> Result<(), BellError> {
        self.audio.set_current_time(0.0);
        let promise = self
            .audio
            .play()
            .map_err(|e| BellError::Rejected(format!("{:?}", e)))?;
        discard_rejection(promise);
        Ok(())
    }
}

impl Drop for HtmlBell {
    fn drop(&mut self) {
        _ = self.audio.pause();
    }
}

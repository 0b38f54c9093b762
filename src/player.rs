use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::ANALYSER_FFT_SIZE;
use crate::dom;
use crate::error::PlayerError;
use crate::overlay;
use crate::render_loop;
use crate::state::PlayerState;

/// The live audio pipeline for one play-through: a fresh context per
/// session, routed source -> analyser -> destination. Owned exclusively by
/// the player; dropped (and the context closed) whenever the session ends.
struct Session {
    audio_ctx: web::AudioContext,
    source: web::AudioBufferSourceNode,
    analyser: web::AnalyserNode,
}

impl Session {
    fn shutdown(&self) {
        _ = self.source.stop();
        _ = self.analyser.disconnect();
        _ = self.audio_ctx.close();
    }
}

/// Canvas waveform player driven by a single play/pause affordance.
///
/// All handles are `Rc`-shared so the player can be cloned into event and
/// completion closures; the state machine in [`PlayerState`] plus its
/// generation tokens keep stale async completions from touching a session
/// they no longer own.
#[derive(Clone)]
pub struct WaveformPlayer {
    canvas: web::HtmlCanvasElement,
    audio_src: String,
    state: Rc<RefCell<PlayerState>>,
    session: Rc<RefCell<Option<Session>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl WaveformPlayer {
    pub fn new(canvas: web::HtmlCanvasElement, audio_src: String) -> Self {
        Self {
            canvas,
            audio_src,
            state: Rc::new(RefCell::new(PlayerState::new())),
            session: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        }
    }

    /// Play/pause toggle. Stops the live session if one is playing;
    /// otherwise kicks off a full load -> decode -> play sequence. Failures
    /// park the player in `Error`, from which another toggle retries.
    pub fn toggle(&self) {
        if self.state.borrow().is_playing() {
            self.stop_current();
            return;
        }

        log::info!("[toggle] begin load (from {:?})", self.state.borrow().phase());
        let token = self.state.borrow_mut().begin_load();
        let player = self.clone();
        spawn_local(async move {
            if let Err(e) = player.start_session(token).await {
                log::error!("teaser playback failed: {}", e);
                player.state.borrow_mut().settle_error(token);
            }
        });
    }

    /// Permanent removal. Halts playback, cancels the render loop and
    /// releases the audio context no matter which phase the player is in;
    /// any in-flight load sees its token invalidated and discards itself.
    pub fn teardown(&self) {
        render_loop::cancel(&self.raf_id);
        if let Some(session) = self.session.borrow_mut().take() {
            session.shutdown();
        }
        self.state.borrow_mut().invalidate();
    }

    fn stop_current(&self) {
        log::info!("[toggle] stop");
        render_loop::cancel(&self.raf_id);
        if let Some(session) = self.session.borrow_mut().take() {
            session.shutdown();
        }
        self.state.borrow_mut().force_stop();
        if let Some(doc) = dom::window_document() {
            overlay::show(&doc);
        }
    }

    /// Natural end of the decoded buffer. Fires for manual stops too, but
    /// those bump the generation first, so the token check makes this a
    /// no-op for anything but the live session finishing on its own.
    fn on_natural_end(&self, token: u64) {
        if !self.state.borrow_mut().stop(token) {
            return;
        }
        log::info!("[playback] natural end");
        render_loop::cancel(&self.raf_id);
        if let Some(session) = self.session.borrow_mut().take() {
            session.shutdown();
        }
        if let Some(doc) = dom::window_document() {
            overlay::show(&doc);
        }
    }

    async fn start_session(&self, token: u64) -> Result<(), PlayerError> {
        let audio_ctx = web::AudioContext::new()
            .map_err(|e| PlayerError::Environment(format!("{:?}", e)))?;
        match self.run_pipeline(&audio_ctx, token).await {
            Ok(started) => {
                if !started {
                    // superseded mid-flight; nothing was installed
                    _ = audio_ctx.close();
                }
                Ok(())
            }
            Err(e) => {
                _ = audio_ctx.close();
                Err(e)
            }
        }
    }

    /// Fetch, decode and start playback. Returns Ok(false) when a newer
    /// toggle or a teardown superseded this attempt at one of the await
    /// points; the caller releases the context in that case.
    async fn run_pipeline(
        &self,
        audio_ctx: &web::AudioContext,
        token: u64,
    ) -> Result<bool, PlayerError> {
        let encoded = fetch_audio_bytes(&self.audio_src).await?;
        if !self.state.borrow().is_current(token) {
            return Ok(false);
        }

        let decode = audio_ctx
            .decode_audio_data(&encoded)
            .map_err(|e| PlayerError::Decode(format!("{:?}", e)))?;
        let decoded = JsFuture::from(decode)
            .await
            .map_err(|e| PlayerError::Decode(format!("{:?}", e)))?;
        let audio_buffer: web::AudioBuffer = decoded
            .dyn_into()
            .map_err(|e| PlayerError::Decode(format!("{:?}", e)))?;
        if !self.state.borrow().is_current(token) {
            return Ok(false);
        }

        let source = audio_ctx
            .create_buffer_source()
            .map_err(|e| PlayerError::Environment(format!("{:?}", e)))?;
        let analyser = web::AnalyserNode::new(audio_ctx)
            .map_err(|e| PlayerError::Environment(format!("{:?}", e)))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);

        source.set_buffer(Some(&audio_buffer));
        _ = source.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&audio_ctx.destination());

        {
            let player = self.clone();
            let ended = Closure::wrap(Box::new(move || {
                player.on_natural_end(token);
            }) as Box<dyn FnMut()>);
            source.set_onended(Some(ended.as_ref().unchecked_ref()));
            ended.forget();
        }

        source
            .start_with_when(0.0)
            .map_err(|e| PlayerError::Environment(format!("{:?}", e)))?;

        if !self.state.borrow_mut().settle_playing(token) {
            _ = source.stop();
            return Ok(false);
        }
        *self.session.borrow_mut() = Some(Session {
            audio_ctx: audio_ctx.clone(),
            source,
            analyser: analyser.clone(),
        });
        if let Some(doc) = dom::window_document() {
            overlay::hide(&doc);
        }
        render_loop::start(
            self.canvas.clone(),
            analyser,
            self.state.clone(),
            self.raf_id.clone(),
        );
        Ok(true)
    }
}

/// One-shot fetch of the whole asset. The teaser is short-form, so no
/// streaming or range requests.
async fn fetch_audio_bytes(url: &str) -> Result<js_sys::ArrayBuffer, PlayerError> {
    let window =
        web::window().ok_or_else(|| PlayerError::Environment("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| PlayerError::Fetch(format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| PlayerError::Fetch(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(PlayerError::Fetch(format!("HTTP {}", resp.status())));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| PlayerError::Fetch(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| PlayerError::Fetch(format!("{:?}", e)))?;
    buf.dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| PlayerError::Fetch(format!("{:?}", e)))
}

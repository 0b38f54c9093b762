#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod overlay;
mod player;
mod render_loop;
mod state;
mod waveform;

use constants::{CANVAS_ID, PLAY_OVERLAY_ID, TEASER_AUDIO_SRC};
use player::WaveformPlayer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arsenic-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let player = WaveformPlayer::new(canvas, TEASER_AUDIO_SRC.to_string());

    // The overlay button sits on top of the canvas; either toggles playback
    {
        let p = player.clone();
        dom::add_click_listener(&document, CANVAS_ID, move || p.toggle());
    }
    {
        let p = player.clone();
        dom::add_click_listener(&document, PLAY_OVERLAY_ID, move || p.toggle());
    }

    // Release audio resources when the page goes away
    {
        let p = player;
        let unload = Closure::wrap(Box::new(move || p.teardown()) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("pagehide", unload.as_ref().unchecked_ref());
        }
        unload.forget();
    }

    Ok(())
}

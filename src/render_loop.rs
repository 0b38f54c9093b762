use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ANALYSER_BIN_COUNT, WAVEFORM_LINE_WIDTH, WAVEFORM_STROKE_COLOR};
use crate::state::PlayerState;
use crate::waveform;

/// Cancel the pending animation frame, if any. Safe to call when no loop
/// is running.
pub fn cancel(raf_id: &Cell<Option<i32>>) {
    if let Some(id) = raf_id.take() {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

/// Start the self-perpetuating draw loop for one playback session. Each
/// tick reads the analyser's current time-domain frame, strokes it across
/// the canvas and re-registers for the next display refresh. The loop
/// unregisters itself as soon as the player leaves `Playing`.
pub fn start(
    canvas: web::HtmlCanvasElement,
    analyser: web::AnalyserNode,
    state: Rc<RefCell<PlayerState>>,
    raf_id: Rc<Cell<Option<i32>>>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(c) => c,
            Err(e) => {
                log::error!("2d context error: {:?}", e);
                return;
            }
        },
        _ => {
            log::error!("canvas has no 2d context");
            return;
        }
    };

    // bin count follows from the fft size set at session start
    let bins = analyser.frequency_bin_count() as usize;
    debug_assert_eq!(bins, ANALYSER_BIN_COUNT);
    let mut frame = vec![0u8; bins];

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state.borrow().is_playing() {
            raf_for_tick.set(None);
            return;
        }
        analyser.get_byte_time_domain_data(&mut frame);
        draw_frame(&canvas, &ctx, &frame);
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
}

fn draw_frame(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    frame: &[u8],
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(WAVEFORM_LINE_WIDTH * dpr);
    ctx.set_stroke_style_str(WAVEFORM_STROKE_COLOR);
    ctx.begin_path();
    for (i, (x, y)) in waveform::polyline(frame, width, height).iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();
}

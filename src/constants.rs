/// Player tuning constants and the DOM contract with index.html.
///
/// These keep magic numbers out of the code; the analyser values also have
/// a fixed relationship (bin count = fft size / 2) checked by tests.

// Analyser window: 256-sample FFT gives 128 time-domain bytes per frame
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_BIN_COUNT: usize = (ANALYSER_FFT_SIZE / 2) as usize;

// Stroke styling (line width is multiplied by devicePixelRatio)
pub const WAVEFORM_STROKE_COLOR: &str = "#ef4444";
pub const WAVEFORM_LINE_WIDTH: f64 = 2.0;

// Fixed asset path served next to the page
pub const TEASER_AUDIO_SRC: &str = "/audio/arsenic-preview.mp3";

// Element ids the page must provide
pub const CANVAS_ID: &str = "teaser-canvas";
pub const PLAY_OVERLAY_ID: &str = "play-overlay";

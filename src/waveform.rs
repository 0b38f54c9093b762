/// Waveform polyline geometry, kept free of any web-sys types so the
/// mapping from analyser bytes to canvas coordinates is host-testable.

/// Map one time-domain sample frame to a connected polyline spanning the
/// full surface width. Byte 128 is the zero crossing and lands on the
/// vertical center; 0 and 255 land on the top and bottom edges. The line
/// always closes with a final point at the right edge on the center line,
/// even when the sample walk does not end there.
pub fn polyline(frame: &[u8], width: f64, height: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(frame.len() + 1);
    if !frame.is_empty() {
        let slice_width = width / frame.len() as f64;
        let mut x = 0.0;
        for &sample in frame {
            let v = sample as f64 / 128.0;
            points.push((x, v * height / 2.0));
            x += slice_width;
        }
    } else {
        points.push((0.0, height / 2.0));
    }
    points.push((width, height / 2.0));
    points
}

/// Backing-store dimensions for a surface of the given CSS size at the
/// given device pixel ratio. Never collapses to zero.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

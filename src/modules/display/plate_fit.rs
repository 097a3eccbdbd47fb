//! Pure geometry: size the displayed plate text to its container.

/// Inputs for one fit computation. Recomputed by the presentation layer on
/// every input or resize event; nothing here is stateful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFitParams {
    pub container_width: f64,
    pub container_height: f64,
    pub text_length: usize,
    pub compact: bool,
}

/// Returned when the container has not been measured yet.
const UNMEASURED_FALLBACK_PX: u32 = 48;

/// Monospaced plate typeface runs at roughly 0.6 width-to-height; 0.62
/// leaves a small horizontal buffer.
const CHAR_WIDTH_FACTOR: f64 = 0.62;

const TARGET_HEIGHT_RATIO: f64 = 0.55;
const MIN_FONT_PX: f64 = 32.0;
const MAX_FONT_PX: f64 = 110.0;
const MAX_FONT_COMPACT_PX: f64 = 80.0;

/// Compute the font size in integer pixels for the plate input text.
///
/// Width-bound and height-bound candidates are taken independently; the
/// smaller wins, clamped to [32, 80] in compact mode or [32, 110] otherwise.
pub fn fit_plate_text(params: &FontFitParams) -> u32 {
    if params.container_width <= 0.0 || params.container_height <= 0.0 {
        return UNMEASURED_FALLBACK_PX;
    }

    let horizontal_padding = if params.container_width < 600.0 { 24.0 } else { 32.0 };
    let available_width = params.container_width - horizontal_padding * 2.0;

    // Width-bound: font_size * factor * length <= available_width.
    // Short tokens are sized as if six characters wide so one letter does
    // not balloon to fill the panel.
    let by_width = available_width / (params.text_length.max(6) as f64 * CHAR_WIDTH_FACTOR);

    let by_height = params.container_height * TARGET_HEIGHT_RATIO;

    let ceiling = if params.compact {
        MAX_FONT_COMPACT_PX
    } else {
        MAX_FONT_PX
    };

    by_width.min(by_height).clamp(MIN_FONT_PX, ceiling).floor() as u32
}

//! Pure layout math for the quote/proposal document page.
//!
//! Everything here is side-effect free: the renderer folds a [`Cursor`]
//! through a sequence of row appends and asks this module where boxes,
//! dimension lines and text baselines go. Coordinates are PDF points
//! (1 pt = 1/72 inch) with a bottom-left origin on an A4 portrait page.

/// ISO A4 portrait in points.
pub const PAGE_WIDTH_PT: f64 = 595.0;
pub const PAGE_HEIGHT_PT: f64 = 842.0;

/// Horizontal and bottom margin used for all content.
pub const MARGIN_PT: f64 = 50.0;

/// Conversion factor from centimeters to points.
pub const CM_TO_PT: f64 = 28.35;

/// Vertical drop after each label/value row.
pub const LINE_GAP_PT: f64 = 20.0;

/// Vertical drop after the title line.
pub const TITLE_GAP_PT: f64 = 30.0;

/// Offset of a dimension line outside its box edge.
pub const DIM_LINE_OFFSET_PT: f64 = 10.0;

/// Half-length of the tick marks at dimension line ends.
pub const DIM_TICK_PT: f64 = 5.0;

/// Side of the fixed illustrative box used when no dimensions exist.
pub const FALLBACK_BOX_PT: f64 = 300.0;

/// Baseline position of the first line on a fresh page.
const TOP_BASELINE_PT: f64 = 750.0;

/// Top-down layout cursor. A value, not shared state: each append
/// returns the cursor for the next row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub y: f64,
}

impl Cursor {
    pub fn top() -> Self {
        Cursor { y: TOP_BASELINE_PT }
    }

    /// Cursor after consuming `gap` points of vertical space.
    pub fn advanced(self, gap: f64) -> Self {
        Cursor { y: self.y - gap }
    }

    /// Vertical room left above the bottom margin.
    pub fn remaining(self) -> f64 {
        self.y - MARGIN_PT
    }
}

/// Uniform down-scale factor that fits a `width_pt` x `height_pt` box
/// into `max_width` x `max_height`. Never upscales; zero-sized inputs
/// contribute no constraint.
pub fn fit_scale(width_pt: f64, height_pt: f64, max_width: f64, max_height: f64) -> f64 {
    let sx = if width_pt > 0.0 { max_width / width_pt } else { 1.0 };
    let sy = if height_pt > 0.0 { max_height / height_pt } else { 1.0 };
    sx.min(sy).min(1.0)
}

/// To-scale illustrative box for a pair of centimeter dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledBox {
    pub width_pt: f64,
    pub height_pt: f64,
    pub scale: f64,
}

/// Converts centimeter dimensions to points and down-scales them to fit
/// the available region, preserving aspect ratio and capping at 1.0.
pub fn scaled_box(width_cm: f64, height_cm: f64, max_width: f64, max_height: f64) -> ScaledBox {
    let width_pt = width_cm * CM_TO_PT;
    let height_pt = height_cm * CM_TO_PT;
    let scale = fit_scale(width_pt, height_pt, max_width, max_height);
    ScaledBox {
        width_pt: width_pt * scale,
        height_pt: height_pt * scale,
        scale,
    }
}

// Glyph advance widths for the built-in Helvetica faces, in 1/1000 em
// units, covering ASCII 0x20..=0x7E (Adobe AFM metrics). Text outside
// that range falls back to a lowercase-letter width.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(c: char, table: &[u16; 95]) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Advance width of `text` set in Helvetica at `size` points.
pub fn text_width(text: &str, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| glyph_width(c, &HELVETICA_WIDTHS) as u32).sum();
    units as f64 * size / 1000.0
}

/// Advance width of `text` set in Helvetica-Bold at `size` points.
pub fn text_width_bold(text: &str, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| glyph_width(c, &HELVETICA_BOLD_WIDTHS) as u32).sum();
    units as f64 * size / 1000.0
}

/// Left edge that centers a run of text on the page.
pub fn centered_x(text_width_pt: f64) -> f64 {
    (PAGE_WIDTH_PT - text_width_pt) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_fold() {
        let c = Cursor::top();
        let c = c.advanced(TITLE_GAP_PT);
        let c = c.advanced(LINE_GAP_PT);
        assert_eq!(c.y, 750.0 - TITLE_GAP_PT - LINE_GAP_PT);
    }

    #[test]
    fn test_fit_scale_caps_at_one() {
        // 1 cm x 1 cm is tiny; it must not be blown up to fill the page.
        let b = scaled_box(1.0, 1.0, PAGE_WIDTH_PT - 2.0 * MARGIN_PT, 400.0);
        assert_eq!(b.scale, 1.0);
        assert!((b.width_pt - CM_TO_PT).abs() < 1e-9);
        assert!((b.height_pt - CM_TO_PT).abs() < 1e-9);
    }

    #[test]
    fn test_fit_scale_shrinks_oversized_box() {
        // 10 m x 10 m would overflow A4 many times over.
        let max_w = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;
        let max_h = 400.0;
        let b = scaled_box(1000.0, 1000.0, max_w, max_h);
        assert!(b.scale < 1.0);
        assert!(b.width_pt <= max_w + 1e-9);
        assert!(b.height_pt <= max_h + 1e-9);
    }

    #[test]
    fn test_fit_scale_preserves_aspect_ratio() {
        let b = scaled_box(200.0, 100.0, 300.0, 300.0);
        assert!((b.width_pt / b.height_pt - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_scale_ignores_zero_dimension() {
        assert_eq!(fit_scale(0.0, 100.0, 400.0, 200.0), 1.0);
        assert_eq!(fit_scale(100.0, 0.0, 400.0, 200.0), 1.0);
    }

    #[test]
    fn test_text_width_monotonic() {
        assert!(text_width("Cliente: ", 12.0) > 0.0);
        assert!(text_width_bold("Cliente: ", 12.0) > text_width_bold("Cliente:", 12.0));
        // Bold Helvetica is at least as wide as the regular face.
        assert!(text_width_bold("Orçamento", 12.0) >= text_width("Orçamento", 12.0));
    }

    #[test]
    fn test_centered_text_is_centered() {
        let w = text_width_bold("Proposta", 18.0);
        let x = centered_x(w);
        assert!((x + w / 2.0 - PAGE_WIDTH_PT / 2.0).abs() < 1e-9);
    }
}

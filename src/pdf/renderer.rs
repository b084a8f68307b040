//! Single-page PDF composition for quotes and proposals.
//!
//! The renderer is a pure function over [`DocumentData`]: related
//! records are resolved and asset bytes loaded by the caller, and the
//! output is regenerated on every request, never persisted. Optional
//! assets (watermark logo, service photo) degrade to the no-image
//! variant; only an actual composition failure is an error.

use printpdf::image_crate::DynamicImage;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Polygon, PolygonMode, Pt, Rgb, TextMatrix,
};
use tracing::warn;

use crate::pdf::layout::{
    self, Cursor, CM_TO_PT, DIM_LINE_OFFSET_PT, DIM_TICK_PT, FALLBACK_BOX_PT, LINE_GAP_PT,
    MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, TITLE_GAP_PT,
};
use crate::util::money::format_brl_or_dash;
use crate::util::pricing::{glass_cost_cents, labor_cents};

const TITLE_SIZE: f64 = 18.0;
const FIELD_SIZE: f64 = 12.0;
const DIM_LABEL_SIZE: f64 = 10.0;
const WATERMARK_ALPHA: f32 = 0.1;
const IMAGE_DPI: f64 = 300.0;

/// Error types for document rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to compose PDF page: {0}")]
    Pdf(String),
    #[error("Failed to decode embedded image: {0}")]
    Image(String),
}

/// Fully resolved input for one rendered document. References that did
/// not resolve stay `None` and render as "—".
#[derive(Debug, Clone, Default)]
pub struct DocumentData {
    pub title: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_name: Option<String>,
    pub glass_type_name: Option<String>,
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub description: Option<String>,
    pub admin_note: Option<String>,
    /// RFC 3339 timestamp, shown as a dd/mm/yyyy date.
    pub scheduled_at: Option<String>,
    pub final_price_cents: Option<i64>,
    pub glass_price_per_m2_cents: Option<i64>,
    /// Raw bytes of the service reference photo, if the file existed.
    pub photo: Option<Vec<u8>>,
    /// Raw bytes of the header-logo watermark, if configured.
    pub watermark: Option<Vec<u8>>,
}

/// Renders the document to a finished single-page PDF byte stream.
pub fn render(data: &DocumentData) -> Result<Vec<u8>, RenderError> {
    let (doc, page_idx, layer_idx) = PdfDocument::new(
        &data.title,
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "content",
    );
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    // Watermark goes in first so everything else stacks above it.
    if let Some(bytes) = &data.watermark {
        if let Err(e) = draw_watermark(&layer, bytes) {
            warn!("Skipping undecodable watermark image: {}", e);
        }
    }

    let mut cursor = Cursor::top();

    let title_x = layout::centered_x(layout::text_width_bold(&data.title, TITLE_SIZE));
    layer.use_text(data.title.clone(), TITLE_SIZE as f32, mm(title_x), mm(cursor.y), &bold);
    cursor = cursor.advanced(TITLE_GAP_PT);

    let glass_cost = glass_cost_cents(data.height_cm, data.width_cm, data.glass_price_per_m2_cents);
    let labor = labor_cents(data.final_price_cents, glass_cost);

    let rows = [
        ("Cliente: ".to_string(), data.customer_name.clone()),
        ("Email: ".to_string(), data.email.clone()),
        ("Telefone: ".to_string(), data.phone.clone()),
        ("Serviço: ".to_string(), dash(data.service_name.clone())),
        ("Tipo de Vidro: ".to_string(), dash(data.glass_type_name.clone())),
        ("Altura: ".to_string(), format_cm(data.height_cm)),
        ("Largura: ".to_string(), format_cm(data.width_cm)),
        ("Descrição: ".to_string(), dash(data.description.clone())),
        ("Observação: ".to_string(), dash(data.admin_note.clone())),
        ("Agendamento: ".to_string(), format_date(data.scheduled_at.as_deref())),
        ("Vidros: ".to_string(), format_brl_or_dash(glass_cost)),
        ("Mão de obra: ".to_string(), format_brl_or_dash(labor)),
        ("Valor final: ".to_string(), format_brl_or_dash(data.final_price_cents)),
    ];

    for (label, value) in rows {
        let label_width = layout::text_width_bold(&label, FIELD_SIZE);
        layer.use_text(label, FIELD_SIZE as f32, mm(MARGIN_PT), mm(cursor.y), &bold);
        layer.use_text(value, FIELD_SIZE as f32, mm(MARGIN_PT + label_width), mm(cursor.y), &regular);
        cursor = cursor.advanced(LINE_GAP_PT);
    }

    cursor = cursor.advanced(10.0);
    layer.use_text("Desenho ilustrativo:", FIELD_SIZE as f32, mm(MARGIN_PT), mm(cursor.y), &bold);

    draw_diagram(&layer, &regular, data, cursor);

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Illustrative region below the field rows: a to-scale box when both
/// dimensions are known, a fixed-size box otherwise; photo inside when
/// one exists, neutral fill when not; dimension lines when dimensions
/// are known.
fn draw_diagram(layer: &PdfLayerReference, font: &IndirectFontRef, data: &DocumentData, cursor: Cursor) {
    let max_width = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;
    // Keep room below the box for the horizontal dimension line/label.
    let max_height = (cursor.remaining() - 40.0).max(CM_TO_PT);

    let dims = match (data.width_cm, data.height_cm) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some((w, h)),
        _ => None,
    };

    let (box_w, box_h) = match dims {
        Some((w, h)) => {
            let scaled = layout::scaled_box(w, h, max_width, max_height);
            (scaled.width_pt, scaled.height_pt)
        }
        None => {
            let scale = layout::fit_scale(FALLBACK_BOX_PT, FALLBACK_BOX_PT, max_width, max_height);
            (FALLBACK_BOX_PT * scale, FALLBACK_BOX_PT * scale)
        }
    };

    let rect_x = MARGIN_PT;
    let rect_y = cursor.y - box_h - 10.0;

    let mut drew_photo = false;
    if let Some(bytes) = &data.photo {
        match draw_image_in_box(layer, bytes, rect_x, rect_y, box_w, box_h) {
            Ok(()) => drew_photo = true,
            Err(e) => warn!("Skipping undecodable service photo: {}", e),
        }
    }
    // Placeholder fill only when no photo was embedded.
    draw_rect(layer, rect_x, rect_y, box_w, box_h, !drew_photo);

    if let Some((width_cm, height_cm)) = dims {
        draw_dimension_lines(layer, font, rect_x, rect_y, box_w, box_h, width_cm, height_cm);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_dimension_lines(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    rect_x: f64,
    rect_y: f64,
    box_w: f64,
    box_h: f64,
    width_cm: f64,
    height_cm: f64,
) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(0.8);

    // Horizontal dimension line below the box.
    let dim_h_y = rect_y - DIM_LINE_OFFSET_PT;
    stroke_line(layer, (rect_x, dim_h_y), (rect_x + box_w, dim_h_y));
    stroke_line(layer, (rect_x, dim_h_y + DIM_TICK_PT), (rect_x, dim_h_y - DIM_TICK_PT));
    stroke_line(
        layer,
        (rect_x + box_w, dim_h_y + DIM_TICK_PT),
        (rect_x + box_w, dim_h_y - DIM_TICK_PT),
    );

    let width_label = format!("{} cm", width_cm);
    let width_label_x =
        rect_x + box_w / 2.0 - layout::text_width(&width_label, DIM_LABEL_SIZE) / 2.0;
    layer.use_text(width_label, DIM_LABEL_SIZE as f32, mm(width_label_x), mm(dim_h_y - 15.0), font);

    // Vertical dimension line left of the box.
    let dim_v_x = rect_x - DIM_LINE_OFFSET_PT;
    stroke_line(layer, (dim_v_x, rect_y), (dim_v_x, rect_y + box_h));
    stroke_line(layer, (dim_v_x + DIM_TICK_PT, rect_y), (dim_v_x - DIM_TICK_PT, rect_y));
    stroke_line(
        layer,
        (dim_v_x + DIM_TICK_PT, rect_y + box_h),
        (dim_v_x - DIM_TICK_PT, rect_y + box_h),
    );

    // Height label rotated 90 degrees, reading bottom to top.
    let height_label = format!("{} cm", height_cm);
    let height_label_y =
        rect_y + box_h / 2.0 - layout::text_width(&height_label, DIM_LABEL_SIZE) / 2.0;
    layer.begin_text_section();
    layer.set_font(font, DIM_LABEL_SIZE as f32);
    layer.set_text_matrix(TextMatrix::TranslateRotate(
        Pt((dim_v_x - 8.0) as f32),
        Pt(height_label_y as f32),
        90.0,
    ));
    layer.write_text(height_label, font);
    layer.end_text_section();
}

fn draw_watermark(layer: &PdfLayerReference, bytes: &[u8]) -> Result<(), RenderError> {
    let decoded = printpdf::image_crate::load_from_memory(bytes)
        .map_err(|e| RenderError::Image(e.to_string()))?;

    // No ExtGState alpha in this output path, so the watermark opacity
    // is baked into the pixels: blend 90% toward white.
    let mut rgb = decoded.to_rgb8();
    for px in rgb.pixels_mut() {
        for channel in px.0.iter_mut() {
            *channel = 255 - ((255 - *channel) as f32 * WATERMARK_ALPHA) as u8;
        }
    }
    let (w_px, h_px) = rgb.dimensions();
    let faded = DynamicImage::ImageRgb8(rgb);

    let pdf_image = Image::from_dynamic_image(&faded);
    let natural_w_pt = w_px as f64 * 72.0 / IMAGE_DPI;
    let natural_h_pt = h_px as f64 * 72.0 / IMAGE_DPI;
    pdf_image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(0.0)),
            scale_x: Some((PAGE_WIDTH_PT / natural_w_pt) as f32),
            scale_y: Some((PAGE_HEIGHT_PT / natural_h_pt) as f32),
            dpi: Some(IMAGE_DPI as f32),
            ..Default::default()
        },
    );
    Ok(())
}

fn draw_image_in_box(
    layer: &PdfLayerReference,
    bytes: &[u8],
    x: f64,
    y: f64,
    box_w: f64,
    box_h: f64,
) -> Result<(), RenderError> {
    let decoded = printpdf::image_crate::load_from_memory(bytes)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    let (w_px, h_px) = (rgb.width(), rgb.height());

    let pdf_image = Image::from_dynamic_image(&rgb);
    let natural_w_pt = w_px as f64 * 72.0 / IMAGE_DPI;
    let natural_h_pt = h_px as f64 * 72.0 / IMAGE_DPI;
    pdf_image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(x)),
            translate_y: Some(mm(y)),
            scale_x: Some((box_w / natural_w_pt) as f32),
            scale_y: Some((box_h / natural_h_pt) as f32),
            dpi: Some(IMAGE_DPI as f32),
            ..Default::default()
        },
    );
    Ok(())
}

fn draw_rect(layer: &PdfLayerReference, x: f64, y: f64, w: f64, h: f64, fill: bool) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.95, 0.95, 0.95, None)));
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(1.0);
    let ring = vec![
        (Point::new(mm(x), mm(y)), false),
        (Point::new(mm(x + w), mm(y)), false),
        (Point::new(mm(x + w), mm(y + h)), false),
        (Point::new(mm(x), mm(y + h)), false),
    ];
    let rect = Polygon {
        rings: vec![ring],
        mode: if fill { PolygonMode::FillStroke } else { PolygonMode::Stroke },
        ..Default::default()
    };
    layer.add_polygon(rect);
}

fn stroke_line(layer: &PdfLayerReference, from: (f64, f64), to: (f64, f64)) {
    let line = Line {
        points: vec![
            (Point::new(mm(from.0), mm(from.1)), false),
            (Point::new(mm(to.0), mm(to.1)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn mm(points: f64) -> Mm {
    Mm::from(Pt(points as f32))
}

fn dash(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "—".to_string(),
    }
}

fn format_cm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} cm", v),
        None => "—".to_string(),
    }
}

fn format_date(rfc3339: Option<&str>) -> String {
    match rfc3339 {
        Some(raw) => match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.format("%d/%m/%Y").to_string(),
            Err(_) => raw.to_string(),
        },
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> DocumentData {
        DocumentData {
            title: "Proposta de Orçamento - Vidraçaria".to_string(),
            customer_name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            phone: "(11) 91234-5678".to_string(),
            service_name: Some("Box de banheiro".to_string()),
            glass_type_name: Some("Temperado 8mm".to_string()),
            height_cm: Some(100.0),
            width_cm: Some(50.0),
            description: Some("Box de correr".to_string()),
            admin_note: None,
            scheduled_at: Some("2025-03-10T14:00:00+00:00".to_string()),
            final_price_cents: Some(45000),
            glass_price_per_m2_cents: Some(8000),
            photo: None,
            watermark: None,
        }
    }

    #[test]
    fn test_render_without_assets_produces_pdf() {
        let bytes = render(&sample_data()).expect("render should succeed without assets");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_without_dimensions_uses_fallback_box() {
        let mut data = sample_data();
        data.height_cm = None;
        data.width_cm = None;
        let bytes = render(&data).expect("render should succeed without dimensions");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_unresolved_glass_type() {
        let mut data = sample_data();
        data.glass_type_name = None;
        data.glass_price_per_m2_cents = None;
        let bytes = render(&data).expect("render should degrade, not fail");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_corrupt_watermark_degrades() {
        let mut data = sample_data();
        data.watermark = Some(vec![0u8; 16]);
        let bytes = render(&data).expect("corrupt watermark must not fail the render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_oversized_dimensions_still_render() {
        let mut data = sample_data();
        data.height_cm = Some(1000.0);
        data.width_cm = Some(1000.0);
        let bytes = render(&data).expect("oversized box must be scaled down");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_date(Some("2025-03-10T14:00:00+00:00")), "10/03/2025");
        assert_eq!(format_date(None), "—");
    }
}

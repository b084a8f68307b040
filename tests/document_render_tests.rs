use vidracaria_backend::pdf::{render, DocumentData};
use vidracaria_backend::util::money::{format_brl, format_brl_or_dash, parse_brl};
use vidracaria_backend::util::pricing::{glass_cost_cents, labor_cents};

fn base_data() -> DocumentData {
    DocumentData {
        title: "Orçamento - Vidraçaria".to_string(),
        customer_name: "João Pereira".to_string(),
        email: "joao@example.com".to_string(),
        phone: "(21) 99876-5432".to_string(),
        service_name: Some("Espelho sob medida".to_string()),
        glass_type_name: Some("Comum 4mm".to_string()),
        height_cm: Some(100.0),
        width_cm: Some(50.0),
        description: Some("Espelho para banheiro".to_string()),
        admin_note: Some("Instalação inclusa".to_string()),
        scheduled_at: Some("2025-04-02T09:30:00-03:00".to_string()),
        final_price_cents: Some(45000),
        glass_price_per_m2_cents: Some(8000),
        photo: None,
        watermark: None,
    }
}

/// 100 cm x 50 cm at R$ 80,00/m² with a final price of R$ 450,00: glass
/// comes to R$ 40,00 and labor to R$ 410,00.
#[test]
fn test_pricing_breakdown_end_to_end() {
    let data = base_data();
    let glass = glass_cost_cents(data.height_cm, data.width_cm, data.glass_price_per_m2_cents);
    assert_eq!(glass, Some(4000));
    let labor = labor_cents(data.final_price_cents, glass);
    assert_eq!(labor, Some(41000));

    assert_eq!(format_brl_or_dash(glass), "R$ 40,00");
    assert_eq!(format_brl_or_dash(labor), "R$ 410,00");
    assert_eq!(format_brl_or_dash(data.final_price_cents), "R$ 450,00");
}

#[test]
fn test_masked_price_roundtrip() {
    for cents in [0i64, 1, 99, 100, 4000, 45000, 123_456_789] {
        let masked = format_brl(cents);
        assert_eq!(parse_brl(&masked).unwrap(), cents, "roundtrip failed for {}", masked);
    }
}

#[test]
fn test_render_full_document() {
    let bytes = render(&base_data()).expect("render should succeed");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_render_degrades_without_glass_type() {
    let mut data = base_data();
    data.glass_type_name = None;
    data.glass_price_per_m2_cents = None;

    // The breakdown terms disappear while the final price stays.
    let glass = glass_cost_cents(data.height_cm, data.width_cm, data.glass_price_per_m2_cents);
    assert_eq!(glass, None);
    assert_eq!(labor_cents(data.final_price_cents, glass), None);
    assert_eq!(format_brl_or_dash(glass), "—");

    let bytes = render(&data).expect("render must not fail on a missing glass type");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_without_any_optional_data() {
    let data = DocumentData {
        title: "Orçamento - Vidraçaria".to_string(),
        customer_name: "Cliente".to_string(),
        email: "cliente@example.com".to_string(),
        phone: "(11) 90000-0000".to_string(),
        ..Default::default()
    };
    let bytes = render(&data).expect("minimal document should render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_accepts_valid_watermark_png() {
    // Smallest meaningful PNG: 1x1 white pixel, generated via the image
    // crate re-exported by printpdf so versions cannot drift.
    let mut png = Vec::new();
    let img = printpdf::image_crate::RgbImage::from_pixel(1, 1, printpdf::image_crate::Rgb([255, 255, 255]));
    printpdf::image_crate::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), printpdf::image_crate::ImageOutputFormat::Png)
        .unwrap();

    let mut data = base_data();
    data.watermark = Some(png.clone());
    data.photo = Some(png);
    let bytes = render(&data).expect("render with embedded images should succeed");
    assert!(bytes.starts_with(b"%PDF"));
}

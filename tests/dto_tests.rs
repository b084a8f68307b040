use validator::Validate;
use vidracaria_backend::dto::quote_dto::{CreateQuoteRequest, UpdateQuoteRequest};
use vidracaria_backend::dto::user_dto::{CreateUserRequest, LoginRequest};
use vidracaria_backend::model::quote::QuoteStatus;
use vidracaria_backend::model::service_item::ServiceIcon;

#[test]
fn test_create_quote_request_parses_camel_case() {
    let json = r#"{
        "customerName": "Maria Silva",
        "email": "maria@example.com",
        "phone": "11912345678",
        "serviceId": "64f1c0ffee0ddba11ad0beef",
        "heightCm": 120.5,
        "widthCm": 80.0,
        "description": "Box de correr"
    }"#;
    let request: CreateQuoteRequest = serde_json::from_str(json).unwrap();
    assert!(request.validate().is_ok());
    assert_eq!(request.customer_name, "Maria Silva");
    assert_eq!(request.service_id.as_deref(), Some("64f1c0ffee0ddba11ad0beef"));
    assert_eq!(request.glass_type_id, None);
    assert_eq!(request.height_cm, Some(120.5));
}

#[test]
fn test_create_quote_request_rejects_bad_email() {
    let json = r#"{
        "customerName": "Maria Silva",
        "email": "not-an-email",
        "phone": "11912345678"
    }"#;
    let request: CreateQuoteRequest = serde_json::from_str(json).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_create_quote_request_rejects_negative_dimensions() {
    let json = r#"{
        "customerName": "Maria Silva",
        "email": "maria@example.com",
        "phone": "11912345678",
        "heightCm": -5.0
    }"#;
    let request: CreateQuoteRequest = serde_json::from_str(json).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_update_quote_request_status_values() {
    let request: UpdateQuoteRequest =
        serde_json::from_str(r#"{ "status": "InProgress", "finalPrice": "R$ 1.234,56" }"#).unwrap();
    assert_eq!(request.status, Some(QuoteStatus::InProgress));
    assert_eq!(request.final_price.as_deref(), Some("R$ 1.234,56"));

    let unknown = serde_json::from_str::<UpdateQuoteRequest>(r#"{ "status": "Archived" }"#);
    assert!(unknown.is_err());
}

#[test]
fn test_service_icon_is_a_closed_set() {
    let icon: ServiceIcon = serde_json::from_str(r#""shower_box""#).unwrap();
    assert_eq!(icon, ServiceIcon::ShowerBox);
    assert_eq!(icon.as_str(), "shower_box");

    assert!(serde_json::from_str::<ServiceIcon>(r#""bathtub""#).is_err());
    assert_eq!(ServiceIcon::all().len(), 7);
}

#[test]
fn test_login_request_validation() {
    let ok: LoginRequest =
        serde_json::from_str(r#"{ "email": "admin@example.com", "password": "x" }"#).unwrap();
    assert!(ok.validate().is_ok());

    let bad: LoginRequest =
        serde_json::from_str(r#"{ "email": "nope", "password": "x" }"#).unwrap();
    assert!(bad.validate().is_err());
}

#[test]
fn test_create_user_request_has_no_password_field() {
    // Passwords are generated server-side; a submitted one is ignored by
    // serde only if unknown fields are tolerated, which they are.
    let request: CreateUserRequest = serde_json::from_str(
        r#"{ "name": "Nova Admin", "email": "nova@example.com", "password": "ignored" }"#,
    )
    .unwrap();
    assert!(request.validate().is_ok());
    assert_eq!(request.name, "Nova Admin");
}

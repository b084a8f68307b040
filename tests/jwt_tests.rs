use chrono::Utc;
use vidracaria_backend::config::JwtConfig;
use vidracaria_backend::util::jwt::*;

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

struct TestAdmin {
    id: String,
    email: String,
    role: String,
}

impl TestAdmin {
    fn new() -> Self {
        Self {
            id: "64f1c0ffee0ddba11ad0beef".to_string(),
            email: "admin@vidracaria.example".to_string(),
            role: "admin".to_string(),
        }
    }
}

#[test]
fn test_token_type_as_str() {
    assert_eq!(TokenType::Access.as_str(), "access");
    assert_eq!(TokenType::Refresh.as_str(), "refresh");
}

#[test]
fn test_generate_access_token_roundtrip() {
    let jwt_utils = create_test_jwt_utils();
    let admin = TestAdmin::new();

    let token = jwt_utils
        .generate_access_token(&admin.id, &admin.email, &admin.role)
        .expect("token generation should succeed");
    assert!(!token.is_empty());

    let claims = jwt_utils
        .validate_access_token(&token)
        .expect("freshly generated token should validate");
    assert_eq!(claims.sub, admin.id);
    assert_eq!(claims.email, admin.email);
    assert_eq!(claims.role, admin.role);
    assert_eq!(claims.token_type, "access");
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_refresh_token_rejected_as_access_token() {
    let jwt_utils = create_test_jwt_utils();
    let admin = TestAdmin::new();

    let refresh = jwt_utils
        .generate_refresh_token(&admin.id, &admin.email, &admin.role)
        .unwrap();

    let result = jwt_utils.validate_access_token(&refresh);
    assert!(matches!(result, Err(JwtError::InvalidTokenType { .. })));
}

#[test]
fn test_token_pair_contains_distinct_tokens() {
    let jwt_utils = create_test_jwt_utils();
    let admin = TestAdmin::new();

    let pair = jwt_utils
        .generate_token_pair(&admin.id, &admin.email, &admin.role)
        .unwrap();
    assert_ne!(pair.access_token, pair.refresh_token);
    assert_eq!(pair.token_type, "Bearer");
    assert!(pair.expires_in > 0);

    assert!(jwt_utils.validate_access_token(&pair.access_token).is_ok());
    assert!(jwt_utils.validate_refresh_token(&pair.refresh_token).is_ok());
}

#[test]
fn test_validate_garbage_token_fails() {
    let jwt_utils = create_test_jwt_utils();
    assert!(jwt_utils.validate_access_token("not-a-jwt").is_err());
    assert!(jwt_utils.validate_access_token("").is_err());
}

#[test]
fn test_validate_token_with_wrong_secret_fails() {
    let jwt_utils = create_test_jwt_utils();
    let admin = TestAdmin::new();
    let token = jwt_utils
        .generate_access_token(&admin.id, &admin.email, &admin.role)
        .unwrap();

    let mut other_config = JwtConfig::default();
    other_config.jwt_secret = "another-secret-key-that-is-also-long-enough".to_string();
    let other_utils = JwtTokenUtilsImpl::new(other_config);

    assert!(other_utils.validate_access_token(&token).is_err());
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils.extract_token_from_header("Bearer abc.def.ghi").unwrap();
    assert_eq!(token, "abc.def.ghi");

    assert!(jwt_utils.extract_token_from_header("Basic abc").is_err());
    assert!(jwt_utils.extract_token_from_header("Bearer ").is_err());
    assert!(jwt_utils.extract_token_from_header("").is_err());
}

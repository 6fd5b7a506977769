use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &str = "supersecretjwtsecretforunittesting123";
const ADMIN_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

fn token(secret: &str, role: &str, exp: usize) -> String {
    let claims = AdminClaims {
        sub: ADMIN_ID.to_string(),
        role: role.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_validate_admin_jwt_success() {
    let token = token(SECRET, ADMIN_ROLE, 9999999999);

    let claims = validate_admin_jwt(&token, &AdminJwtSecret::new(SECRET))
        .expect("Valid token should pass");
    assert_eq!(claims.sub, ADMIN_ID);
    assert!(claims.is_admin());
}

#[test]
fn test_validate_admin_jwt_expired() {
    let token = token(SECRET, ADMIN_ROLE, 1);

    let result = validate_admin_jwt(&token, &AdminJwtSecret::new(SECRET));
    assert!(result.is_err());
}

#[test]
fn test_validate_admin_jwt_invalid_signature() {
    let token = token("wrongsecret", ADMIN_ROLE, 9999999999);

    let result = validate_admin_jwt(&token, &AdminJwtSecret::new(SECRET));
    assert!(result.is_err());
}

#[test]
fn test_non_admin_role_is_not_admin() {
    let token = token(SECRET, "buyer", 9999999999);

    let claims = validate_admin_jwt(&token, &AdminJwtSecret::new(SECRET)).unwrap();
    assert!(!claims.is_admin());
}

use std::sync::Arc;

use axum::{
    RequestPartsExt, async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

impl AdminClaims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// HS256 secret used to verify admin access tokens. Installed on the router
/// as an `Extension` so the extractor never reads configuration itself.
#[derive(Clone)]
pub struct AdminJwtSecret(pub Arc<str>);

impl AdminJwtSecret {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }
}

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub admin_id: Uuid,
    pub role: String,
}

pub fn validate_admin_jwt(token: &str, secret: &AdminJwtSecret) -> anyhow::Result<AdminClaims> {
    let decoding_key = DecodingKey::from_secret(secret.0.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<AdminClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .extensions
            .get::<AdminJwtSecret>()
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("admin jwt secret is not installed")))?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::Unauthorized)?;

        let claims = validate_admin_jwt(bearer.token(), &secret).map_err(|err| {
            warn!(error = %err, "auth: rejected admin token");
            AppError::Unauthorized
        })?;

        if !claims.is_admin() {
            warn!(sub = %claims.sub, role = %claims.role, "auth: non-admin role on admin route");
            return Err(AppError::Forbidden);
        }

        let admin_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

        Ok(AdminUser {
            admin_id,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests;

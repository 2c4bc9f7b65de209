// src/shared/api/api_secret.rs
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use sha2::{Digest, Sha256};
use std::{
    fmt,
    future::{ready, Ready},
};

use crate::shared::api::ApiResponse;

/// Shared secret that gates read access on dashboard GET routes.
///
/// Only the SHA-256 digest is kept in memory, so comparisons run over
/// fixed-length inputs no matter what the caller sends.
#[derive(Clone)]
pub struct ApiSecret {
    digest: Vec<u8>,
}

impl ApiSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).to_vec(),
        }
    }

    pub fn matches(&self, presented: &str) -> bool {
        let presented = Sha256::digest(presented.as_bytes());

        self.digest
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSecret").field("digest", &"<redacted>").finish()
    }
}

/// Extractor proving the request carried `Authorization: Bearer <API_SECRET>`.
#[derive(Debug, Clone, Copy)]
pub struct ApiSecretGuard;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for ApiSecretGuard {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let secret = match req.app_data::<web::Data<ApiSecret>>() {
            Some(secret) => secret,
            None => {
                tracing::error!("API secret guard used without a configured secret");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_bearer(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        if !secret.matches(&token) {
            tracing::warn!(path = %req.path(), "rejected request with invalid API secret");
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_API_SECRET",
                "Invalid API secret",
            ))));
        }

        ready(Ok(ApiSecretGuard))
    }
}

fn extract_bearer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

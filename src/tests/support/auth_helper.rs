use actix_web::web;

use crate::shared::api::ApiSecret;

pub const TEST_API_SECRET: &str = "test-api-secret-value";

pub fn api_secret_data() -> web::Data<ApiSecret> {
    web::Data::new(ApiSecret::new(TEST_API_SECRET))
}

/// `Authorization` header carrying [`TEST_API_SECRET`].
pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_API_SECRET))
}

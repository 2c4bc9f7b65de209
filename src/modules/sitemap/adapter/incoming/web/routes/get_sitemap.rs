use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::{api::schemas::ErrorResponse, shared::api::ApiResponse, AppState};

pub const SITEMAP_CACHE_CONTROL: &str =
    "public, s-maxage=3600, max-age=3600, stale-while-revalidate=600";

const FALLBACK_HOST: &str = "localhost:3000";

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Configured site URL, else derived from the proxy and host headers.
fn base_url(site_url: Option<&str>, req: &HttpRequest) -> String {
    if let Some(url) = site_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }

    let host = header_value(req, "x-forwarded-host")
        .or_else(|| header_value(req, "host"))
        .unwrap_or(FALLBACK_HOST);
    let proto = header_value(req, "x-forwarded-proto").unwrap_or("http");

    format!("{proto}://{host}")
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = "sitemap",
    responses(
        (status = 200, description = "Sitemap document", content_type = "application/xml", body = String),
        (status = 500, description = "Sitemap could not be generated", body = ErrorResponse)
    )
)]
#[get("/sitemap.xml")]
pub async fn get_sitemap_handler(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let base = base_url(data.site_url.as_deref(), &req);

    match data.sitemap.execute(&base).await {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml; charset=utf-8")
            .insert_header((header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL))
            .body(xml),
        Err(e) => {
            error!("Failed to generate sitemap: {}", e);
            ApiResponse::internal_error()
        }
    }
}

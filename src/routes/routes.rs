use actix_web::{web, HttpResponse, Result};

use crate::handlers::gallery::{get_gallery_page_handler, not_found_handler};
use crate::routes::gallery::configure_gallery_routes;

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(get_gallery_page_handler))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(health_check))
                .configure(configure_gallery_routes),
        )
        .default_service(web::to(not_found_handler));
}

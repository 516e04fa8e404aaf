use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use log::{error, info};

use crate::{
    errors::ApiError,
    handlers::gallery::service::GalleryService,
    services::{GallerySnapshot, RenderState},
};

/// GET / - Returns the hosting page with the rendered gallery
pub async fn get_gallery_page_handler(
    snapshot: web::Data<GallerySnapshot>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET / request");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(snapshot.html.clone()))
}

/// GET /gallery - Returns the cards and outcome of the rendering pass
///
/// # Returns
/// JSON object of GalleryResponse, or 503 when the pass failed
pub async fn get_gallery_handler(
    snapshot: web::Data<GallerySnapshot>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /gallery request");

    if snapshot.outcome.state == RenderState::Failed {
        let reason = snapshot
            .outcome
            .error
            .clone()
            .unwrap_or_else(|| "rendering pass failed".to_string());
        error!("Gallery pass failed: {}", reason);
        return Err(ApiError::Unavailable(reason));
    }

    let gallery = GalleryService::get_gallery(&snapshot);
    info!(
        "Gallery pass {:?} with {} cards",
        gallery.state,
        gallery.cards.len()
    );
    Ok(HttpResponse::Ok().json(gallery))
}

/// Fallback for unknown paths
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("No route for {}", req.path())))
}

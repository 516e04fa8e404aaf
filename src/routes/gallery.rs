use actix_web::web;

use crate::handlers::gallery::get_gallery_handler;

pub fn configure_gallery_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/gallery", web::get().to(get_gallery_handler));
}

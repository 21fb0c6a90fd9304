use actix_web::{web, HttpResponse};

use crate::routes;

pub mod coin_handlers;
pub mod error_handlers;

/// Register every route. The pool and `AppConfig` are expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", routes::COIN_CREATE))
                .finish()
        }))
        .route(routes::COIN_CREATE, web::get().to(coin_handlers::new_form))
        // Default 404 handler (must be registered last)
        .default_service(web::to(error_handlers::not_found));
}

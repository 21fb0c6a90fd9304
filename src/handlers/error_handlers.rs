use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::templates_structs::{NotFoundTemplate, PageContext};

pub async fn not_found(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    let tmpl = NotFoundTemplate {
        ctx: PageContext::new(&config.app_name, req.path()),
    };
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(tmpl.render()?))
}

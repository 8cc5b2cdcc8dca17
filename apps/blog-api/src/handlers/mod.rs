//! HTTP handlers and route configuration.

mod posts;

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| AppError::BadRequest("Invalid post id".to_string()).into()),
    )
    .service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

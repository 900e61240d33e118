pub mod auth;
pub mod employee;
pub mod file;

use actix_web::{web, HttpRequest};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::utils::image::MAX_IMAGE_BYTES;
use crate::utils::jwt::{self, Claims};

// Room for a maximum-size image once base64 encoded into a JSON body.
const JSON_BODY_LIMIT: usize = MAX_IMAGE_BYTES * 2;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
    .app_data(web::PayloadConfig::new(JSON_BODY_LIMIT))
    .service(
        web::resource("/v1/auth")
            .route(web::post().to(auth::auth_handler)),
    )
    .service(
        web::resource("/v1/file")
            .route(web::post().to(file::upload_file)),
    )
    .service(
        web::resource("/v1/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/v1/employee/summary")
            .route(web::get().to(employee::get_summary)),
    )
    .service(
        web::resource("/v1/employee/print")
            .route(web::get().to(employee::print_employees)),
    )
    .service(
        web::resource("/v1/employee/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/v1/employee/{id}/toggle")
            .route(web::post().to(employee::toggle_employee_status)),
    );
}

pub(crate) fn authorize(req: &HttpRequest, config: &AppConfig) -> Result<Claims, AppError> {
    let token = req.headers().get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(jwt::bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;

    jwt::validate_token(token, &config.jwt_secret)
        .map_err(|err| AppError::Unauthorized(err.to_string()))
}

/// Stand-in for network latency. Dropping the request future cancels it.
pub(crate) async fn simulate_latency(config: &AppConfig) {
    if !config.simulated_latency.is_zero() {
        tokio::time::sleep(config.simulated_latency).await;
    }
}

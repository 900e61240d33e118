use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::AppError;
use crate::state::AppState;
use crate::utils;

/// Any non-empty username and password pair is accepted.
#[derive(Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1))]
    username: String,
    #[validate(length(min = 1))]
    password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    username: String,
    token: String,
}

pub async fn auth_handler(
    req: web::Json<AuthRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.0.validate()
        .map_err(|_| AppError::Unauthorized("Invalid credentials. Please try again.".to_string()))?;

    let token = utils::jwt::generate_token(&req.0.username, &state.config.jwt_secret)
        .map_err(|_| AppError::InternalServerError("Token generation error".to_string()))?;

    info!("User {} signed in", req.0.username);
    Ok(HttpResponse::Ok().json(AuthResponse {
        username: req.0.username.clone(),
        token,
    }))
}

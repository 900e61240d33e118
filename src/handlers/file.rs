use actix_web::{web, HttpResponse, HttpRequest};
use log::debug;
use serde::Serialize;
use crate::errors::AppError;
use crate::handlers::authorize;
use crate::state::AppState;
use crate::utils::image::encode_profile_image;

#[derive(Serialize)]
struct FileUploadResponse {
    uri: String,
}

/// Turns an uploaded image into the data URI stored on the employee record.
pub async fn upload_file(
    req: HttpRequest,
    state: web::Data<AppState>,
    file: web::Bytes,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &state.config)?;

    let uri = encode_profile_image(&file).map_err(|err| {
        debug!("Rejected upload of {} bytes: {}", file.len(), err);
        AppError::from(err)
    })?;

    Ok(HttpResponse::Ok().json(FileUploadResponse { uri }))
}

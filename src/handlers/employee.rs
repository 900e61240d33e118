use actix_web::{web, HttpResponse, HttpRequest};
use log::info;
use serde_json::json;
use crate::errors::AppError;
use crate::form::EmployeeForm;
use crate::handlers::{authorize, simulate_latency};
use crate::models::employee::EmployeeDraft;
use crate::state::AppState;
use crate::view::{print, RosterFilter, RosterView};

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

pub async fn get_employees(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<RosterFilter>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &state.config)?;
    simulate_latency(&state.config).await;

    let view = RosterView::load(&state.store, query.into_inner());
    Ok(HttpResponse::Ok().json(view.into_visible()))
}

pub async fn get_summary(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &state.config)?;

    let view = RosterView::load(&state.store, RosterFilter::default());
    Ok(HttpResponse::Ok().json(view.summary()))
}

pub async fn print_employees(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<RosterFilter>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &state.config)?;

    let view = RosterView::load(&state.store, query.into_inner());
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(print::render_roster(&view)))
}

pub async fn get_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, &state.config)?;

    let employee = state.store.get(&id).ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    draft: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, AppError> {
    let claims = authorize(&req, &state.config)?;
    simulate_latency(&state.config).await;

    let mut form = EmployeeForm::new();
    form.apply(draft.into_inner());
    let employee = form.submit(&state.store)?.into_employee();

    info!("Employee {} created by {}", employee.id, claims.sub);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    draft: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, AppError> {
    let claims = authorize(&req, &state.config)?;
    simulate_latency(&state.config).await;

    let existing = state.store.get(&id).ok_or_else(not_found)?;
    let mut form = EmployeeForm::edit(&existing);
    form.apply(draft.into_inner());
    let employee = form.submit(&state.store)?.into_employee();

    info!("Employee {} updated by {}", employee.id, claims.sub);
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn toggle_employee_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let claims = authorize(&req, &state.config)?;

    let is_active = state.store.toggle_active(&id)?.ok_or_else(not_found)?;
    info!("Employee {} set {} by {}", id, if is_active { "active" } else { "inactive" }, claims.sub);
    let employee = state.store.get(&id).ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let claims = authorize(&req, &state.config)?;

    if !state.store.delete(&id)? {
        return Err(not_found());
    }

    info!("Employee {} deleted by {}", id, claims.sub);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}

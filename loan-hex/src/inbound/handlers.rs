//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use loan_types::{AppError, LoanPayment, LoanPaymentRepository};

use crate::LoanPaymentService;

/// Application state shared across handlers.
pub struct AppState<R: LoanPaymentRepository> {
    pub service: LoanPaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Lists all loan payments.
///
/// 200 with the full list, 404 with no body when the store is empty.
#[tracing::instrument(skip(state))]
pub async fn get_all_loan_payments<R: LoanPaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Response, ApiError> {
    let list = state.service.get_all_loan_payments().await?;

    if list.is_empty() {
        tracing::warn!("Loan payment list is not found");
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    tracing::info!(size = list.len(), "Loan payments found");
    Ok(Json(list).into_response())
}

/// Query parameters for the date filter endpoint.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Finds payments by date (ISO `YYYY-MM-DD`).
///
/// Three-way outcome: missing/unparseable or future date is 400 with an
/// empty list body, a valid date with no matches is 404 with no body,
/// otherwise 200 with the matching records in store order.
#[tracing::instrument(skip(state))]
pub async fn get_loan_payments_by_date<R: LoanPaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(params): Query<DateQuery>,
) -> Result<Response, ApiError> {
    let date = match params.date.as_deref().map(str::parse::<chrono::NaiveDate>) {
        Some(Ok(date)) => date,
        Some(Err(_)) | None => {
            tracing::warn!("Date cannot be empty");
            return Ok(bad_request_empty_list());
        }
    };

    match state.service.get_loan_payments_by_date(date).await {
        Ok(list) => {
            tracing::info!(size = list.len(), "Returning list of payments");
            Ok(Json(list).into_response())
        }
        Err(AppError::BadRequest(msg)) => {
            tracing::warn!("{}", msg);
            Ok(bad_request_empty_list())
        }
        Err(AppError::NotFound(msg)) => {
            tracing::warn!("{}", msg);
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// 400 carrying an explicit empty list, matching the endpoint contract.
fn bad_request_empty_list() -> Response {
    (StatusCode::BAD_REQUEST, Json(Vec::<LoanPayment>::new())).into_response()
}

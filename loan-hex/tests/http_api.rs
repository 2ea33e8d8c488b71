//! End-to-end tests for the HTTP adapter.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`, and
//! checks that the live router agrees with the declared routing table.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use loan_hex::inbound::HttpServer;
use loan_hex::inbound::routes::ROUTES;
use loan_hex::service::LoanPaymentService;
use loan_types::{LoanPayment, LoanPaymentRepository, PaymentStatus, RepoError};

/// In-memory repository backing the router under test.
struct MemRepo {
    payments: Mutex<Vec<LoanPayment>>,
}

impl MemRepo {
    fn new(payments: Vec<LoanPayment>) -> Self {
        Self {
            payments: Mutex::new(payments),
        }
    }
}

#[async_trait]
impl LoanPaymentRepository for MemRepo {
    async fn list_payments(&self) -> Result<Vec<LoanPayment>, RepoError> {
        Ok(self.payments.lock().unwrap().clone())
    }

    async fn find_payments_by_date(&self, date: NaiveDate) -> Result<Vec<LoanPayment>, RepoError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.payment_date == date)
            .cloned()
            .collect())
    }

    async fn record_payment(&self, payment: &LoanPayment) -> Result<(), RepoError> {
        self.payments.lock().unwrap().push(payment.clone());
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Store from the reference scenario: two payments on 2024-01-10, one
/// on 2024-02-01.
fn seeded_router() -> axum::Router {
    let repo = MemRepo::new(vec![
        LoanPayment::new(1, date(2024, 1, 10), 25_000, PaymentStatus::Paid),
        LoanPayment::new(2, date(2024, 1, 10), 10_000, PaymentStatus::Paid),
        LoanPayment::new(3, date(2024, 2, 1), 5_000, PaymentStatus::Pending),
    ]);
    HttpServer::new(LoanPaymentService::new(repo)).router()
}

fn empty_router() -> axum::Router {
    HttpServer::new(LoanPaymentService::new(MemRepo::new(Vec::new()))).router()
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn as_payments(body: &[u8]) -> Vec<serde_json::Value> {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(seeded_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_all_returns_full_list() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_payments(&body).len(), 3);
}

#[tokio::test]
async fn test_all_empty_store_is_404_without_body() {
    let (status, body) = get(empty_router(), "/api/loanPayments/all").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_date_with_matches_returns_exactly_them() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/date?date=2024-01-10").await;

    assert_eq!(status, StatusCode::OK);
    let payments = as_payments(&body);
    assert_eq!(payments.len(), 2);
    for payment in &payments {
        assert_eq!(payment["payment_date"], "2024-01-10");
    }
}

#[tokio::test]
async fn test_future_date_is_400_with_empty_list() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/date?date=2099-01-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_payments(&body).is_empty());
}

#[tokio::test]
async fn test_missing_date_is_400_with_empty_list() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_payments(&body).is_empty());
}

#[tokio::test]
async fn test_unparseable_date_is_400_with_empty_list() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/date?date=tomorrow").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_payments(&body).is_empty());
}

#[tokio::test]
async fn test_date_without_matches_is_404_without_body() {
    let (status, body) = get(seeded_router(), "/api/loanPayments/date?date=2023-12-31").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Routing table agreement
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_every_declared_route_is_served() {
    for route in ROUTES {
        let response = seeded_router()
            .oneshot(
                Request::builder()
                    .method(route.method)
                    .uri(route.path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {} not routed",
            route.method,
            route.path
        );
        assert!(
            route.responses.contains(&response.status().as_u16()),
            "{} {} answered undeclared status {}",
            route.method,
            route.path,
            response.status()
        );
    }
}

#[tokio::test]
async fn test_undeclared_methods_are_rejected() {
    for route in ROUTES {
        // Only GET routes are declared; anything else must not be served.
        let response = seeded_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(route.path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "POST {} unexpectedly served",
            route.path
        );
    }
}

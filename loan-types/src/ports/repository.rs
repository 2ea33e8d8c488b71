//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory mocks) implement this trait.

use chrono::NaiveDate;

use crate::domain::LoanPayment;
use crate::error::RepoError;

/// The main repository port for loan payment queries.
///
/// The query endpoints only read; `record_payment` exists for the
/// writer path that populates the store (seeding, tests, upstream
/// ingestion).
#[async_trait::async_trait]
pub trait LoanPaymentRepository: Send + Sync + 'static {
    /// Lists every payment, in store order.
    async fn list_payments(&self) -> Result<Vec<LoanPayment>, RepoError>;

    /// Finds payments whose payment date equals `date` exactly.
    async fn find_payments_by_date(&self, date: NaiveDate) -> Result<Vec<LoanPayment>, RepoError>;

    /// Persists a payment record.
    async fn record_payment(&self, payment: &LoanPayment) -> Result<(), RepoError>;
}

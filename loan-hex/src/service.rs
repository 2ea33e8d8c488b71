//! Loan Payment Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use chrono::{NaiveDate, Utc};

use loan_types::{AppError, LoanPayment, LoanPaymentRepository};

/// Application service for loan payment queries.
///
/// Generic over `R: LoanPaymentRepository` - the adapter is injected at
/// compile time. This enables:
/// - Swapping repositories without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct LoanPaymentService<R: LoanPaymentRepository> {
    repo: R,
}

impl<R: LoanPaymentRepository> LoanPaymentService<R> {
    /// Creates a new loan payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists every payment in the store.
    ///
    /// An empty store yields an empty list; the HTTP layer decides how
    /// to present that.
    pub async fn get_all_loan_payments(&self) -> Result<Vec<LoanPayment>, AppError> {
        self.repo.list_payments().await.map_err(Into::into)
    }

    /// Finds payments that occurred exactly on `date`.
    ///
    /// Dates strictly after today are rejected as bad input before the
    /// store is queried; a valid date with no matches is `NotFound`.
    pub async fn get_loan_payments_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<LoanPayment>, AppError> {
        let today = Utc::now().date_naive();
        if date > today {
            return Err(AppError::BadRequest(
                "The provided date is in the future".into(),
            ));
        }

        let payments = self.repo.find_payments_by_date(date).await?;
        if payments.is_empty() {
            return Err(AppError::NotFound(
                "There are no payments on the specified date".into(),
            ));
        }

        Ok(payments)
    }
}

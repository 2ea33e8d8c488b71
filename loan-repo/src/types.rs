//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use loan_types::{LoanPayment, LoanPaymentId, PaymentStatus, RepoError};

#[cfg(not(feature = "sqlite"))]
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(not(feature = "sqlite"))]
use uuid::Uuid;

/// Loan payment row from database.
///
/// SQLite stores ids as TEXT, dates as ISO `YYYY-MM-DD` text and
/// timestamps as RFC 3339 text; Postgres uses native UUID/DATE/TIMESTAMPTZ.
#[derive(FromRow)]
pub struct DbLoanPayment {
    #[cfg(not(feature = "sqlite"))]
    pub id: Uuid,
    #[cfg(feature = "sqlite")]
    pub id: String,

    pub loan_id: i64,

    #[cfg(not(feature = "sqlite"))]
    pub payment_date: NaiveDate,
    #[cfg(feature = "sqlite")]
    pub payment_date: String,

    pub amount: i64,
    pub status: String,

    #[cfg(not(feature = "sqlite"))]
    pub created_at: DateTime<Utc>,
    #[cfg(feature = "sqlite")]
    pub created_at: String,
}

pub fn parse_status(s: &str) -> Result<PaymentStatus, RepoError> {
    s.parse()
        .map_err(|_| RepoError::Database(format!("Unknown payment status: {}", s)))
}

impl DbLoanPayment {
    /// Convert database row to domain LoanPayment.
    pub fn into_domain(self) -> Result<LoanPayment, RepoError> {
        let status = parse_status(&self.status)?;

        #[cfg(not(feature = "sqlite"))]
        let (id, payment_date, created_at) = (
            LoanPaymentId::from_uuid(self.id),
            self.payment_date,
            self.created_at,
        );

        #[cfg(feature = "sqlite")]
        let (id, payment_date, created_at) = {
            let uuid =
                uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;

            let payment_date = self
                .payment_date
                .parse::<chrono::NaiveDate>()
                .map_err(|e| RepoError::Database(e.to_string()))?;

            let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
                .map_err(|e| RepoError::Database(e.to_string()))?
                .with_timezone(&chrono::Utc);

            (LoanPaymentId::from_uuid(uuid), payment_date, created_at)
        };

        Ok(LoanPayment::from_parts(
            id,
            self.loan_id,
            payment_date,
            self.amount,
            status,
            created_at,
        ))
    }
}

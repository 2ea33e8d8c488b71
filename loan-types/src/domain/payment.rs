//! Loan payment domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a LoanPayment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanPaymentId(Uuid);

impl LoanPaymentId {
    /// Creates a new random LoanPaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a LoanPaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LoanPaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LoanPaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LoanPaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Settlement state of a loan payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Scheduled but not yet settled
    Pending,
    /// Settled on or before the due date
    Paid,
    /// Settled after the due date
    Late,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Late => write!(f, "LATE"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PAID" => Ok(PaymentStatus::Paid),
            "LATE" => Ok(PaymentStatus::Late),
            other => Err(format!("unknown payment status: {}", other)),
        }
    }
}

/// A recorded loan payment.
///
/// Payments are written by an out-of-scope writer path and are
/// read-only for the query endpoints in this workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPayment {
    /// Unique identifier
    pub id: LoanPaymentId,
    /// The loan this payment belongs to
    pub loan_id: i64,
    /// Calendar date the payment occurred on
    pub payment_date: NaiveDate,
    /// Amount in smallest currency unit (e.g., cents)
    pub amount: i64,
    /// Settlement state
    pub status: PaymentStatus,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl LoanPayment {
    /// Creates a new payment record with a fresh identifier.
    pub fn new(loan_id: i64, payment_date: NaiveDate, amount: i64, status: PaymentStatus) -> Self {
        Self {
            id: LoanPaymentId::new(),
            loan_id,
            payment_date,
            amount,
            status,
            created_at: Utc::now(),
        }
    }

    /// Reconstructs a payment from database fields.
    pub fn from_parts(
        id: LoanPaymentId,
        loan_id: i64,
        payment_date: NaiveDate,
        amount: i64,
        status: PaymentStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            loan_id,
            payment_date,
            amount,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_gets_fresh_id() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let a = LoanPayment::new(7, date, 25_000, PaymentStatus::Paid);
        let b = LoanPayment::new(7, date, 25_000, PaymentStatus::Paid);

        assert_ne!(a.id, b.id);
        assert_eq!(a.payment_date, date);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [PaymentStatus::Pending, PaymentStatus::Paid, PaymentStatus::Late] {
            let parsed: PaymentStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_unknown_string_fails() {
        assert!("SETTLED".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_payment_serializes_date_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let payment = LoanPayment::new(1, date, 1_000, PaymentStatus::Pending);

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["payment_date"], "2024-02-01");
        assert_eq!(json["status"], "PENDING");
    }
}

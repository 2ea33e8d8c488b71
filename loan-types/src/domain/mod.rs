//! Domain types for the loan payment service.

mod payment;

pub use payment::{LoanPayment, LoanPaymentId, PaymentStatus};

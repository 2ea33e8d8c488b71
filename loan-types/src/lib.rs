//! # Loan Types
//!
//! Domain types and port traits for the loan payment query service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (LoanPayment, PaymentStatus)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Repository and application error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{LoanPayment, LoanPaymentId, PaymentStatus};
pub use error::{AppError, RepoError};
pub use ports::LoanPaymentRepository;

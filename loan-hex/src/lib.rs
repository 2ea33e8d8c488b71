//! # Loan Hex
//!
//! Application service layer and HTTP adapter for the loan payment service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: LoanPaymentRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::LoanPaymentService;

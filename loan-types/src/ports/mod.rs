//! Port traits implemented by outbound adapters.

mod repository;

pub use repository::LoanPaymentRepository;

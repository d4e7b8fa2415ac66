//! Galaxy API test support utilities
//!
//! Shared pieces for unit and integration tests: logging initialization and
//! assertions over the `{"error": ...}` response contract.

pub mod error_body;
pub mod test_logging;

//! Banking domain module (accounts, banks, transfers).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. The model
//! is a sequence of direct balance mutations — accounts carry no status and
//! no transaction history.

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::Bank;
pub use passbook_core::{DomainError, DomainResult};

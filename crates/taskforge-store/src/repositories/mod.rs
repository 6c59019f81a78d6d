//! Stateless repositories over `&Connection`.
//!
//! Repositories hold no state of their own; every method takes a connection
//! so callers control pooling and transaction scope.

pub mod item;
pub mod user;

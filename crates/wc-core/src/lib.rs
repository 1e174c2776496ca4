//! # wc-core
//!
//! Error definitions shared across the workcal workspace.
//!
//! Every fallible operation in `wc-time`, `wc-calendars` and `workcal`
//! reports one of the [`Error`] kinds below, so the boundary layer can map
//! each kind to a single user-facing message.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};

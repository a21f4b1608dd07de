//! Builder API for ergonomic bypass list construction.
//!
//! This module provides a fluent builder and the `stations!` macro for
//! assembling departments with minimal boilerplate. Both end in the same
//! validation as [`BypassList::try_new`](crate::engine::BypassList::try_new).

pub mod error;
pub mod list;
pub mod macros;

pub use error::BuildError;
pub use list::BypassListBuilder;

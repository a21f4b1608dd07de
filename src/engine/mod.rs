//! The traversal engine.
//!
//! A [`BypassList`] owns a validated station map and walks it exactly once,
//! on the first query, no matter how many threads ask. The walk starts at
//! department 1 with no seals, records the seals held on leaving each
//! department, and stops either after the last department or as soon as a
//! department repeats a seal configuration it already produced.

mod bypass;
mod query;
mod walk;

pub use bypass::BypassList;
pub use query::QueryResult;
pub use walk::{Visit, VisitLog, WalkOutcome};

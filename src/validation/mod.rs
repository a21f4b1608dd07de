//! Validation of station maps before a bypass list is built.
//!
//! Checks are expressed with Stillwater's `Validation` type so that a single
//! pass reports every problem in the map instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use bypass::core::{Rule, StationMap};
//! use bypass::validation::{validate, StationMapViolation};
//! use stillwater::validation::Validation;
//!
//! let mut stations = StationMap::new();
//! stations.insert(1, Rule::unconditional(1, 2, 2));
//! stations.insert(3, Rule::unconditional(2, 2, 1));
//!
//! match validate(&stations) {
//!     Validation::Failure(violations) => {
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, StationMapViolation::IndexOutOfRange { index: 3, .. })));
//!     }
//!     Validation::Success(_) => panic!("gap at station 2 must be rejected"),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate;
pub use violations::StationMapViolation;

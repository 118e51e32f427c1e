//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the collector traits and every helper.
//!
//! # Example
//!
//! ```
//! use underbar::prelude::*;
//!
//! let collector = vec![].into_collector().map(|x: i32| x + 1);
//!
//! assert_eq!(collector.collect_then_finish([1, 2]), [2, 3]);
//! assert!(some([1, 2], |&x| x == 2));
//! ```

pub use crate::collector::{Collector, CollectorBase, IntoCollectorBase};
pub use crate::helpers::*;

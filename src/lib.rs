//! underscore.js-style collection helpers for Rust.
//!
//! The crate root exposes five small functions modelled after the well-known
//! scripting-language library: [`some`], [`filter`], [`map`], [`find`] and [`reduce`],
//! plus a few companions ([`every`], [`reject`], [`filter_into`], [`map_into`])
//! and fallible `try_` variants.
//!
//! Every helper takes anything implementing [`IntoIterator`], so callers choose
//! the collection type. Pass `&collection` to keep the input untouched.
//!
//! ```
//! use underbar::{filter, find, map, reduce, some};
//!
//! let fruits = ["apple", "kiwi", "banana"];
//! assert_eq!(filter(fruits, |fruit| fruit.len() > 4), ["apple", "banana"]);
//!
//! let nums = vec![1, 2, 3, 4];
//! assert_eq!(map(&nums, |&x| x * x), [1, 4, 9, 16]);
//! assert_eq!(reduce(&nums, |&x| x, |a, b| a + b, 0), 10);
//!
//! assert!(some(&nums, |&&x| x > 3));
//! assert_eq!(find([3, 5, 8, 10], |&x| x % 2 == 0), Some(8));
//! ```
//!
//! # Collectors
//!
//! Under the hood each helper feeds the input into a [`Collector`](collector::Collector):
//! a sink that consumes items one by one and reports through [`ControlFlow`] whether it
//! wants more. [`Break`](core::ops::ControlFlow::Break) is what makes [`some`] and
//! [`find`] stop at the first match.
//!
//! The collector traits are public, so a caller can hand any collector to
//! [`filter_into`] or [`map_into`], or write one of their own:
//!
//! ```
//! use underbar::prelude::*;
//!
//! let mut collector = vec![0].into_collector().filter(|&x: &i32| x % 3 == 0);
//!
//! assert!(collector.collect(1).is_continue());
//! assert!(collector.collect(6).is_continue());
//!
//! assert_eq!(collector.finish(), [0, 6]);
//! ```
//!
//! # Features
//!
//! - `std` (default): enables `alloc`.
//! - `alloc`: enables the [`Vec`]-returning helpers and the [`Vec`] collector.
//!   Without it the crate is `no_std` and keeps [`some`], [`every`], [`find`], [`reduce`]
//!   and their `try_` variants.
//!
//! [`ControlFlow`]: core::ops::ControlFlow
//! [`Vec`]: std::vec::Vec

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod collector;
mod helpers;
pub mod prelude;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod vec;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use helpers::*;

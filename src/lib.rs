//! A navigable ordered map on a plain binary search tree.
//!
//! [`NavTreeMap`] keeps its entries ordered by a [`Comparator`] and answers,
//! besides the usual point operations, the navigation queries of a sorted map:
//!
//! - [`lower_key`](NavTreeMap::lower_key), [`floor_key`](NavTreeMap::floor_key),
//!   [`ceiling_key`](NavTreeMap::ceiling_key) and [`higher_key`](NavTreeMap::higher_key)
//!   (and their `_entry` forms) find the nearest key around a probe
//! - [`poll_first_entry`](NavTreeMap::poll_first_entry) and
//!   [`poll_last_entry`](NavTreeMap::poll_last_entry) remove from either end
//! - [`head_map`](NavTreeMap::head_map), [`tail_map`](NavTreeMap::tail_map) and
//!   [`sub_map`](NavTreeMap::sub_map) copy out a key range
//!
//! # Example
//!
//! ```
//! use navtree::{NavError, NavTreeMap};
//!
//! let mut departures = NavTreeMap::new();
//! departures.insert(905, "Leeds");
//! departures.insert(1130, "York");
//! departures.insert(1415, "Hull");
//!
//! // The first train at or after 11:00.
//! assert_eq!(departures.ceiling_entry(&1100), Some((&1130, &"York")));
//! // The last train before 11:30.
//! assert_eq!(departures.lower_key(&1130), Some(&905));
//!
//! let morning = departures.head_map(&1200);
//! assert_eq!(morning.len(), 2);
//!
//! departures.clear();
//! assert_eq!(departures.first_key(), Err(NavError::Empty));
//! ```
//!
//! # Implementation
//!
//! The tree is an unbalanced binary search tree with parent links, stored in
//! an arena of nodes. Its shape follows insertion order, so the cost of an
//! operation is proportional to the tree's height: logarithmic for random
//! input, linear for sorted input. All traversals are iterative.
//!
//! The crate is `no_std` and only requires `alloc`.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod distinct_vec;
mod error;
mod raw;

pub mod navtree_map;

pub use compare::{Comparator, Natural, Reverse};
pub use distinct_vec::DistinctVec;
pub use error::NavError;
pub use navtree_map::NavTreeMap;

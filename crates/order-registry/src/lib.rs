//! # Order Registry
//!
//! An in-memory registry of dish orders with bounded capacity and running
//! aggregates.
//!
//! ## Architecture
//!
//! The crate composes two layers:
//!
//! - [`model`]: the [`Dish`] record and its [`CuisineType`] classification.
//! - [`registry`]: the [`OrderRegistry`], which stores dishes in a
//!   [`bounded_bag::BoundedBag`] and keeps the total preparation time and the
//!   elaborate-dish count current on every mutation.
//!
//! Aggregate queries read the maintained counters instead of rescanning, and
//! the report operation renders them in a fixed plain-text layout.
//!
//! ## Example
//!
//! ```rust
//! use order_registry::{CuisineType, Dish, OrderRegistry};
//!
//! let mut registry = OrderRegistry::new();
//! let spaghetti = Dish::new(
//!     "Spaghetti",
//!     vec!["Pasta".into(), "Tomato Sauce".into(), "Basil".into()],
//!     20,
//!     12.50,
//!     CuisineType::Italian,
//! );
//!
//! assert!(registry.place_order(spaghetti.clone()));
//! assert!(!registry.place_order(spaghetti), "duplicates are rejected");
//! assert_eq!(registry.prep_time_sum(), 20);
//! assert_eq!(registry.average_prep_time(), 20);
//! ```
//!
//! ## Concurrency
//!
//! The registry is a plain synchronous value. It is `Send`, so it can be
//! moved into whatever task or thread owns order intake; put it behind a lock
//! if several owners need it.

pub mod logging;
pub mod model;
pub mod registry;

pub use model::{CuisineType, Dish, ParseCuisineError};
pub use registry::{OrderRegistry, DEFAULT_CAPACITY, RELEASE_ALL_LABEL};

//! # Bounded Bag
//!
//! A small storage crate providing [`BoundedBag`], a fixed-capacity container
//! for items compared by value.
//!
//! ## Semantics
//!
//! - **Bounded**: capacity is fixed at construction; adds beyond it fail.
//! - **Unordered**: removal backfills from the end, so iteration order is
//!   unspecified.
//! - **Multiset**: equal items may coexist; removal takes one at a time.
//!
//! ## Example
//!
//! ```rust
//! use bounded_bag::BoundedBag;
//!
//! let mut bag = BoundedBag::new(2);
//! assert!(bag.add("espresso"));
//! assert!(bag.add("espresso"));
//! assert!(!bag.add("ristretto"));
//! assert_eq!(bag.count_of(&"espresso"), 2);
//! assert!(bag.remove(&"espresso"));
//! assert_eq!(bag.len(), 1);
//! ```

pub mod bag;

pub use bag::BoundedBag;

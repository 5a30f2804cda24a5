//! # Order Registry
//!
//! The registry tracks dishes on order in a fixed number of slots and keeps
//! two running aggregates, the total preparation time and the number of
//! elaborate dishes, in lockstep with every mutation. Aggregate queries read
//! those counters instead of rescanning the stored orders.
//!
//! ## Duplicate and capacity policy
//!
//! A dish equal to one already on order is rejected, and so is any dish once
//! the registry is full. [`OrderRegistry::place_order`] reports both cases as
//! a plain `false`; callers that need to tell them apart must check
//! [`OrderRegistry::is_full`] beforehand.
//!
//! ## Bulk releases
//!
//! [`OrderRegistry::release_below_prep_time`] and
//! [`OrderRegistry::release_by_cuisine`] drop whole groups of orders at once
//! and return how many were dropped. Both recognize a flush sentinel, a zero
//! threshold for the former and the [`RELEASE_ALL_LABEL`] label for the
//! latter, which clears the registry outright.

mod report;

use bounded_bag::BoundedBag;
use tracing::{debug, info};

use crate::model::{CuisineType, Dish};

/// Number of order slots a registry created with [`OrderRegistry::new`] provides.
pub const DEFAULT_CAPACITY: usize = 200;

/// Label accepted by [`OrderRegistry::release_by_cuisine`] to clear every order.
pub const RELEASE_ALL_LABEL: &str = "ALL";

/// Tracks dishes on order together with always-current aggregates.
///
/// The registry owns a [`BoundedBag`] of dishes plus a running total of
/// preparation minutes and a count of elaborate dishes. Both counters are
/// adjusted on every successful add and removal, so they always equal what a
/// fresh scan of the stored orders would produce.
#[derive(Debug, Clone)]
pub struct OrderRegistry {
    orders: BoundedBag<Dish>,
    total_prep_time: u32,
    elaborate_count: usize,
}

impl OrderRegistry {
    /// Creates a registry with [`DEFAULT_CAPACITY`] order slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a registry with room for `capacity` orders.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: BoundedBag::new(capacity),
            total_prep_time: 0,
            elaborate_count: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Places a dish on order.
    ///
    /// Returns `false` without touching the registry when an equal dish is
    /// already on order or when every slot is taken.
    pub fn place_order(&mut self, dish: Dish) -> bool {
        if self.orders.contains(&dish) {
            debug!(name = %dish.name(), "Duplicate order rejected");
            return false;
        }
        let name = dish.name().to_owned();
        let prep_time = dish.prep_time();
        let elaborate = dish.is_elaborate();
        if !self.orders.add(dish) {
            debug!(name = %name, capacity = self.orders.capacity(), "Registry full, order rejected");
            return false;
        }
        self.total_prep_time += prep_time;
        if elaborate {
            self.elaborate_count += 1;
        }
        info!(name = %name, prep_time, size = self.orders.len(), "Order placed");
        true
    }

    /// Serves one order equal to `dish`, freeing its slot.
    ///
    /// Returns `false` when no equal order exists.
    pub fn serve_order(&mut self, dish: &Dish) -> bool {
        if !self.orders.remove(dish) {
            debug!(name = %dish.name(), "Order not found");
            return false;
        }
        // The stored order was equal to the argument, so the argument's own
        // fields are the right amounts to subtract.
        self.total_prep_time -= dish.prep_time();
        if dish.is_elaborate() {
            self.elaborate_count -= 1;
        }
        info!(name = %dish.name(), size = self.orders.len(), "Order served");
        true
    }

    /// Releases every order with a preparation time strictly below
    /// `threshold` minutes, returning how many were released.
    ///
    /// A negative threshold releases nothing. A threshold of exactly zero is
    /// the flush sentinel: every order is released even though no preparation
    /// time can be below zero.
    pub fn release_below_prep_time(&mut self, threshold: i32) -> usize {
        if threshold < 0 {
            return 0;
        }
        if threshold == 0 {
            return self.release_all();
        }
        let threshold = threshold as u32;
        let total_prep_time = &mut self.total_prep_time;
        let elaborate_count = &mut self.elaborate_count;
        let mut released = 0;
        self.orders.retain(|dish| {
            if dish.prep_time() >= threshold {
                return true;
            }
            *total_prep_time -= dish.prep_time();
            if dish.is_elaborate() {
                *elaborate_count -= 1;
            }
            released += 1;
            false
        });
        info!(released, threshold, size = self.orders.len(), "Released orders below threshold");
        released
    }

    /// Releases every order of the cuisine named by `label`, returning how
    /// many were released.
    ///
    /// The special label [`RELEASE_ALL_LABEL`] releases everything. Unknown
    /// labels release nothing.
    pub fn release_by_cuisine(&mut self, label: &str) -> usize {
        if label == RELEASE_ALL_LABEL {
            return self.release_all();
        }
        let cuisine = match label.parse::<CuisineType>() {
            Ok(cuisine) => cuisine,
            Err(_) => {
                debug!(label, "Unknown cuisine label, nothing released");
                return 0;
            }
        };
        let total_prep_time = &mut self.total_prep_time;
        let elaborate_count = &mut self.elaborate_count;
        let mut released = 0;
        self.orders.retain(|dish| {
            if dish.cuisine() != cuisine {
                return true;
            }
            *total_prep_time -= dish.prep_time();
            if dish.is_elaborate() {
                *elaborate_count -= 1;
            }
            released += 1;
            false
        });
        info!(released, cuisine = %cuisine, size = self.orders.len(), "Released orders by cuisine");
        released
    }

    fn release_all(&mut self) -> usize {
        let released = self.orders.len();
        self.orders.clear();
        self.total_prep_time = 0;
        self.elaborate_count = 0;
        info!(released, "Released all orders");
        released
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sum of preparation minutes across all orders.
    pub fn prep_time_sum(&self) -> u32 {
        self.total_prep_time
    }

    /// Average preparation minutes per order, rounded to the nearest minute
    /// with halves away from zero.
    ///
    /// An empty registry averages to zero.
    pub fn average_prep_time(&self) -> u32 {
        if self.orders.is_empty() {
            return 0;
        }
        (f64::from(self.total_prep_time) / self.orders.len() as f64).round() as u32
    }

    /// Number of orders currently counting as elaborate.
    pub fn elaborate_count(&self) -> usize {
        self.elaborate_count
    }

    /// Share of orders counting as elaborate, in percent rounded to two
    /// decimals.
    ///
    /// An empty registry reports `0.0`.
    pub fn elaborate_percentage(&self) -> f64 {
        if self.orders.is_empty() {
            return 0.0;
        }
        let percentage = self.elaborate_count as f64 / self.orders.len() as f64 * 100.0;
        (percentage * 100.0).round() / 100.0
    }

    /// Number of orders tagged with the cuisine named by `label`.
    ///
    /// Unknown labels tally zero without scanning.
    pub fn tally_by_cuisine(&self, label: &str) -> usize {
        match label.parse::<CuisineType>() {
            Ok(cuisine) => self
                .orders
                .iter()
                .filter(|dish| dish.cuisine() == cuisine)
                .count(),
            Err(_) => 0,
        }
    }

    // =========================================================================
    // Container passthroughs
    // =========================================================================

    /// Number of orders currently placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// `true` when no orders are placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total number of order slots.
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// `true` when every order slot is taken.
    pub fn is_full(&self) -> bool {
        self.orders.is_full()
    }

    /// Iterates over the orders in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.orders.iter()
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

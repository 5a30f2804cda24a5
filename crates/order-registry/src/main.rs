//! Demo binary: loads a small menu, mutates the registry, prints the report.
//!
//! Run with `RUST_LOG=order_registry=debug` to watch individual decisions.

use order_registry::logging::setup_tracing;
use order_registry::{CuisineType, Dish, OrderRegistry};
use tracing::info;

fn spaghetti() -> Dish {
    Dish::new(
        "Spaghetti",
        vec!["Pasta".into(), "Tomato Sauce".into(), "Basil".into()],
        20,
        12.50,
        CuisineType::Italian,
    )
}

fn tacos() -> Dish {
    Dish::new(
        "Tacos",
        vec!["Tortilla".into(), "Beef".into(), "Salsa".into()],
        15,
        8.75,
        CuisineType::Mexican,
    )
}

fn main() {
    setup_tracing();

    let mut registry = OrderRegistry::new();

    let menu = [
        spaghetti(),
        Dish::new(
            "Beef Stew",
            vec![
                "Beef".into(),
                "Potatoes".into(),
                "Carrots".into(),
                "Onions".into(),
                "Red Wine".into(),
            ],
            90,
            18.00,
            CuisineType::American,
        ),
        tacos(),
        Dish::new(
            "Pizza",
            vec!["Dough".into(), "Tomato".into(), "Mozzarella".into()],
            30,
            11.00,
            CuisineType::Italian,
        ),
    ];

    for dish in menu {
        registry.place_order(dish);
    }
    info!(placed = registry.len(), "Menu loaded");

    // A repeat of an order already on the board gets rejected.
    if !registry.place_order(spaghetti()) {
        info!("Repeat order rejected");
    }

    print!("{}", registry.format_report());

    registry.serve_order(&tacos());

    let released = registry.release_below_prep_time(30);
    info!(released, remaining = registry.len(), "Cleared the quick orders");

    info!(
        total_prep_time = registry.prep_time_sum(),
        elaborate = registry.elaborate_count(),
        "Demo finished"
    );
}

//! Cart management commands.
//!
//! Thin wrappers over the cart engine: invalid input is swallowed by
//! the engine itself (logged, no state change), so these commands
//! simply print the resulting cart.

use mystore_core::{ProductId, RawPrice};
use mystore_storefront::{AddToCart, AppState};

/// Print the cart contents and total.
pub fn show(state: &AppState) {
    let lines = state.cart().lines();

    #[allow(clippy::print_stdout)]
    {
        if lines.is_empty() {
            println!("Your cart is empty.");
            return;
        }

        for line in &lines {
            println!(
                "{:<24} {:>3} x ${:>10.2} = ${:>10.2}",
                line.product_id,
                line.quantity,
                line.price,
                line.line_total()
            );
        }
        println!("Total: ${:.2}", state.cart().total_price());
    }
}

/// Add a product to the cart (or bump its quantity).
pub fn add(state: &AppState, id: &str, price: Option<String>, image: String, name: Option<String>) {
    state.cart().add(AddToCart {
        product_id: ProductId::new(id),
        price: price.map(RawPrice::from),
        image,
        name,
    });
    show(state);
}

/// Remove a product's line entirely.
pub fn remove(state: &AppState, id: &str) {
    state.cart().remove(&ProductId::new(id));
    show(state);
}

/// Set a product's quantity; non-positive or unparseable input removes
/// the line.
pub fn set_quantity(state: &AppState, id: &str, quantity: &str) {
    state.cart().update_quantity(&ProductId::new(id), quantity);
    show(state);
}

/// Empty the cart.
pub fn clear(state: &AppState) {
    state.cart().clear();
    show(state);
}

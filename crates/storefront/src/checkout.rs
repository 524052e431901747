//! Checkout collaborator: order summary and simulated payment.
//!
//! Checkout consumes the cart engine through the narrow surface the
//! rest of the app sees - lines, total, clear. Payment is simulated
//! only; no processor integration.

use std::time::Duration;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use mystore_core::CartLine;

use crate::cart::CartEngine;

/// Flat sales tax applied at checkout.
const TAX_RATE: f64 = 0.10;

/// Simulated payment-processing latency.
const PAYMENT_DELAY: Duration = Duration::from_secs(1);

/// Errors that can occur placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires a non-empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Priced order summary shown before payment.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Cart lines at summary time, in first-added order.
    pub lines: Vec<CartLine>,
    /// Sum of line totals.
    pub subtotal: f64,
    /// Tax on the subtotal.
    pub tax: f64,
    /// Subtotal plus tax.
    pub total: f64,
}

impl OrderSummary {
    /// Price the current cart.
    #[must_use]
    pub fn from_cart(cart: &CartEngine) -> Self {
        let lines = cart.lines();
        let subtotal = cart.total_price();
        let tax = subtotal * TAX_RATE;

        Self {
            lines,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Receipt for a successfully placed order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Generated order identifier.
    pub order_id: Uuid,
    /// Amount charged (summary total).
    pub total: f64,
}

/// Place an order for the current cart contents.
///
/// Simulates payment processing, then clears the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to order.
pub async fn place_order(cart: &CartEngine) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let summary = OrderSummary::from_cart(cart);

    // Simulated payment processor round-trip
    tokio::time::sleep(PAYMENT_DELAY).await;

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        total: summary.total,
    };

    info!(
        order_id = %confirmation.order_id,
        total = confirmation.total,
        items = summary.item_count(),
        "Order placed"
    );

    cart.clear();
    Ok(confirmation)
}

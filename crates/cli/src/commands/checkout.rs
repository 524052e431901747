//! Checkout command: order summary and simulated payment.

use mystore_storefront::AppState;
use mystore_storefront::checkout::{self, CheckoutError, OrderSummary};

/// Print the order summary; with `confirm`, place the order.
pub async fn run(state: &AppState, confirm: bool) -> Result<(), CheckoutError> {
    let summary = OrderSummary::from_cart(state.cart());

    #[allow(clippy::print_stdout)]
    {
        if summary.lines.is_empty() {
            println!("Your cart is empty. Add items before checkout.");
            return Ok(());
        }

        for line in &summary.lines {
            println!(
                "{} x {} = ${:.2}",
                line.product_id,
                line.quantity,
                line.line_total()
            );
        }
        println!("Subtotal: ${:.2}", summary.subtotal);
        println!("Tax (10%): ${:.2}", summary.tax);
        println!("Total: ${:.2}", summary.total);

        if confirm {
            let confirmation = checkout::place_order(state.cart()).await?;
            println!(
                "Order {} placed for ${:.2}. Thank you for shopping at MyStore!",
                confirmation.order_id, confirmation.total
            );
        } else {
            println!("(dry run - pass --confirm to place the order)");
        }
    }

    Ok(())
}

//! Cart line type shared between the engine and its persisted form.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One distinct product entry in the cart with its quantity.
///
/// Serialized camelCase because the persisted cart blob uses the same
/// field names as the catalog wire format.
///
/// ## Invariants
///
/// Maintained by the cart engine, never by this type alone:
/// - at most one line per [`ProductId`] in a cart
/// - `quantity >= 1`; a line whose quantity would drop to zero is
///   removed instead of persisted
/// - `price` is already normalized (non-negative, finite), captured at
///   first add and unchanged by later adds of the same product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product identifier; the cart's unique key.
    pub product_id: ProductId,
    /// Display name, when the add-to-cart input carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Normalized unit price.
    pub price: f64,
    /// Product image URL.
    pub image: String,
    /// Number of units; always at least 1.
    pub quantity: u64,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)] // quantities are human-scale
        {
            self.price * self.quantity as f64
        }
    }
}

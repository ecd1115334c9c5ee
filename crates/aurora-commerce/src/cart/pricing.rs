//! Derived cart pricing.
//!
//! Pricing is computed from line items on demand, never stored: the cart
//! holds only rooms, dates, and guest counts.

use crate::cart::CartLineItem;
use crate::error::BookingError;
use crate::ids::CartItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Line item ID.
    pub cart_item_id: CartItemId,
    /// Nightly rate from the room snapshot.
    pub nightly_rate: Money,
    /// Billable nights.
    pub nights: i64,
    /// Item total (nightly_rate * nights).
    pub total: Money,
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line-item breakdown.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of all item totals.
    pub grand_total: Money,
}

impl CartPricing {
    /// Price a list of line items.
    ///
    /// An empty list prices to exactly zero. Returns an error if any item
    /// total overflows or items mix currencies.
    pub fn from_items(items: &[CartLineItem]) -> Result<Self, BookingError> {
        let currency = items
            .first()
            .map(|i| i.room.price_per_night.currency)
            .unwrap_or_default();

        let mut line_items = Vec::with_capacity(items.len());
        for item in items {
            line_items.push(LineItemPricing {
                cart_item_id: item.id.clone(),
                nightly_rate: item.room.price_per_night,
                nights: item.nights(),
                total: item.total()?,
            });
        }

        let grand_total = Money::try_sum(line_items.iter().map(|p| &p.total), currency)
            .ok_or_else(|| BookingError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: "mixed".to_string(),
            })?;

        Ok(Self {
            line_items,
            grand_total,
        })
    }

    /// Currency of the grand total.
    pub fn currency(&self) -> Currency {
        self.grand_total.currency
    }
}

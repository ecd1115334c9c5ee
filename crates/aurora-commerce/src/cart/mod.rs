//! Cart line items and derived pricing.

mod item;
mod pricing;

pub use item::{CartItemPatch, CartLineItem};
pub use pricing::{CartPricing, LineItemPricing};

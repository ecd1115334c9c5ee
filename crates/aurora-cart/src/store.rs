//! The session cart store.

use crate::error::StoreError;
use crate::storage::CartStorage;
use aurora_commerce::cart::{CartItemPatch, CartLineItem, CartPricing};
use aurora_commerce::catalog::RoomSnapshot;
use aurora_commerce::ids::CartItemId;
use aurora_commerce::money::Money;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// What `add_to_cart` did, with the message the UI shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was created.
    Added,
    /// An existing item's guest counts were updated.
    Updated,
}

impl AddOutcome {
    /// Human-readable confirmation message.
    pub fn message(&self) -> &'static str {
        match self {
            AddOutcome::Added => "Room added to cart successfully",
            AddOutcome::Updated => "Cart updated successfully",
        }
    }
}

/// The authoritative in-session list of cart line items.
///
/// One store instance exists per session, constructed at application start
/// and handed to consumers; it owns the item list outright, and UI surfaces
/// read through [`items`](CartStore::items) and the derived queries.
///
/// Every mutation is synchronous and writes the whole list through to the
/// injected storage. When that write fails the in-memory mutation stays
/// applied and the mutation returns `Err(StoreError::Persist)` so the caller
/// decides what to surface.
pub struct CartStore<S: CartStorage> {
    items: Vec<CartLineItem>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store over the given storage, hydrating from it.
    ///
    /// A missing slot starts the cart empty. An unreadable or unparseable
    /// slot also starts it empty, with a warning, rather than failing the
    /// whole session.
    pub fn new(storage: S) -> Self {
        let items = match storage.load() {
            Ok(Some(items)) => {
                debug!(count = items.len(), "cart hydrated from storage");
                items
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Add a room to the cart for a stay.
    ///
    /// At most one line item exists per `(room, check_in, check_out)`
    /// triple: adding a stay already in the cart overwrites that item's
    /// guest counts instead of duplicating it. Inputs are taken as-is; date
    /// ordering and guest counts are the form layer's problem.
    pub fn add_to_cart(
        &mut self,
        room: RoomSnapshot,
        check_in: NaiveDate,
        check_out: NaiveDate,
        num_adults: u32,
        num_children: u32,
    ) -> Result<AddOutcome, StoreError> {
        let outcome = if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is_same_stay(&room.room_id, check_in, check_out))
        {
            existing.apply(&CartItemPatch::guests(num_adults, num_children));
            AddOutcome::Updated
        } else {
            self.items.push(CartLineItem::new(
                room, check_in, check_out, num_adults, num_children,
            ));
            AddOutcome::Added
        };

        debug!(?outcome, count = self.items.len(), "cart add");
        self.persist()?;
        Ok(outcome)
    }

    /// Remove a line item. Removing an unknown id is a silent no-op.
    pub fn remove_from_cart(&mut self, cart_item_id: &CartItemId) -> Result<(), StoreError> {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != cart_item_id);
        if self.items.len() == len_before {
            return Ok(());
        }
        debug!(count = self.items.len(), "cart item removed");
        self.persist()
    }

    /// Merge a partial update into a line item. Unknown ids are a silent
    /// no-op.
    pub fn update_cart_item(
        &mut self,
        cart_item_id: &CartItemId,
        patch: &CartItemPatch,
    ) -> Result<(), StoreError> {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == cart_item_id) else {
            return Ok(());
        };
        item.apply(patch);
        self.persist()
    }

    /// Empty the cart and delete the storage entry entirely.
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.items.clear();
        debug!("cart cleared");
        self.storage.clear().map_err(|e| {
            warn!(error = %e, "cart storage clear failed");
            e.into()
        })
    }

    /// Current line items, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of line items (not guests, not nights).
    pub fn cart_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grand total over all items: nightly rate times nights, summed.
    ///
    /// Exactly zero for an empty cart.
    pub fn cart_total(&self) -> Result<Money, StoreError> {
        Ok(self.pricing()?.grand_total)
    }

    /// Full per-item pricing breakdown.
    pub fn pricing(&self) -> Result<CartPricing, StoreError> {
        Ok(CartPricing::from_items(&self.items)?)
    }

    /// Get a line item by id.
    pub fn get_item(&self, cart_item_id: &CartItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == cart_item_id)
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage.save(&self.items).map_err(|e| {
            warn!(error = %e, "cart persistence failed");
            e.into()
        })
    }
}

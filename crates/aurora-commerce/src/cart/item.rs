//! Cart line item types.

use crate::catalog::{current_timestamp, RoomSnapshot};
use crate::dates::{nights_between, StayDates};
use crate::error::BookingError;
use crate::ids::{CartItemId, RoomId};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a single room/date-range booking intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Unique line item identifier, assigned at insertion.
    pub id: CartItemId,
    /// Snapshot of the room taken when the item was added.
    pub room: RoomSnapshot,
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
    /// Number of adults.
    pub num_adults: u32,
    /// Number of children.
    pub num_children: u32,
    /// Unix timestamp of insertion, informational only.
    pub added_at: i64,
}

impl CartLineItem {
    /// Create a new line item.
    pub fn new(
        room: RoomSnapshot,
        check_in: NaiveDate,
        check_out: NaiveDate,
        num_adults: u32,
        num_children: u32,
    ) -> Self {
        Self {
            id: CartItemId::generate(),
            room,
            check_in,
            check_out,
            num_adults,
            num_children,
            added_at: current_timestamp(),
        }
    }

    /// The stay this item books.
    pub fn stay(&self) -> StayDates {
        StayDates::new(self.check_in, self.check_out)
    }

    /// Billable nights for this item.
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    /// Item total: nightly rate times nights.
    ///
    /// Returns an error on arithmetic overflow.
    pub fn total(&self) -> Result<Money, BookingError> {
        self.room
            .price_per_night
            .try_multiply(self.nights())
            .ok_or(BookingError::Overflow)
    }

    /// Total guest count (adults plus children).
    ///
    /// Guest counts arrive unvalidated, so the sum saturates instead of
    /// overflowing on absurd input.
    pub fn total_guests(&self) -> u32 {
        self.num_adults.saturating_add(self.num_children)
    }

    /// Check whether this item books the given room for the given dates.
    ///
    /// This is the cart's dedup key: at most one item per
    /// `(room, check_in, check_out)` triple.
    pub fn is_same_stay(&self, room_id: &RoomId, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        &self.room.room_id == room_id && self.check_in == check_in && self.check_out == check_out
    }

    /// Merge a partial update into this item. Unset fields are left alone.
    pub fn apply(&mut self, patch: &CartItemPatch) {
        if let Some(check_in) = patch.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            self.check_out = check_out;
        }
        if let Some(num_adults) = patch.num_adults {
            self.num_adults = num_adults;
        }
        if let Some(num_children) = patch.num_children {
            self.num_children = num_children;
        }
    }
}

/// A partial update to a cart line item.
///
/// Only set fields are merged; the item's id, room snapshot, and insertion
/// timestamp are never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartItemPatch {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub num_adults: Option<u32>,
    pub num_children: Option<u32>,
}

impl CartItemPatch {
    /// Patch only the guest counts.
    pub fn guests(num_adults: u32, num_children: u32) -> Self {
        Self {
            num_adults: Some(num_adults),
            num_children: Some(num_children),
            ..Self::default()
        }
    }

    /// Patch only the stay dates.
    pub fn dates(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            ..Self::default()
        }
    }
}

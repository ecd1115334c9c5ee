//! Hotel booking domain types and logic for AuroraStay.
//!
//! This crate provides the client-side domain model of a hotel booking
//! front-end:
//!
//! - **Catalog**: rooms, AC classification, listing status, snapshots
//! - **Cart**: line items (room + stay + guests) and derived pricing
//! - **Booking**: booking records, confirmation codes, checkout flow
//! - **Search**: in-memory room filter, sort, and pagination
//!
//! # Example
//!
//! ```rust
//! use aurora_commerce::prelude::*;
//!
//! let room = Room::new("Deluxe", AcType::Ac, Money::from_decimal(100.0, Currency::USD));
//!
//! let item = CartLineItem::new(
//!     room.snapshot(),
//!     "2024-01-01".parse().unwrap(),
//!     "2024-01-03".parse().unwrap(),
//!     2,
//!     0,
//! );
//!
//! assert_eq!(item.nights(), 2);
//! assert_eq!(item.total().unwrap().display(), "$200.00");
//! ```

pub mod dates;
pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod cart;
pub mod catalog;
pub mod search;

pub use dates::{nights_between, StayDates};
pub use error::BookingError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dates::{nights_between, StayDates};
    pub use crate::error::BookingError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{AcType, Room, RoomSnapshot, RoomStatus};

    // Cart
    pub use crate::cart::{CartItemPatch, CartLineItem, CartPricing, LineItemPricing};

    // Booking
    pub use crate::booking::{Booking, BookingFlow, BookingRequest, BookingStatus, FlowStep};

    // Search
    pub use crate::search::{Pagination, RoomFilter, RoomQuery, RoomSearchResults, RoomSort};
}

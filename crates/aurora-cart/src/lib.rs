//! Session cart store for AuroraStay.
//!
//! One `CartStore` instance holds the authoritative list of cart line items
//! for a browsing session. Mutations run synchronously on the calling
//! thread and write the whole list through to an injected [`CartStorage`]
//! backend; derived queries (count, nights, totals) compute from the live
//! list. See `aurora-commerce` for the item and pricing types.
//!
//! # Example
//!
//! ```rust
//! use aurora_cart::{CartStore, MemoryStorage};
//! use aurora_commerce::prelude::*;
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! let room = Room::new("Deluxe", AcType::Ac, Money::from_decimal(100.0, Currency::USD));
//!
//! let outcome = cart
//!     .add_to_cart(
//!         room.snapshot(),
//!         "2024-01-01".parse().unwrap(),
//!         "2024-01-03".parse().unwrap(),
//!         2,
//!         0,
//!     )
//!     .unwrap();
//!
//! println!("{}", outcome.message());
//! assert_eq!(cart.cart_count(), 1);
//! assert_eq!(cart.cart_total().unwrap().display(), "$200.00");
//! ```

mod error;
mod storage;
mod store;

pub use error::{StorageError, StoreError};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, CART_STORAGE_KEY};
pub use store::{AddOutcome, CartStore};

// The night counter the totals are derived from, for callers that price a
// single stay without a store.
pub use aurora_commerce::dates::nights_between;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AddOutcome, CartStorage, CartStore, JsonFileStorage, MemoryStorage, StorageError,
        StoreError, CART_STORAGE_KEY,
    };
}

//! In-memory room search: filter, sort, paginate.
//!
//! The room list arrives from the backend in full; narrowing it down is
//! entirely client-side, so the search executes over a slice of rooms.

mod filter;
mod query;
mod results;

pub use filter::RoomFilter;
pub use query::{RoomQuery, RoomSort, DEFAULT_ROOMS_PER_PAGE};
pub use results::{Pagination, RoomSearchResults};

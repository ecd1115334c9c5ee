//! Room search query builder and execution.

use crate::catalog::Room;
use crate::dates::StayDates;
use crate::ids::RoomId;
use crate::search::{Pagination, RoomFilter, RoomSearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for room listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomSort {
    /// Nightly rate, low to high.
    #[default]
    PriceAsc,
    /// Nightly rate, high to low.
    PriceDesc,
    /// Room type A-Z.
    TypeAsc,
    /// Room type Z-A.
    TypeDesc,
    /// Newest listings first.
    Newest,
}

impl RoomSort {
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomSort::PriceAsc => "Price: Low to High",
            RoomSort::PriceDesc => "Price: High to Low",
            RoomSort::TypeAsc => "Room Type: A-Z",
            RoomSort::TypeDesc => "Room Type: Z-A",
            RoomSort::Newest => "Newest",
        }
    }

    fn compare(&self, a: &Room, b: &Room) -> Ordering {
        match self {
            RoomSort::PriceAsc => a
                .price_per_night
                .amount_cents
                .cmp(&b.price_per_night.amount_cents),
            RoomSort::PriceDesc => b
                .price_per_night
                .amount_cents
                .cmp(&a.price_per_night.amount_cents),
            RoomSort::TypeAsc => a
                .room_type
                .to_lowercase()
                .cmp(&b.room_type.to_lowercase()),
            RoomSort::TypeDesc => b
                .room_type
                .to_lowercase()
                .cmp(&a.room_type.to_lowercase()),
            RoomSort::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

/// Rooms shown per listing page.
pub const DEFAULT_ROOMS_PER_PAGE: i64 = 7;

/// A room search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomQuery {
    /// Filters to apply (AND semantics).
    pub filters: Vec<RoomFilter>,
    /// Sort option.
    pub sort: RoomSort,
    /// Current page (1-indexed).
    pub page: i64,
    /// Rooms per page.
    pub per_page: i64,
}

impl RoomQuery {
    /// Create a new query with default sort and pagination.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: RoomSort::default(),
            page: 1,
            per_page: DEFAULT_ROOMS_PER_PAGE,
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: RoomFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: RoomSort) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page (1-indexed; values below 1 are clamped to 1).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size (values below 1 are clamped to 1).
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Run the query over a room list.
    ///
    /// `occupancy` maps a room to the stays already booked against it; pass
    /// a closure returning an empty slice when no `Available` filter is in
    /// play.
    pub fn execute<'a, F>(&self, rooms: &[Room], mut occupancy: F) -> RoomSearchResults
    where
        F: FnMut(&RoomId) -> &'a [StayDates],
    {
        let mut matched: Vec<Room> = rooms
            .iter()
            .filter(|room| {
                let occupied = occupancy(&room.id);
                self.filters.iter().all(|f| f.matches(room, occupied))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        // Pagination clamps page and per_page; slice with its values, not
        // the raw query fields.
        let pagination = Pagination::new(self.page, self.per_page, matched.len() as i64);
        let start = (pagination.offset() as usize).min(matched.len());
        let end = (start + pagination.per_page as usize).min(matched.len());
        let page_rooms = matched[start..end].to_vec();

        RoomSearchResults {
            rooms: page_rooms,
            pagination,
        }
    }

    /// Distinct room type names in a room list, for populating the type
    /// filter dropdown. Order of first appearance is kept.
    pub fn distinct_room_types(rooms: &[Room]) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for room in rooms {
            if !types.iter().any(|t| t.eq_ignore_ascii_case(&room.room_type)) {
                types.push(room.room_type.clone());
            }
        }
        types
    }
}

impl Default for RoomQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AcType;
    use crate::money::{Currency, Money};

    fn room(room_type: &str, ac: AcType, rate_cents: i64) -> Room {
        Room::new(room_type, ac, Money::new(rate_cents, Currency::USD))
    }

    fn no_occupancy(_: &RoomId) -> &'static [StayDates] {
        &[]
    }

    fn fixture() -> Vec<Room> {
        vec![
            room("Deluxe", AcType::Ac, 15000),
            room("Standard", AcType::NonAc, 8000),
            room("Suite", AcType::Ac, 30000),
            room("Standard", AcType::Ac, 9000),
        ]
    }

    #[test]
    fn test_filter_and_sort() {
        let rooms = fixture();
        let results = RoomQuery::new()
            .with_filter(RoomFilter::AcType(AcType::Ac))
            .with_sort(RoomSort::PriceAsc)
            .execute(&rooms, no_occupancy);

        let rates: Vec<i64> = results
            .rooms
            .iter()
            .map(|r| r.price_per_night.amount_cents)
            .collect();
        assert_eq!(rates, vec![9000, 15000, 30000]);
        assert_eq!(results.pagination.total, 3);
    }

    #[test]
    fn test_filters_are_anded() {
        let rooms = fixture();
        let results = RoomQuery::new()
            .with_filter(RoomFilter::room_type("Standard"))
            .with_filter(RoomFilter::AcType(AcType::Ac))
            .execute(&rooms, no_occupancy);

        assert_eq!(results.rooms.len(), 1);
        assert_eq!(results.rooms[0].price_per_night.amount_cents, 9000);
    }

    #[test]
    fn test_pagination_slices_results() {
        let rooms: Vec<Room> = (0..10)
            .map(|i| room("Standard", AcType::Ac, 1000 * (i + 1)))
            .collect();

        let page2 = RoomQuery::new()
            .with_sort(RoomSort::PriceAsc)
            .with_per_page(4)
            .with_page(2)
            .execute(&rooms, no_occupancy);

        assert_eq!(page2.rooms.len(), 4);
        assert_eq!(page2.rooms[0].price_per_night.amount_cents, 5000);
        assert_eq!(page2.pagination.total_pages, 3);
        assert!(page2.pagination.has_prev);
        assert!(page2.pagination.has_next);
    }

    #[test]
    fn test_deserialized_query_with_zero_page_size() {
        // Query structs come off the wire with pub fields, bypassing the
        // builder clamps; a zero page size must not panic in execute.
        let rooms = fixture();
        let query: RoomQuery = serde_json::from_str(
            r#"{"filters":[],"sort":"PriceAsc","page":1,"per_page":0}"#,
        )
        .unwrap();

        let results = query.execute(&rooms, no_occupancy);
        assert_eq!(results.pagination.per_page, 1);
        assert_eq!(results.rooms.len(), 1);
        assert_eq!(results.pagination.total, 4);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let rooms = fixture();
        let results = RoomQuery::new().with_page(9).execute(&rooms, no_occupancy);
        assert!(results.rooms.is_empty());
        assert_eq!(results.pagination.total, 4);
    }

    #[test]
    fn test_distinct_room_types() {
        let rooms = fixture();
        let types = RoomQuery::distinct_room_types(&rooms);
        assert_eq!(types, vec!["Deluxe", "Standard", "Suite"]);
    }
}

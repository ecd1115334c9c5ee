//! Room filter types.

use crate::catalog::{AcType, Room};
use crate::dates::StayDates;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate applied to rooms in a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RoomFilter {
    /// Filter by room type name (case-insensitive exact match).
    RoomType(String),
    /// Filter by AC classification.
    AcType(AcType),
    /// Filter by nightly-rate range (inclusive bounds).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Rooms that sleep at least this many guests.
    MinCapacity(u32),
    /// Only rooms currently bookable.
    Bookable,
    /// Rooms free for a stay, given existing bookings' stays for each room.
    /// The search caller supplies the occupancy lookup.
    Available(StayDates),
    /// Substring match in room type or description (case-insensitive).
    Text(String),
}

impl RoomFilter {
    /// Create a room type filter.
    pub fn room_type(name: impl Into<String>) -> Self {
        RoomFilter::RoomType(name.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        RoomFilter::PriceRange { min, max }
    }

    /// Check whether a room passes this filter.
    ///
    /// `occupied` yields the stays already booked for the room; only the
    /// `Available` filter consults it.
    pub fn matches(&self, room: &Room, occupied: &[StayDates]) -> bool {
        match self {
            RoomFilter::RoomType(name) => room.room_type.eq_ignore_ascii_case(name),
            RoomFilter::AcType(ac) => room.ac_type == *ac,
            RoomFilter::PriceRange { min, max } => {
                let cents = room.price_per_night.amount_cents;
                min.map_or(true, |m| cents >= m.amount_cents)
                    && max.map_or(true, |m| cents <= m.amount_cents)
            }
            RoomFilter::MinCapacity(guests) => room.fits_guests(*guests),
            RoomFilter::Bookable => room.status.is_bookable(),
            RoomFilter::Available(stay) => occupied.iter().all(|booked| !booked.overlaps(stay)),
            RoomFilter::Text(text) => {
                let needle = text.to_lowercase();
                room.room_type.to_lowercase().contains(&needle)
                    || room
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn room(room_type: &str, rate_cents: i64) -> Room {
        Room::new(room_type, AcType::Ac, Money::new(rate_cents, Currency::USD))
    }

    #[test]
    fn test_room_type_filter_ignores_case() {
        let r = room("Deluxe", 10000);
        assert!(RoomFilter::room_type("deluxe").matches(&r, &[]));
        assert!(!RoomFilter::room_type("Suite").matches(&r, &[]));
    }

    #[test]
    fn test_price_range_bounds_inclusive() {
        let r = room("Standard", 10000);
        let in_range = RoomFilter::price_range(
            Some(Money::new(10000, Currency::USD)),
            Some(Money::new(15000, Currency::USD)),
        );
        let below = RoomFilter::price_range(Some(Money::new(10001, Currency::USD)), None);

        assert!(in_range.matches(&r, &[]));
        assert!(!below.matches(&r, &[]));
    }

    #[test]
    fn test_min_capacity_filter() {
        let family = room("Family", 12000).with_capacity(4);
        let double = room("Standard", 8000);

        let filter = RoomFilter::MinCapacity(3);
        assert!(filter.matches(&family, &[]));
        assert!(!filter.matches(&double, &[]));
    }

    #[test]
    fn test_availability_filter() {
        let r = room("Suite", 20000);
        let booked = vec![StayDates::new(date("2024-01-10"), date("2024-01-15"))];

        let clashing = RoomFilter::Available(StayDates::new(date("2024-01-12"), date("2024-01-14")));
        let free = RoomFilter::Available(StayDates::new(date("2024-01-15"), date("2024-01-18")));

        assert!(!clashing.matches(&r, &booked));
        assert!(free.matches(&r, &booked));
    }

    #[test]
    fn test_text_filter_searches_description() {
        let r = room("Standard", 8000).with_description("Garden view with balcony");
        assert!(RoomFilter::Text("balcony".to_string()).matches(&r, &[]));
        assert!(!RoomFilter::Text("sea view".to_string()).matches(&r, &[]));
    }
}

//! Room types.

use crate::ids::RoomId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Air-conditioning classification of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AcType {
    /// Air-conditioned room.
    #[default]
    Ac,
    /// Non-air-conditioned room.
    NonAc,
}

impl AcType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcType::Ac => "ac",
            AcType::NonAc => "non_ac",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AcType::Ac => "AC",
            AcType::NonAc => "Non-AC",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ac" => Some(AcType::Ac),
            "non_ac" | "non-ac" | "nonac" => Some(AcType::NonAc),
            _ => None,
        }
    }
}

/// Room availability status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomStatus {
    /// Room is listed and bookable.
    #[default]
    Active,
    /// Room is temporarily out of service.
    Maintenance,
    /// Room is removed from listings but data preserved.
    Archived,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Active => "active",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(RoomStatus::Active),
            "maintenance" => Some(RoomStatus::Maintenance),
            "archived" => Some(RoomStatus::Archived),
            _ => None,
        }
    }

    /// Check if rooms with this status can be added to a cart.
    pub fn is_bookable(&self) -> bool {
        matches!(self, RoomStatus::Active)
    }
}

/// A room in the hotel catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Room type name (e.g., "Deluxe", "Suite"). Free-form: the catalog's
    /// distinct values drive the type filter.
    pub room_type: String,
    /// AC classification.
    pub ac_type: AcType,
    /// Nightly rate.
    pub price_per_night: Money,
    /// Maximum number of guests the room sleeps.
    pub capacity: u32,
    /// Room description.
    pub description: Option<String>,
    /// Photo reference (URL).
    pub photo_url: Option<String>,
    /// Listing status.
    pub status: RoomStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Room {
    /// Guests a room sleeps unless stated otherwise: a standard double.
    pub const DEFAULT_CAPACITY: u32 = 2;

    /// Create a new active room.
    pub fn new(room_type: impl Into<String>, ac_type: AcType, price_per_night: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: RoomId::generate(),
            room_type: room_type.into(),
            ac_type,
            price_per_night,
            capacity: Self::DEFAULT_CAPACITY,
            description: None,
            photo_url: None,
            status: RoomStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the guest capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check whether the room sleeps the given party.
    pub fn fits_guests(&self, num_guests: u32) -> bool {
        num_guests <= self.capacity
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the photo URL.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Take the point-in-time copy of this room that the cart carries.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.id.clone(),
            room_type: self.room_type.clone(),
            price_per_night: self.price_per_night,
            description: self.description.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

/// A point-in-time copy of a room, taken when the room enters a cart or
/// booking.
///
/// Deliberately not live-linked to the catalog: later price or description
/// changes do not retroactively affect items already carrying a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomSnapshot {
    /// Identifier of the room the snapshot was taken from.
    pub room_id: RoomId,
    /// Room type name at snapshot time.
    pub room_type: String,
    /// Nightly rate at snapshot time.
    pub price_per_night: Money,
    /// Description at snapshot time.
    pub description: Option<String>,
    /// Photo reference at snapshot time.
    pub photo_url: Option<String>,
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_room_creation() {
        let room = Room::new("Deluxe", AcType::Ac, Money::new(10000, Currency::USD))
            .with_description("Sea view");
        assert_eq!(room.room_type, "Deluxe");
        assert_eq!(room.status, RoomStatus::Active);
        assert!(room.status.is_bookable());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut room = Room::new("Suite", AcType::Ac, Money::new(20000, Currency::USD));
        let snapshot = room.snapshot();

        room.price_per_night = Money::new(25000, Currency::USD);

        assert_eq!(snapshot.price_per_night.amount_cents, 20000);
        assert_eq!(snapshot.room_id, room.id);
    }

    #[test]
    fn test_capacity() {
        let double = Room::new("Standard", AcType::Ac, Money::new(8000, Currency::USD));
        assert_eq!(double.capacity, Room::DEFAULT_CAPACITY);
        assert!(double.fits_guests(2));
        assert!(!double.fits_guests(3));

        let family = double.clone().with_capacity(5);
        assert!(family.fits_guests(5));
    }

    #[test]
    fn test_ac_type_parsing() {
        assert_eq!(AcType::from_str("AC"), Some(AcType::Ac));
        assert_eq!(AcType::from_str("Non-AC"), Some(AcType::NonAc));
        assert_eq!(AcType::from_str("fan"), None);
    }

    #[test]
    fn test_status_bookable() {
        assert!(RoomStatus::Active.is_bookable());
        assert!(!RoomStatus::Maintenance.is_bookable());
        assert!(!RoomStatus::Archived.is_bookable());
    }
}

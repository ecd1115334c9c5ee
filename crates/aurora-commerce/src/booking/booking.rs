//! Booking records and confirmation codes.

use crate::cart::CartLineItem;
use crate::catalog::{current_timestamp, RoomSnapshot};
use crate::dates::StayDates;
use crate::error::BookingError;
use crate::ids::{BookingId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Booking submitted, awaiting confirmation.
    #[default]
    Pending,
    /// Booking confirmed by the hotel.
    Confirmed,
    /// Guest has checked in.
    CheckedIn,
    /// Stay completed.
    CheckedOut,
    /// Booking cancelled.
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::CheckedIn => "Checked In",
            BookingStatus::CheckedOut => "Checked Out",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the booking is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }

    /// Check if the booking can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// The per-room booking payload submitted at checkout.
///
/// Payment submits one request per cart line item; the room and guest
/// identities travel separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    /// Check-in/check-out dates.
    pub stay: StayDates,
    /// Number of adults.
    pub num_adults: u32,
    /// Number of children.
    pub num_children: u32,
}

impl BookingRequest {
    /// Build the request for one cart line item.
    pub fn from_cart_item(item: &CartLineItem) -> Self {
        Self {
            stay: item.stay(),
            num_adults: item.num_adults,
            num_children: item.num_children,
        }
    }
}

/// A booking: one room reserved for one stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Code the guest uses to look the booking up later.
    pub confirmation_code: String,
    /// Snapshot of the booked room.
    pub room: RoomSnapshot,
    /// Check-in/check-out dates.
    pub stay: StayDates,
    /// Number of adults.
    pub num_adults: u32,
    /// Number of children.
    pub num_children: u32,
    /// Account the booking belongs to, when the guest is signed in.
    pub user_id: Option<UserId>,
    /// Guest contact email.
    pub guest_email: Option<String>,
    /// Total charged: nightly rate times nights, fixed at booking time.
    pub total: Money,
    /// Current status.
    pub status: BookingStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Booking {
    /// Create a booking from a cart line item.
    ///
    /// The total is computed once here and stored; later catalog price
    /// changes never reprice an existing booking.
    pub fn from_cart_item(item: &CartLineItem) -> Result<Self, BookingError> {
        Ok(Self {
            id: BookingId::generate(),
            confirmation_code: generate_confirmation_code(),
            room: item.room.clone(),
            stay: item.stay(),
            num_adults: item.num_adults,
            num_children: item.num_children,
            user_id: None,
            guest_email: None,
            total: item.total()?,
            status: BookingStatus::Pending,
            created_at: current_timestamp(),
        })
    }

    /// Attach the booking to a signed-in guest's account.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the guest contact email.
    pub fn with_guest_email(mut self, email: impl Into<String>) -> Self {
        self.guest_email = Some(email.into());
        self
    }

    /// Bookings belonging to a user, for the profile page's booking list.
    pub fn for_user<'a>(bookings: &'a [Booking], user_id: &UserId) -> Vec<&'a Booking> {
        bookings
            .iter()
            .filter(|b| b.user_id.as_ref() == Some(user_id))
            .collect()
    }

    /// Total guest count. Saturates on absurd input, as the cart does.
    pub fn total_guests(&self) -> u32 {
        self.num_adults.saturating_add(self.num_children)
    }

    /// Check whether a user-entered code refers to this booking.
    ///
    /// Matching is whitespace- and case-insensitive, since guests retype
    /// codes from confirmation emails.
    pub fn matches_code(&self, code: &str) -> bool {
        normalize_confirmation_code(code) == normalize_confirmation_code(&self.confirmation_code)
    }

    /// Find a booking by confirmation code in a list.
    pub fn find_by_code<'a>(
        bookings: &'a [Booking],
        code: &str,
    ) -> Result<&'a Booking, BookingError> {
        bookings
            .iter()
            .find(|b| b.matches_code(code))
            .ok_or_else(|| BookingError::UnknownConfirmationCode(code.trim().to_string()))
    }
}

/// Normalize a confirmation code for comparison.
pub fn normalize_confirmation_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Alphabet for confirmation codes. 0/O and 1/I are excluded so codes
/// survive being read over the phone.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LEN: usize = 10;

/// Generate a confirmation code.
fn generate_confirmation_code() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    // Mix with a splitmix64-style scramble so consecutive codes don't share
    // a prefix.
    let mut state = nanos ^ COUNTER.fetch_add(0x9e37_79b9_7f4a_7c15, Ordering::SeqCst);

    let mut code = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        state ^= state >> 30;
        state = state.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        state ^= state >> 27;
        code.push(CODE_ALPHABET[(state % CODE_ALPHABET.len() as u64) as usize] as char);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AcType, Room};
    use crate::money::Currency;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn cart_item() -> CartLineItem {
        let room = Room::new("Deluxe", AcType::Ac, Money::new(10000, Currency::USD));
        CartLineItem::new(room.snapshot(), date("2024-01-01"), date("2024-01-03"), 2, 1)
    }

    #[test]
    fn test_booking_from_cart_item() {
        let item = cart_item();
        let booking = Booking::from_cart_item(&item).unwrap();

        assert_eq!(booking.total.amount_cents, 20000);
        assert_eq!(booking.total_guests(), 3);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.room.room_id, item.room.room_id);
    }

    #[test]
    fn test_confirmation_codes_are_distinct() {
        let a = Booking::from_cart_item(&cart_item()).unwrap();
        let b = Booking::from_cart_item(&cart_item()).unwrap();
        assert_ne!(a.confirmation_code, b.confirmation_code);
        assert_eq!(a.confirmation_code.len(), CODE_LEN);
    }

    #[test]
    fn test_code_matching_is_lenient() {
        let booking = Booking::from_cart_item(&cart_item()).unwrap();
        let entered = format!("  {}  ", booking.confirmation_code.to_lowercase());
        assert!(booking.matches_code(&entered));
        assert!(!booking.matches_code("WRONGCODE1"));
    }

    #[test]
    fn test_find_by_code() {
        let bookings = vec![
            Booking::from_cart_item(&cart_item()).unwrap(),
            Booking::from_cart_item(&cart_item()).unwrap(),
        ];
        let code = bookings[1].confirmation_code.clone();

        let found = Booking::find_by_code(&bookings, &code).unwrap();
        assert_eq!(found.id, bookings[1].id);

        assert!(Booking::find_by_code(&bookings, "NOSUCHCODE").is_err());
    }

    #[test]
    fn test_bookings_for_user() {
        let alice = UserId::new("user-alice");
        let bookings = vec![
            Booking::from_cart_item(&cart_item())
                .unwrap()
                .with_user(alice.clone()),
            Booking::from_cart_item(&cart_item()).unwrap(),
            Booking::from_cart_item(&cart_item())
                .unwrap()
                .with_user(alice.clone()),
        ];

        let theirs = Booking::for_user(&bookings, &alice);
        assert_eq!(theirs.len(), 2);
        // The anonymous booking stays out of every account's list.
        assert!(Booking::for_user(&bookings, &UserId::new("user-bob")).is_empty());
    }

    #[test]
    fn test_status_transitions_allowed() {
        assert!(BookingStatus::Pending.can_cancel());
        assert!(BookingStatus::Confirmed.can_cancel());
        assert!(!BookingStatus::CheckedIn.can_cancel());
        assert!(BookingStatus::Cancelled.is_terminal());
    }
}

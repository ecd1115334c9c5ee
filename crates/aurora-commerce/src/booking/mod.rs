//! Booking records and the booking flow state machine.

mod booking;
mod flow;

pub use booking::{normalize_confirmation_code, Booking, BookingRequest, BookingStatus};
pub use flow::{BookingFlow, FlowStep};

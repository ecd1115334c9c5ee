//! Room catalog module.

mod room;

pub use room::{AcType, Room, RoomSnapshot, RoomStatus};

pub(crate) use room::current_timestamp;

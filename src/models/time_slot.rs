use serde::{Deserialize, Serialize};

use crate::clock::SlotTime;

/// One hour of a court's weekly schedule
///
/// Slots are generated per court and day of week and are never deleted;
/// blocking only clears `is_available`. The listing endpoint folds active
/// bookings into the flag, so an unavailable slot may be either blocked or
/// booked — the grid keeps those apart (see
/// [`SlotGrid`](crate::state::SlotGrid)).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TimeSlot {
	pub id:           i64,
	pub court_id:     i64,
	/// 0 = Sunday through 6 = Saturday, matching JS `Date.getDay()`
	pub day_of_week:  u8,
	pub start_time:   SlotTime,
	pub end_time:     SlotTime,
	pub is_available: bool,
	#[serde(default)]
	pub created_at:   Option<String>,
}

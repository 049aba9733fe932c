use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::SlotTime;
use crate::models::TimeSlot;

/// Listing filter; the backend accepts either a concrete date or a bare
/// day of week
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TimeSlotQuery {
	pub court_id:    i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date:        Option<NaiveDate>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub day_of_week: Option<u8>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TimeSlotsResponse {
	pub time_slots: Vec<TimeSlot>,
	pub count:      i64,
}

/// One bulk-update covering every slot of a court/day whose boundaries fall
/// inside `start_time..=end_time`
///
/// A single-slot toggle is the range covering exactly that slot's own
/// boundaries. The backend reports only an affected-row count; partial
/// success inside the range is not distinguishable.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BulkSlotUpdate {
	pub court_id:     i64,
	pub day_of_week:  u8,
	pub start_time:   SlotTime,
	pub end_time:     SlotTime,
	pub is_available: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason:       Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_maintenance: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BulkUpdateResponse {
	pub message:       String,
	pub affected_rows: u64,
}

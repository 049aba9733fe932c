use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::SlotTime;
use crate::models::{Booking, BookingStatus, PaymentStatus};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BookingsQuery {
	pub user_id: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookingsResponse {
	pub bookings: Vec<Booking>,
	pub count:    i64,
}

/// One booking row for one court; the composer issues one of these per
/// selected court
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateBookingRequest {
	pub user_id:      i64,
	pub court_id:     i64,
	pub booking_date: NaiveDate,
	pub start_time:   SlotTime,
	pub end_time:     SlotTime,
	/// Whole hours
	pub duration:     u32,
	pub total_amount: f64,

	pub payment_method: String,
	pub status:         BookingStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateBookingResponse {
	pub message:    String,
	pub booking_id: i64,
}

/// Status mutation, used by the facilitator overview
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BookingUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status:         Option<BookingStatus>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payment_status: Option<PaymentStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookingActionResponse {
	pub message:    String,
	#[serde(default)]
	pub booking_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CancelBookingRequest {
	pub user_id: i64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BookingStatsQuery {
	pub facility_id: i64,
}

/// Facility-level booking counters, computed backend-side
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct BookingStats {
	pub total:     i64,
	pub upcoming:  i64,
	pub completed: i64,
	pub cancelled: i64,
	pub revenue:   f64,
}

/// Advisory conflict probe payload
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConflictCheckRequest {
	pub court_id:     i64,
	pub booking_date: NaiveDate,
	pub start_time:   SlotTime,
	pub end_time:     SlotTime,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConflictingBooking {
	pub id:         i64,
	pub start_time: SlotTime,
	pub end_time:   SlotTime,
	pub user_id:    i64,
}

/// Probe outcome; the backend answers 409 with the conflict list or 200
/// with an empty one
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConflictCheckResponse {
	pub has_conflict: bool,
	#[serde(default)]
	pub conflicts:    Vec<ConflictingBooking>,
	#[serde(default)]
	pub message:      Option<String>,
}
